use crate::error::{RsfError, RsfResult};
use crate::patterns::match_date_entry;
use chrono::{Local, NaiveDate};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// One entry of a resurfacing schedule
///
/// Entries compare and sort by `date` alone. Two entries on the same day are
/// equal even when only one of them is completed, so sorting keeps their
/// original relative order.
#[derive(Debug, Clone, Copy)]
pub struct DueDate {
    /// Calendar date the note should resurface on
    pub date: NaiveDate,
    /// True when the entry carries the `x` completion flag
    pub completed: bool,
}

impl DueDate {
    pub fn new(date: NaiveDate, completed: bool) -> Self {
        Self { date, completed }
    }

    /// Parse a single dateblock line such as `- x 2022-07-18`
    ///
    /// # Errors
    /// `StringParsingError` carrying the line when it is not a date entry or
    /// its date token is not a valid calendar date.
    pub fn from_datestr(datestr: &str) -> RsfResult<Self> {
        debug!(datestr, "parsing due date");

        let parse_error = || RsfError::StringParsingError {
            text: datestr.to_string(),
        };

        let caps = match_date_entry(datestr).ok_or_else(parse_error)?;
        debug!(completed = caps.completed, "detected completion flag");

        // The pattern already guarantees a token; the calendar check is separate.
        if caps.date.is_empty() {
            return Err(parse_error());
        }
        let date = caps.date.parse::<NaiveDate>().map_err(|_| parse_error())?;
        debug!(%date, "detected date");

        Ok(Self::new(date, caps.completed))
    }
}

impl FromStr for DueDate {
    type Err = RsfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_datestr(s)
    }
}

impl PartialEq for DueDate {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for DueDate {}

impl PartialOrd for DueDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DueDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.completed {
            write!(f, "x {}", self.date)
        } else {
            write!(f, "{}", self.date)
        }
    }
}

/// Convert every raw dateblock line into a `DueDate`
///
/// Stops at the first line that fails to parse.
pub fn parse_dateblock<S: AsRef<str>>(dateblock: &[S]) -> RsfResult<Vec<DueDate>> {
    info!(entries = dateblock.len(), "parsing dateblock");
    dateblock
        .iter()
        .map(|line| DueDate::from_datestr(line.as_ref()))
        .collect()
}
