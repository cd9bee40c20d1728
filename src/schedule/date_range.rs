use chrono::{NaiveDate, TimeDelta};
use std::fmt;
use tracing::debug;

/// Closed interval `[earliest, latest]` of calendar dates
///
/// `earliest <= latest` is not enforced here. With non-negative windows,
/// `DateRange::around` always produces a well-formed range; an inverted
/// range simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl DateRange {
    pub fn new(earliest: NaiveDate, latest: NaiveDate) -> Self {
        Self { earliest, latest }
    }

    /// Build `[reference - overdue, reference + advance]`
    ///
    /// Negative windows are accepted and shift the bounds the other way.
    /// Bounds saturate at the limits of the calendar.
    pub fn around(reference: NaiveDate, overdue: i64, advance: i64) -> Self {
        debug!(%reference, overdue, advance, "building date range");
        let earliest = shift_days(reference, overdue.saturating_neg());
        let latest = shift_days(reference, advance);
        debug!(%earliest, %latest, "date range built");
        Self::new(earliest, latest)
    }

    /// Inclusive on both ends
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.earliest <= *date && *date <= self.latest
    }

    pub fn as_tuple(&self) -> (NaiveDate, NaiveDate) {
        (self.earliest, self.latest)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.earliest, self.latest)
    }
}

fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    let fallback = if days < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    };
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(fallback)
}
