//! Line classifiers for RSF dateblocks
//!
//! Both patterns are compiled once per process and shared by every file
//! scanned during a run.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Header line that opens a dateblock: starts with `rsf:` in any case.
/// Anything after the colon (e.g. `RSF: weekly`) is ignored.
static START_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i:rsf:)").expect("valid start pattern"));

/// A todo.txt style list item holding one ISO date, optionally marked done
/// with `x`/`X`. Spacing between bullet, flag and date is optional, and
/// trailing notes after the date are allowed.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[-*]\s*(?P<completed>[xX])?\s*(?P<date>[0-9]{4}-[0-9]{2}-[0-9]{2})")
        .expect("valid date pattern")
});

/// Captured parts of a date entry line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateEntryCaptures<'a> {
    /// Whether the completion flag was present
    pub completed: bool,
    /// The raw `YYYY-MM-DD` token, not yet validated as a calendar date
    pub date: &'a str,
}

pub fn is_start_marker(line: &str) -> bool {
    let result = START_PATTERN.is_match(line);
    debug!(matched = result, line, "start marker check");
    result
}

pub fn is_date_entry(line: &str) -> bool {
    let result = DATE_PATTERN.is_match(line);
    debug!(matched = result, line, "date entry check");
    result
}

/// Match a date entry line and extract its completion flag and date token
pub fn match_date_entry(line: &str) -> Option<DateEntryCaptures<'_>> {
    let caps = DATE_PATTERN.captures(line)?;
    Some(DateEntryCaptures {
        completed: caps.name("completed").is_some_and(|m| !m.as_str().is_empty()),
        date: caps.name("date").map_or("", |m| m.as_str()),
    })
}
