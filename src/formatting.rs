//! Formatting helper functions for report lines
//!
//! Every line printed for a note names the note by its basename only.

use crate::error::RsfError;
use chrono::NaiveDate;

/// Strip everything up to and including the last `/`
///
/// # Examples
/// ```
/// # use resurface::formatting::excise_filestem;
/// assert_eq!(excise_filestem("notes/2022/idea.md"), "idea.md");
/// assert_eq!(excise_filestem("idea.md"), "idea.md");
/// ```
pub fn excise_filestem(filename: &str) -> &str {
    match filename.rfind('/') {
        Some(idx) => &filename[idx + 1..],
        None => filename,
    }
}

/// Format the report line for a due note
///
/// # Returns
/// `DUE : <YYYY-MM-DD> : <basename>`
pub fn format_due_str(due_date: NaiveDate, filename: &str) -> String {
    format!(
        "DUE : {} : {}",
        due_date.format("%Y-%m-%d"),
        excise_filestem(filename)
    )
}

/// Format the verbose report line for a note without a due date
///
/// # Returns
/// `<ErrorKindName> : <basename>`
pub fn format_failure_str(error: &RsfError, filename: &str) -> String {
    format!("{} : {}", error.kind_name(), excise_filestem(filename))
}
