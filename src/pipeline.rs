//! Per-file due-date pipeline
//!
//! The stages run in order and the first failure short-circuits the rest:
//! 1. `find_dateblock`: isolate the raw dateblock lines
//! 2. `parse_dateblock`: turn every line into a `DueDate`
//! 3. `get_due_date`: pick the earliest open date in the window
//! 4. `format_due_str`: build the report line
//!
//! A failed outcome is turned into a placeholder line or dropped, depending
//! on the caller's `return_nodues` policy.

use crate::dateblock::{find_dateblock, limit_lines};
use crate::error::RsfResult;
use crate::formatting::{format_due_str, format_failure_str};
use crate::schedule::{get_due_date, parse_dateblock};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Default number of days before the reference date that still count
pub const DEFAULT_OVERDUE: i64 = 3;
/// Default number of days after the reference date that already count
pub const DEFAULT_ADVANCE: i64 = 0;

/// Selection parameters shared by every file in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueQuery {
    pub reference: NaiveDate,
    pub overdue: i64,
    pub advance: i64,
}

impl DueQuery {
    pub fn new(reference: NaiveDate, overdue: i64, advance: i64) -> Self {
        Self {
            reference,
            overdue,
            advance,
        }
    }

    /// Query with the default windows
    pub fn with_defaults(reference: NaiveDate) -> Self {
        Self::new(reference, DEFAULT_OVERDUE, DEFAULT_ADVANCE)
    }
}

/// Run all stages over `lines` and return the report line or the first failure
pub fn evaluate_lines<I, S>(lines: I, filename: &str, query: &DueQuery) -> RsfResult<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    debug!(filename, ?query, "evaluating dateblock pipeline");

    let outcome = find_dateblock(lines)
        .and_then(|dateblock| parse_dateblock(&dateblock))
        .and_then(|dateblock| {
            get_due_date(&dateblock, query.reference, query.overdue, query.advance)
        })
        .map(|due_date| format_due_str(due_date, filename));

    match &outcome {
        Ok(line) => info!(%line, "pipeline succeeded"),
        Err(e) => warn!(error = %e, filename, "pipeline short-circuited"),
    }
    outcome
}

/// Apply the presentation policy to a pipeline outcome
///
/// # Returns
/// * `Some(line)` for a due note
/// * `Some("<ErrorKindName> : <basename>")` for a failure when `return_nodues` is set
/// * `None` for a failure otherwise, meaning the note is left out of the output
pub fn render(outcome: RsfResult<String>, filename: &str, return_nodues: bool) -> Option<String> {
    match outcome {
        Ok(line) => Some(line),
        Err(e) if return_nodues => Some(format_failure_str(&e, filename)),
        Err(_) => None,
    }
}

/// Evaluate an in-memory line stream, honoring the line limit
pub fn get_duestr_from_lines<I, S>(
    lines: I,
    filename: &str,
    query: &DueQuery,
    return_nodues: bool,
    limit: usize,
) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let outcome = evaluate_lines(limit_lines(lines, limit), filename, query);
    render(outcome, filename, return_nodues)
}

/// Evaluate one note on disk
///
/// The file is read lazily, so lines after the dateblock (or past `limit`)
/// are never read. The handle is closed before this returns.
///
/// # Errors
/// Opening or reading the file fails. Those errors are not part of the
/// dateblock taxonomy and are never rendered as report lines.
pub fn get_duestr_from_file(
    path: &Path,
    query: &DueQuery,
    return_nodues: bool,
    limit: usize,
) -> Result<Option<String>> {
    info!(path = %path.display(), "reading note");
    let filename = path.to_string_lossy();

    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut read_error = None;
    let lines = reader.lines().map_while(|line| match line {
        Ok(line) => Some(line),
        Err(e) => {
            read_error = Some(e);
            None
        }
    });
    let outcome = evaluate_lines(limit_lines(lines, limit), &filename, query);

    if let Some(e) = read_error {
        return Err(e).with_context(|| format!("Failed to read {}", path.display()));
    }

    Ok(render(outcome, &filename, return_nodues))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RsfError;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const NOTE: &str = "# Idea\n\nrsf:\n- x 2022-03-10\n- 2022-03-15\n\nBody text.";

    #[test]
    fn test_evaluate_lines_due() {
        let query = DueQuery::with_defaults(ymd(2022, 3, 15));
        let result = evaluate_lines(NOTE.lines(), "notes/idea.md", &query);
        assert_eq!(result.unwrap(), "DUE : 2022-03-15 : idea.md");
    }

    #[test]
    fn test_evaluate_lines_short_circuits_on_missing_block() {
        let query = DueQuery::with_defaults(ymd(2022, 3, 15));
        let result = evaluate_lines(["no block here"], "a.md", &query);
        assert_eq!(result, Err(RsfError::DateblockNotFound));
    }

    #[test]
    fn test_evaluate_lines_reports_parse_failure() {
        let query = DueQuery::with_defaults(ymd(2022, 3, 15));
        let result = evaluate_lines(["rsf:", "- 2022-03-15", "- 2022-02-31"], "a.md", &query);
        assert_eq!(result.unwrap_err().kind_name(), "StringParsingError");
    }

    #[test]
    fn test_render_policies() {
        let failure: RsfResult<String> = Err(RsfError::DateblockNotFound);
        assert_eq!(
            render(failure.clone(), "dir/a.md", true),
            Some("DateblockNotFound : a.md".to_string())
        );
        assert_eq!(render(failure, "dir/a.md", false), None);

        let success: RsfResult<String> = Ok("DUE : 2022-03-15 : a.md".to_string());
        assert_eq!(
            render(success, "dir/a.md", false),
            Some("DUE : 2022-03-15 : a.md".to_string())
        );
    }

    #[test]
    fn test_get_duestr_from_lines_not_due() {
        let query = DueQuery::with_defaults(ymd(2022, 4, 1));
        assert_eq!(get_duestr_from_lines(NOTE.lines(), "idea.md", &query, false, 0), None);
        assert_eq!(
            get_duestr_from_lines(NOTE.lines(), "idea.md", &query, true, 0),
            Some("NoDueDateFound : idea.md".to_string())
        );
    }

    #[test]
    fn test_get_duestr_from_lines_with_limit() {
        let query = DueQuery::with_defaults(ymd(2022, 3, 15));
        // Header is line 3: a limit of 2 hides it
        assert_eq!(
            get_duestr_from_lines(NOTE.lines(), "idea.md", &query, true, 2),
            Some("DateblockNotFound : idea.md".to_string())
        );
        // A limit of 4 keeps only the completed entry
        assert_eq!(
            get_duestr_from_lines(NOTE.lines(), "idea.md", &query, true, 4),
            Some("NoDueDateFound : idea.md".to_string())
        );
        assert_eq!(
            get_duestr_from_lines(NOTE.lines(), "idea.md", &query, false, 5),
            Some("DUE : 2022-03-15 : idea.md".to_string())
        );
    }
}
