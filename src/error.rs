//! Error taxonomy for the dateblock pipeline
//!
//! Every variant is recoverable at the per-file level: the pipeline turns it
//! into either a placeholder line or silence. I/O failures are not part of
//! this taxonomy and travel as `anyhow::Error` instead.

use crate::schedule::{DateRange, DueDate};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsfError {
    /// No `rsf:` header, or a header followed by zero date entries
    #[error("Dateblock not found in stream.")]
    DateblockNotFound,

    /// A dateblock line could not be turned into a calendar date
    #[error("Error parsing <{text}>.")]
    StringParsingError { text: String },

    /// Entries were parsed but none of the open ones falls inside the range
    #[error("In range {date_range}, no dates in [{}] are due.", join_dates(.dateblock))]
    NoDueDateFound {
        date_range: DateRange,
        dateblock: Vec<DueDate>,
    },
}

impl RsfError {
    /// Name shown in verbose reports, e.g. `NoDueDateFound : note.md`
    pub fn kind_name(&self) -> &'static str {
        match self {
            RsfError::DateblockNotFound => "DateblockNotFound",
            RsfError::StringParsingError { .. } => "StringParsingError",
            RsfError::NoDueDateFound { .. } => "NoDueDateFound",
        }
    }
}

fn join_dates(dateblock: &[DueDate]) -> String {
    dateblock
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type RsfResult<T> = Result<T, RsfError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_kind_names_match_taxonomy() {
        assert_eq!(RsfError::DateblockNotFound.kind_name(), "DateblockNotFound");
        assert_eq!(
            RsfError::StringParsingError {
                text: "- 2022-13-01".to_string()
            }
            .kind_name(),
            "StringParsingError"
        );
        let err = RsfError::NoDueDateFound {
            date_range: DateRange::new(ymd(2022, 3, 9), ymd(2022, 3, 12)),
            dateblock: vec![],
        };
        assert_eq!(err.kind_name(), "NoDueDateFound");
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            RsfError::DateblockNotFound.to_string(),
            "Dateblock not found in stream."
        );
        assert_eq!(
            RsfError::StringParsingError {
                text: "- 2022-02-30".to_string()
            }
            .to_string(),
            "Error parsing <- 2022-02-30>."
        );

        let err = RsfError::NoDueDateFound {
            date_range: DateRange::new(ymd(2022, 3, 9), ymd(2022, 3, 12)),
            dateblock: vec![
                DueDate::new(ymd(2022, 3, 10), true),
                DueDate::new(ymd(2022, 3, 20), false),
            ],
        };
        assert_eq!(
            err.to_string(),
            "In range [2022-03-09, 2022-03-12], no dates in [x 2022-03-10, 2022-03-20] are due."
        );
    }
}
