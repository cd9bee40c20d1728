//! Resurface Library
//!
//! This library finds Markdown/text notes whose resurfacing schedule says
//! they are due for review. A schedule is an RSF dateblock: an `rsf:` header
//! followed by a list of todo.txt style ISO dates.
//!
//! ```text
//! rsf:
//! - x 2022-03-10
//! - 2022-03-15
//! ```
//!
//! # Architecture
//!
//! - **Matching**: `patterns` - compiled header and date entry classifiers
//! - **Extraction**: `dateblock` - isolates the dateblock in a line stream
//! - **Domain**: `schedule` - typed entries, date ranges and due-date selection
//! - **Pipeline**: `pipeline` - chains the stages with short-circuiting errors
//! - **Driver**: `scan` - runs the pipeline over a directory of notes
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use resurface::{DueQuery, get_duestr_from_lines};
//!
//! let note = "rsf:\n- x 2022-03-10\n- 2022-03-15";
//! let query = DueQuery::with_defaults(NaiveDate::from_ymd_opt(2022, 3, 15).unwrap());
//! let line = get_duestr_from_lines(note.lines(), "notes/idea.md", &query, false, 0);
//! assert_eq!(line.as_deref(), Some("DUE : 2022-03-15 : idea.md"));
//! ```

pub mod config;
pub mod dateblock;
pub mod error;
pub mod formatting;
pub mod patterns;
pub mod pipeline;
pub mod scan;
pub mod schedule;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigFile, Settings};
pub use dateblock::find_dateblock;
pub use error::{RsfError, RsfResult};
pub use pipeline::{DueQuery, get_duestr_from_file, get_duestr_from_lines};
pub use scan::{ScanOptions, ScanReport, collect_notes, scan_directory};
pub use schedule::{DateRange, DueDate, get_due_date, local_date_today};
