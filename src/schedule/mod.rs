//! Resurfacing schedule model
//!
//! This module turns the raw lines of a dateblock into typed entries and
//! picks the entry that is currently due:
//! - `due_date`: one schedule entry (calendar date + completion flag)
//! - `date_range`: the closed window of dates considered actionable
//! - `selector`: earliest open entry inside the window

mod date_range;
mod due_date;
mod selector;

pub use date_range::DateRange;
pub use due_date::{DueDate, local_date_today, parse_dateblock};
pub use selector::get_due_date;
