//! Validation helpers for command line input

use anyhow::{Result, anyhow};
use chrono::NaiveDate;

/// Parse and validate the reference date
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// Result containing parsed NaiveDate or error
pub fn parse_reference_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        anyhow!(
            "Invalid reference date '{}'. Use YYYY-MM-DD (e.g., '2022-03-15')",
            date_str
        )
    })
}
