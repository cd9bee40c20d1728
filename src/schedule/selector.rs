use super::date_range::DateRange;
use super::due_date::DueDate;
use crate::error::{RsfError, RsfResult};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Pick the earliest open entry that falls inside the active date range
///
/// # Arguments
/// * `dateblock` - Parsed schedule entries, in any order
/// * `reference` - Date the schedule is compared against (usually today)
/// * `overdue` - Days before `reference` that still count as due
/// * `advance` - Days after `reference` that already count as due
///
/// # Returns
/// The date of the most overdue open entry, or `NoDueDateFound` carrying
/// the computed range and the full dateblock.
pub fn get_due_date(
    dateblock: &[DueDate],
    reference: NaiveDate,
    overdue: i64,
    advance: i64,
) -> RsfResult<NaiveDate> {
    info!("selecting due date");
    let date_range = DateRange::around(reference, overdue, advance);

    let mut dates = dateblock.to_vec();
    dates.sort();
    debug!(?dates, "sorted dates");

    for entry in &dates {
        if entry.completed {
            debug!(%entry, "entry completed, checking next");
            continue;
        }
        if date_range.contains(&entry.date) {
            info!(%entry, %date_range, "entry is due");
            return Ok(entry.date);
        }
    }

    debug!(%date_range, "no due date found");
    Err(RsfError::NoDueDateFound {
        date_range,
        dateblock: dateblock.to_vec(),
    })
}
