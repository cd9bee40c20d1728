//! Dateblock extraction from a stream of lines
//!
//! A dateblock is the run of date entries directly under an `rsf:` header:
//!
//! ```text
//! rsf:
//! - x 2022-03-10
//! - 2022-03-15
//! ```
//!
//! Everything before the header is ignored, and extraction stops at the
//! first line after it that is not a date entry.

use crate::error::{RsfError, RsfResult};
use crate::patterns::{is_date_entry, is_start_marker};
use tracing::{debug, info};

/// Skip items while `drop_pred` holds, discard the next item (the one that
/// ended the skip), then yield items while `take_pred` holds.
///
/// # Examples
/// ```
/// # use resurface::dateblock::drop_take;
/// let taken: Vec<i32> = drop_take(vec![1, 2, 3, 11, 23, 45, 1, 2, 3], |x| *x < 10, |x| *x > 10).collect();
/// assert_eq!(taken, vec![23, 45]);
/// ```
pub fn drop_take<I, D, T>(iterable: I, drop_pred: D, take_pred: T) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    D: FnMut(&I::Item) -> bool,
    T: FnMut(&I::Item) -> bool,
{
    iterable
        .into_iter()
        .skip_while(drop_pred)
        .skip(1)
        .take_while(take_pred)
}

/// Only let the first `limit` lines through; `0` means no limit
pub fn limit_lines<I: IntoIterator>(lines: I, limit: usize) -> impl Iterator<Item = I::Item> {
    let limit = if limit == 0 { usize::MAX } else { limit };
    lines.into_iter().take(limit)
}

fn strip_trailing_newline(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Return the lines of the RSF dateblock found in `lines`
///
/// # Arguments
/// * `lines` - Any line source: file lines, an in-memory list, etc.
///
/// # Returns
/// The dateblock lines with trailing newlines removed. Other whitespace is
/// kept as written.
///
/// # Errors
/// `DateblockNotFound` when there is no header, or the header is not
/// directly followed by at least one date entry.
pub fn find_dateblock<I, S>(lines: I) -> RsfResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    info!("finding dateblock");

    let dateblock: Vec<String> = drop_take(
        lines,
        |line: &S| !is_start_marker(line.as_ref()),
        |line: &S| is_date_entry(line.as_ref()),
    )
    .map(|line| strip_trailing_newline(line.as_ref()).to_string())
    .collect();

    if dateblock.is_empty() {
        return Err(RsfError::DateblockNotFound);
    }

    debug!(?dateblock, "dateblock found");
    Ok(dateblock)
}
