//! Counting rules over a single customer's computer/warning snapshot.
//!
//! Customer scoping happens one level down: the store only ever hands these
//! functions rows belonging to one watchman group. The two unresolved-at
//! rules are deliberately separate named functions; their boundary
//! treatment differs and must never be swapped.

use chrono::NaiveDate;

use crate::db::entities::{computer, warning};
use crate::db::enums::OsType;

/// Number of computers of `os_type` active in `[start, end]`: first
/// reported strictly before the interval end and last heard from strictly
/// after the interval start.
pub fn os_census(
    computers: &[computer::Model],
    os_type: OsType,
    start: NaiveDate,
    end: NaiveDate,
) -> i32 {
    computers
        .iter()
        .filter(|c| c.os_type == os_type && c.date_reported < end && c.date_last_reported > start)
        .count() as i32
}

/// Warnings open when the bucket opens: reported strictly before
/// `bucket_start` and not resolved before it.
pub fn unresolved_at_start(warnings: &[warning::Model], bucket_start: NaiveDate) -> i32 {
    warnings
        .iter()
        .filter(|w| {
            w.date_reported < bucket_start
                && w.date_resolved.map_or(true, |resolved| resolved >= bucket_start)
        })
        .count() as i32
}

/// Warnings still open when the bucket closes: reported on or before
/// `bucket_end` and not resolved on or before it. A warning resolved
/// exactly on `bucket_end` is excluded here while still counting towards
/// [`resolved_in`] for the same bucket.
pub fn unresolved_at_end(warnings: &[warning::Model], bucket_end: NaiveDate) -> i32 {
    warnings
        .iter()
        .filter(|w| {
            w.date_reported <= bucket_end
                && w.date_resolved.map_or(true, |resolved| resolved > bucket_end)
        })
        .count() as i32
}

/// Warnings reported within `[start, end]`, both ends inclusive.
pub fn created_in(warnings: &[warning::Model], start: NaiveDate, end: NaiveDate) -> i32 {
    warnings
        .iter()
        .filter(|w| start <= w.date_reported && w.date_reported <= end)
        .count() as i32
}

/// Warnings resolved within `[start, end]`, both ends inclusive.
pub fn resolved_in(warnings: &[warning::Model], start: NaiveDate, end: NaiveDate) -> i32 {
    warnings
        .iter()
        .filter(|w| {
            w.date_resolved
                .map_or(false, |resolved| start <= resolved && resolved <= end)
        })
        .count() as i32
}
