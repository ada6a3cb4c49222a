//!
//! Ordering of the displayed week-days.
//!

use crate::weekview::WeekError;
use chrono::Weekday;

/// The full 7-day week beginning at the given day.
pub fn full_week(start: Weekday) -> [Weekday; 7] {
    let mut week = [start; 7];
    let mut day = start;
    for d in &mut week {
        *d = day;
        day = day.succ();
    }
    week
}

/// Rotate the day sequence so that it begins at the given day.
///
/// Keeps the relative order of the other days and wraps around.
/// An empty day sequence defaults to the full week beginning
/// at `start`.
///
/// Fails with [WeekError::StartDayNotInDays] if `start` is not
/// part of the sequence. The days are returned unchanged in the
/// error case.
pub fn rotate_to(days: &[Weekday], start: Weekday) -> Result<Vec<Weekday>, WeekError> {
    if days.is_empty() {
        return Ok(full_week(start).into());
    }

    let Some(idx) = days.iter().position(|v| *v == start) else {
        return Err(WeekError::StartDayNotInDays(start));
    };

    let mut rotated = Vec::with_capacity(days.len());
    rotated.extend_from_slice(&days[idx..]);
    rotated.extend_from_slice(&days[..idx]);
    Ok(rotated)
}
