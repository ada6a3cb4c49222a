//!
//! Week-view.
//!
//! There's a WeekView widget that renders a grid of hourly slots
//! for a week, or a subset of the week-days, and places schedule
//! items on that grid. The WeekViewState does the event-handling
//! for single-selection of the displayed items.
//!

use chrono::Weekday;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod days;
pub(crate) mod event;
mod item;
mod style;
mod week_view;

pub use days::*;
pub use item::*;
pub use style::*;
pub use week_view::*;

/// Errors of the week-view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekError {
    /// The starting day is not part of the configured day-set.
    /// Contains the day attempted.
    StartDayNotInDays(Weekday),
}

impl Display for WeekError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WeekError::StartDayNotInDays(day) => {
                write!(f, "starting day {} is not in the day-set", day)
            }
        }
    }
}

impl Error for WeekError {}
