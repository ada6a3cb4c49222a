use chrono::Weekday;
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// One schedule item displayed in the week-view.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeekItem {
    /// Day of the item.
    pub day: Weekday,
    /// Start hour in a 24-hour format. Valid is `0..24`.
    pub start: u32,
    /// End hour in a 24-hour format. Valid is `0..24`.
    ///
    /// An item with `end == start` has no duration and will
    /// not be displayed.
    pub end: u32,
    /// Display text.
    pub text: String,
}

/// Grid placement of one item.
///
/// Row values are in hour-rows relative to the starting hour of
/// the grid, not in terminal rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Day column. Index into the rotated day sequence.
    pub column: usize,
    /// `item.start - starting_hour`.
    ///
    /// Negative for items that start before the displayed hour
    /// range. Rendering clips those to the grid.
    pub row_offset: i32,
    /// `item.end - item.start`.
    pub row_span: u32,
}

impl WeekItem {
    pub fn new(day: Weekday, start: u32, end: u32, text: impl Into<String>) -> Self {
        Self {
            day,
            start,
            end,
            text: text.into(),
        }
    }

    /// Duration in hours. 0 for inverted items.
    pub fn duration(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

/// Compute the grid placement for one item.
///
/// Returns None for items that are not visible: items without a
/// duration and items with a day that is not part of the
/// displayed days.
pub fn place(item: &WeekItem, days: &[Weekday], starting_hour: u32) -> Option<Placement> {
    if item.end <= item.start {
        return None;
    }
    let column = days.iter().position(|v| *v == item.day)?;

    Some(Placement {
        column,
        row_offset: item.start as i32 - starting_hour as i32,
        row_span: item.end - item.start,
    })
}
