use crate::_private::NonExhaustive;
use ratatui::style::Style;
use ratatui::widgets::Block;

/// Composite style for the week-view.
#[derive(Debug, Clone)]
pub struct WeekViewStyle {
    pub style: Style,
    pub header: Option<Style>,
    pub hour: Option<Style>,
    pub item: Option<Style>,
    pub select: Option<Style>,
    pub focus: Option<Style>,
    pub block: Option<Block<'static>>,
    pub non_exhaustive: NonExhaustive,
}

impl Default for WeekViewStyle {
    fn default() -> Self {
        Self {
            style: Default::default(),
            header: None,
            hour: None,
            item: None,
            select: None,
            focus: None,
            block: None,
            non_exhaustive: NonExhaustive,
        }
    }
}
