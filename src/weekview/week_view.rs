//!
//! Week-view widget.
//!
//! Render:
//! ```rust ignore
//! WeekView::new()
//!     .styles(THEME.weekview_style())
//!     .render(area, frame.buffer_mut(), &mut state.week);
//! ```
//!
//! Event handling:
//! ```rust ignore
//! match state.week.handle(event, Regular) {
//!     WeekOutcome::Selected => {
//!         data.show(state.week.selected_item());
//!         Outcome::Changed
//!     }
//!     r => r.into(),
//! }
//! ```
//!

use crate::_private::NonExhaustive;
use crate::util::{block_size, fill_buf_area, revert_style};
use crate::weekview::event::WeekOutcome;
use crate::weekview::{full_week, place, WeekError, WeekItem, WeekViewStyle};
use chrono::{Days, NaiveDate, Weekday};
use log::{debug, warn};
use rat_event::util::item_at;
use rat_event::{ct_event, flow, HandleEvent, MouseOnly, Regular};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use rat_reloc::{relocate_area, relocate_areas, RelocatableState};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::BlockExt;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, StatefulWidget, Widget};
use std::cmp::max;

/// Width of the time-label column.
const HOUR_LABEL_WIDTH: u16 = 6;

/// Renders a week as a grid of hourly slots.
#[derive(Debug, Clone)]
pub struct WeekView<'a> {
    /// Starting hour of the grid.
    /// If no hour is set, the starting hour of the state is used.
    starting_hour: Option<u32>,
    /// Ending hour of the grid.
    /// If no hour is set, the ending hour of the state is used.
    ending_hour: Option<u32>,
    /// Starting day. Rotates the day-set of the state.
    starting_day: Option<Weekday>,

    /// Terminal rows per hour.
    hour_height: u16,
    /// Show the day-names above.
    show_weekdays: bool,

    /// Base style.
    style: Style,
    /// Day-name header style.
    header_style: Option<Style>,
    /// Time-label style.
    hour_style: Option<Style>,
    /// Default item style.
    item_style: Option<Style>,
    /// Selection
    select_style: Option<Style>,
    /// Focus
    focus_style: Option<Style>,

    /// Block
    block: Option<Block<'a>>,

    /// Locale
    loc: chrono::Locale,
}

/// State & event-handling.
#[derive(Debug)]
pub struct WeekViewState {
    /// Total area.
    /// __readonly__. renewed for each render.
    pub area: Rect,
    /// Area inside the border.
    /// __readonly__. renewed for each render.
    pub inner: Rect,
    /// Area of the day-name header.
    /// __readonly__. renewed for each render.
    pub area_header: Rect,
    /// Area per day column header. Same order as days().
    /// __readonly__. renewed for each render.
    pub area_days: Vec<Rect>,
    /// Area per hour time-label.
    /// __readonly__. renewed for each render.
    pub area_hours: Vec<Rect>,
    /// Area of the slot-grid without header and time-labels.
    /// __readonly__. renewed for each render.
    pub area_grid: Rect,
    /// Area per placed item, in display order.
    /// __readonly__. renewed for each render.
    pub area_items: Vec<Rect>,
    /// Maps the display order of the placed items back to an
    /// index into items(). Items that are not visible don't occur.
    /// __readonly__. renewed for each render.
    pub item_order: Vec<usize>,

    /// Starting hour of the grid.
    starting_hour: u32,
    /// Ending hour of the grid.
    ending_hour: u32,
    /// Displayed days in display order.
    days: Vec<Weekday>,
    /// Items.
    items: Vec<WeekItem>,
    /// Selected item.
    selected: Option<usize>,

    /// Focus
    /// __read+write__
    pub focus: FocusFlag,

    pub non_exhaustive: NonExhaustive,
}

impl Default for WeekView<'_> {
    fn default() -> Self {
        Self {
            starting_hour: None,
            ending_hour: None,
            starting_day: None,
            hour_height: 1,
            show_weekdays: true,
            style: Default::default(),
            header_style: Default::default(),
            hour_style: Default::default(),
            item_style: Default::default(),
            select_style: Default::default(),
            focus_style: Default::default(),
            block: Default::default(),
            loc: Default::default(),
        }
    }
}

impl<'a> WeekView<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting hour of the grid in a 24-hour format.
    /// Valid is an hour between 0 inclusive and 24 exclusive.
    ///
    /// If no hour is set, the starting hour of the state is used.
    #[inline]
    pub fn starting_hour(mut self, hour: u32) -> Self {
        self.starting_hour = Some(hour);
        self
    }

    /// Ending hour of the grid in a 24-hour format.
    /// Valid is an hour between 0 inclusive and 24 exclusive.
    ///
    /// If no hour is set, the ending hour of the state is used.
    #[inline]
    pub fn ending_hour(mut self, hour: u32) -> Self {
        self.ending_hour = Some(hour);
        self
    }

    /// Starting day of the week. Rotates the day-set of the state.
    ///
    /// If the day is not part of the day-set this is logged and
    /// ignored during render. Use
    /// [set_starting_day](WeekViewState::set_starting_day) if you
    /// want the error.
    #[inline]
    pub fn starting_day(mut self, day: Weekday) -> Self {
        self.starting_day = Some(day);
        self
    }

    /// Terminal rows per hour-slot. Defaults to 1.
    #[inline]
    pub fn hour_height(mut self, height: u16) -> Self {
        self.hour_height = max(1, height);
        self
    }

    /// Show the day-names above the grid. Defaults to true.
    #[inline]
    pub fn show_weekdays(mut self, show: bool) -> Self {
        self.show_weekdays = show;
        self
    }

    /// Locale for the day-names.
    #[inline]
    pub fn locale(mut self, loc: chrono::Locale) -> Self {
        self.loc = loc;
        self
    }

    /// Set all styles.
    #[inline]
    pub fn styles_opt(self, styles: Option<WeekViewStyle>) -> Self {
        if let Some(styles) = styles {
            self.styles(styles)
        } else {
            self
        }
    }

    /// Set the composite style.
    #[inline]
    pub fn styles(mut self, styles: WeekViewStyle) -> Self {
        self.style = styles.style;
        if styles.header.is_some() {
            self.header_style = styles.header;
        }
        if styles.hour.is_some() {
            self.hour_style = styles.hour;
        }
        if styles.item.is_some() {
            self.item_style = styles.item;
        }
        if styles.select.is_some() {
            self.select_style = styles.select;
        }
        if styles.focus.is_some() {
            self.focus_style = styles.focus;
        }
        if styles.block.is_some() {
            self.block = styles.block;
        }
        self.block = self.block.map(|v| v.style(self.style));
        self
    }

    /// Set the base-style.
    #[inline]
    pub fn style(mut self, style: impl Into<Style>) -> Self {
        self.style = style.into();
        self
    }

    /// Style for the day-name header.
    #[inline]
    pub fn header_style(mut self, style: impl Into<Style>) -> Self {
        self.header_style = Some(style.into());
        self
    }

    /// Style for the time-labels.
    #[inline]
    pub fn hour_style(mut self, style: impl Into<Style>) -> Self {
        self.hour_style = Some(style.into());
        self
    }

    /// Style for the items.
    #[inline]
    pub fn item_style(mut self, style: impl Into<Style>) -> Self {
        self.item_style = Some(style.into());
        self
    }

    /// Style for the selected item.
    #[inline]
    pub fn select_style(mut self, style: impl Into<Style>) -> Self {
        self.select_style = Some(style.into());
        self
    }

    /// Style for the selected item when focused.
    #[inline]
    pub fn focus_style(mut self, style: impl Into<Style>) -> Self {
        self.focus_style = Some(style.into());
        self
    }

    /// Block
    #[inline]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self.block = self.block.map(|v| v.style(self.style));
        self
    }

    /// Inherent width of the widget.
    #[inline]
    pub fn width(&self, state: &WeekViewState) -> u16 {
        HOUR_LABEL_WIDTH + 8 * state.days.len() as u16 + block_size(&self.block).width
    }

    /// Inherent height of the widget.
    /// Varies with the hour range of the state.
    #[inline]
    pub fn height(&self, state: &WeekViewState) -> u16 {
        let rows = state.ending_hour.saturating_sub(state.starting_hour) as u16;
        let header = if self.show_weekdays { 1 } else { 0 };
        header + rows * self.hour_height + block_size(&self.block).height
    }
}

impl<'a> StatefulWidget for &WeekView<'a> {
    type State = WeekViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(self, area, buf, state);
    }
}

impl StatefulWidget for WeekView<'_> {
    type State = WeekViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(&self, area, buf, state);
    }
}

fn render_ref(widget: &WeekView<'_>, area: Rect, buf: &mut Buffer, state: &mut WeekViewState) {
    state.area = area;

    if let Some(hour) = widget.starting_hour {
        state.starting_hour = hour;
    }
    if let Some(hour) = widget.ending_hour {
        state.ending_hour = hour;
    }
    if let Some(day) = widget.starting_day {
        if let Err(err) = state.set_starting_day(day) {
            warn!("week-view: {}", err);
        }
    }

    let focus_style = widget.focus_style.unwrap_or(revert_style(widget.style));
    let select_style = if let Some(select_style) = widget.select_style {
        if state.is_focused() {
            focus_style
        } else {
            select_style
        }
    } else {
        if state.is_focused() {
            focus_style
        } else {
            revert_style(widget.style)
        }
    };
    let header_style = widget.header_style.unwrap_or(widget.style);
    let hour_style = widget.hour_style.unwrap_or(widget.style);
    let item_style = widget.item_style.unwrap_or(widget.style);

    state.inner = widget.block.inner_if_some(area);
    if let Some(block) = &widget.block {
        block.render(area, buf);
    } else {
        buf.set_style(area, widget.style);
    }

    state.area_days.clear();
    state.area_hours.clear();
    state.area_items.clear();
    state.item_order.clear();

    // one label column, then equal columns for the days.
    let mut constraints = Vec::with_capacity(state.days.len() + 1);
    constraints.push(Constraint::Length(HOUR_LABEL_WIDTH));
    for _ in &state.days {
        constraints.push(Constraint::Fill(1));
    }
    let cols = Layout::horizontal(constraints) //
        .split(Rect::new(state.inner.x, 0, state.inner.width, 0));

    let mut y = state.inner.y;

    if widget.show_weekdays {
        state.area_header =
            Rect::new(state.inner.x, y, state.inner.width, 1).intersection(state.inner);
        buf.set_style(state.area_header, header_style);
        for (i, day) in state.days.iter().enumerate() {
            let cell = Rect::new(cols[i + 1].x, y, cols[i + 1].width, 1).intersection(state.inner);
            state.area_days.push(cell);
            Line::from(day_name(*day, widget.loc))
                .style(header_style)
                .centered()
                .render(cell, buf);
        }
        y += 1;
    } else {
        state.area_header = Rect::default();
        for _ in &state.days {
            state.area_days.push(Rect::default());
        }
    }

    if state.ending_hour <= state.starting_hour {
        warn!(
            "week-view: no hours to display for {}..{}",
            state.starting_hour, state.ending_hour
        );
        state.area_grid = Rect::default();
        return;
    }

    let rows = state.ending_hour.saturating_sub(state.starting_hour) as u16;
    let hour_height = max(1, widget.hour_height);

    state.area_grid = Rect::new(
        cols[1].x,
        y,
        state.inner.right().saturating_sub(cols[1].x),
        rows * hour_height,
    )
    .intersection(state.inner);

    for r in 0..rows {
        let label = Rect::new(cols[0].x, y + r * hour_height, cols[0].width, 1) //
            .intersection(state.inner);
        state.area_hours.push(label);
        Line::from(format!("{:>2}:00 ", state.starting_hour + r as u32))
            .style(hour_style)
            .right_aligned()
            .render(label, buf);
    }

    // place the items. display order is column-major.
    let mut placed = Vec::new();
    for (i, item) in state.items.iter().enumerate() {
        if let Some(placement) = place(item, &state.days, state.starting_hour) {
            placed.push((i, placement));
        }
    }
    placed.sort_by_key(|(i, p)| (p.column, p.row_offset, *i));

    let mut area_items = Vec::with_capacity(placed.len());
    let mut item_order = Vec::with_capacity(placed.len());
    for (i, placement) in placed {
        let col = cols[placement.column + 1];

        let top = state.area_grid.y as i32 + placement.row_offset * hour_height as i32;
        let bottom = top + (placement.row_span * hour_height as u32) as i32;
        let top = top.max(state.area_grid.y as i32);
        let bottom = bottom.min(state.area_grid.bottom() as i32);

        let item_area = if bottom > top {
            Rect::new(col.x, top as u16, col.width, (bottom - top) as u16)
                .intersection(state.area_grid)
        } else {
            Rect::default()
        };

        if !item_area.is_empty() {
            let style = if state.selected == Some(i) {
                item_style.patch(select_style)
            } else {
                item_style
            };
            fill_buf_area(buf, item_area, " ", style);
            Line::from(state.items[i].text.as_str())
                .style(style)
                .render(Rect::new(item_area.x, item_area.y, item_area.width, 1), buf);
        }

        area_items.push(item_area);
        item_order.push(i);
    }
    state.area_items = area_items;
    state.item_order = item_order;
}

/// Localized day-name.
fn day_name(day: Weekday, loc: chrono::Locale) -> String {
    // any week starting on a monday will do.
    let monday = NaiveDate::from_ymd_opt(2024, 1, 1).expect("date");
    let date = monday + Days::new(day.num_days_from_monday() as u64);
    date.format_localized("%a", loc).to_string()
}

impl Clone for WeekViewState {
    fn clone(&self) -> Self {
        Self {
            area: self.area,
            inner: self.inner,
            area_header: self.area_header,
            area_days: self.area_days.clone(),
            area_hours: self.area_hours.clone(),
            area_grid: self.area_grid,
            area_items: self.area_items.clone(),
            item_order: self.item_order.clone(),
            starting_hour: self.starting_hour,
            ending_hour: self.ending_hour,
            days: self.days.clone(),
            items: self.items.clone(),
            selected: self.selected,
            focus: FocusFlag::named(self.focus.name()),
            non_exhaustive: NonExhaustive,
        }
    }
}

impl Default for WeekViewState {
    fn default() -> Self {
        Self {
            area: Default::default(),
            inner: Default::default(),
            area_header: Default::default(),
            area_days: Default::default(),
            area_hours: Default::default(),
            area_grid: Default::default(),
            area_items: Default::default(),
            item_order: Default::default(),
            starting_hour: 6,
            ending_hour: 23,
            days: full_week(Weekday::Sun).into(),
            items: Default::default(),
            selected: None,
            focus: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}

impl WeekViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        Self {
            focus: FocusFlag::named(name),
            ..Self::default()
        }
    }

    /// Starting hour of the grid.
    pub fn starting_hour(&self) -> u32 {
        self.starting_hour
    }

    /// Sets the starting hour of the grid.
    ///
    /// Useless if the hour is set with the WeekView widget.
    pub fn set_starting_hour(&mut self, hour: u32) -> bool {
        let old_value = self.starting_hour;
        self.starting_hour = hour;
        old_value != self.starting_hour
    }

    /// Ending hour of the grid.
    pub fn ending_hour(&self) -> u32 {
        self.ending_hour
    }

    /// Sets the ending hour of the grid.
    ///
    /// Useless if the hour is set with the WeekView widget.
    pub fn set_ending_hour(&mut self, hour: u32) -> bool {
        let old_value = self.ending_hour;
        self.ending_hour = hour;
        old_value != self.ending_hour
    }

    /// Displayed days in display order.
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    /// Sets the days to display.
    ///
    /// The first day becomes the starting day. An empty day-set
    /// is ignored.
    pub fn set_days(&mut self, days: &[Weekday]) -> bool {
        if days.is_empty() {
            debug!("week-view: ignoring empty day-set");
            return false;
        }
        let changed = self.days != days;
        self.days = days.to_vec();
        changed
    }

    /// Starting day. The leftmost displayed day.
    pub fn starting_day(&self) -> Weekday {
        self.days[0]
    }

    /// Sets the starting day by rotating the day-set.
    ///
    /// Fails if the day is not part of the day-set and leaves the
    /// day-set unchanged. Returns Ok(true) if the ordering changed.
    pub fn set_starting_day(&mut self, day: Weekday) -> Result<bool, WeekError> {
        let rotated = crate::weekview::rotate_to(&self.days, day)?;
        let changed = rotated != self.days;
        self.days = rotated;
        Ok(changed)
    }

    /// Items.
    pub fn items(&self) -> &[WeekItem] {
        &self.items
    }

    /// Sets the items. Clears the selection.
    pub fn set_items(&mut self, items: Vec<WeekItem>) {
        self.items = items;
        self.selected = None;
    }

    /// Adds one item.
    pub fn add_item(&mut self, item: WeekItem) {
        self.items.push(item);
    }

    /// Removes all items. Clears the selection.
    pub fn clear_items(&mut self) {
        self.items.clear();
        self.selected = None;
    }

    /// Selected item, as index into items().
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selected item.
    pub fn selected_item(&self) -> Option<&WeekItem> {
        self.selected.and_then(|v| self.items.get(v))
    }

    /// Select an item by index. Out of bounds indexes are ignored.
    pub fn select(&mut self, select: Option<usize>) -> bool {
        let old_value = self.selected;
        match select {
            Some(n) if n < self.items.len() => self.selected = Some(n),
            Some(_) => {}
            None => self.selected = None,
        }
        old_value != self.selected
    }

    /// Removes the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Select the first placed item.
    ///
    /// Uses the display order of the last render.
    pub fn first_item(&mut self) -> WeekOutcome {
        if let Some(first) = self.item_order.first().copied() {
            if self.select(Some(first)) {
                WeekOutcome::Selected
            } else {
                WeekOutcome::Continue
            }
        } else {
            WeekOutcome::Continue
        }
    }

    /// Select the last placed item.
    ///
    /// Uses the display order of the last render.
    pub fn last_item(&mut self) -> WeekOutcome {
        if let Some(last) = self.item_order.last().copied() {
            if self.select(Some(last)) {
                WeekOutcome::Selected
            } else {
                WeekOutcome::Continue
            }
        } else {
            WeekOutcome::Continue
        }
    }

    /// Select the next placed item.
    ///
    /// Uses the display order of the last render. Starts with the
    /// first item if there is no selection.
    pub fn next_item(&mut self) -> WeekOutcome {
        let pos = self
            .selected
            .and_then(|sel| self.item_order.iter().position(|v| *v == sel));
        let next = match pos {
            Some(p) => self.item_order.get(p + 1).copied(),
            None => self.item_order.first().copied(),
        };
        if let Some(next) = next {
            if self.select(Some(next)) {
                WeekOutcome::Selected
            } else {
                WeekOutcome::Continue
            }
        } else {
            WeekOutcome::Continue
        }
    }

    /// Select the previous placed item.
    ///
    /// Uses the display order of the last render. Starts with the
    /// last item if there is no selection.
    pub fn prev_item(&mut self) -> WeekOutcome {
        let pos = self
            .selected
            .and_then(|sel| self.item_order.iter().position(|v| *v == sel));
        let prev = match pos {
            Some(p) => p.checked_sub(1).map(|p| self.item_order[p]),
            None => self.item_order.last().copied(),
        };
        if let Some(prev) = prev {
            if self.select(Some(prev)) {
                WeekOutcome::Selected
            } else {
                WeekOutcome::Continue
            }
        } else {
            WeekOutcome::Continue
        }
    }
}

impl HasFocus for WeekViewState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    #[inline]
    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    #[inline]
    fn area(&self) -> Rect {
        self.area
    }
}

impl RelocatableState for WeekViewState {
    fn relocate(&mut self, shift: (i16, i16), clip: Rect) {
        self.area = relocate_area(self.area, shift, clip);
        self.inner = relocate_area(self.inner, shift, clip);
        self.area_header = relocate_area(self.area_header, shift, clip);
        self.area_grid = relocate_area(self.area_grid, shift, clip);
        relocate_areas(&mut self.area_days, shift, clip);
        relocate_areas(&mut self.area_hours, shift, clip);
        relocate_areas(&mut self.area_items, shift, clip);
    }
}

impl HandleEvent<crossterm::event::Event, Regular, WeekOutcome> for WeekViewState {
    fn handle(&mut self, event: &crossterm::event::Event, _qualifier: Regular) -> WeekOutcome {
        if self.is_focused() {
            flow!(match event {
                ct_event!(keycode press Home) => self.first_item(),
                ct_event!(keycode press End) => self.last_item(),
                ct_event!(keycode press Up) | ct_event!(keycode press Left) => self.prev_item(),
                ct_event!(keycode press Down) | ct_event!(keycode press Right) => self.next_item(),
                _ => WeekOutcome::Continue,
            });
        }

        self.handle(event, MouseOnly)
    }
}

impl HandleEvent<crossterm::event::Event, MouseOnly, WeekOutcome> for WeekViewState {
    fn handle(&mut self, event: &crossterm::event::Event, _qualifier: MouseOnly) -> WeekOutcome {
        match event {
            ct_event!(mouse drag Left for x, y) | ct_event!(mouse down Left for x, y) => {
                if let Some(sel) = item_at(&self.area_items, *x, *y) {
                    let idx = self.item_order[sel];
                    if self.select(Some(idx)) {
                        WeekOutcome::Selected
                    } else {
                        WeekOutcome::Continue
                    }
                } else {
                    WeekOutcome::Continue
                }
            }

            _ => WeekOutcome::Continue,
        }
    }
}

/// Handle all events.
/// Key events are only processed if focus is true.
/// Mouse events are processed if they are in range.
pub fn handle_events(
    state: &mut WeekViewState,
    focus: bool,
    event: &crossterm::event::Event,
) -> WeekOutcome {
    state.focus.set(focus);
    HandleEvent::handle(state, event, Regular)
}

/// Handle only mouse-events.
pub fn handle_mouse_events(
    state: &mut WeekViewState,
    event: &crossterm::event::Event,
) -> WeekOutcome {
    HandleEvent::handle(state, event, MouseOnly)
}
