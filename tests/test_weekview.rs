use chrono::Weekday::*;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rat_weekview::event::{HandleEvent, MouseOnly, Regular, WeekOutcome};
use rat_weekview::weekview::{WeekItem, WeekView, WeekViewState};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;

fn sample() -> WeekViewState {
    let mut state = WeekViewState::new();
    state.set_items(vec![
        WeekItem::new(Fri, 9, 10, "standup"),
        WeekItem::new(Mon, 7, 9, "workout"),
    ]);
    state
}

// 62 wide: 6 for the labels, 8 per day column.
// 20 high: 1 header, 17 hour rows for the default 6..23.
fn render(state: &mut WeekViewState) -> Buffer {
    let area = Rect::new(0, 0, 62, 20);
    let mut buf = Buffer::empty(area);
    WeekView::new().render(area, &mut buf, state);
    buf
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_defaults() {
    let state = WeekViewState::new();
    assert_eq!(state.starting_hour(), 6);
    assert_eq!(state.ending_hour(), 23);
    assert_eq!(state.starting_day(), Sun);
    assert_eq!(state.days().len(), 7);
}

#[test]
fn test_set_days() {
    let mut state = WeekViewState::new();

    assert!(state.set_days(&[Mon, Tue, Wed, Thu, Fri]));
    assert_eq!(state.starting_day(), Mon);
    assert_eq!(state.days().len(), 5);

    // empty day-set is ignored.
    assert!(!state.set_days(&[]));
    assert_eq!(state.days().len(), 5);
}

#[test]
fn test_set_starting_day() {
    let mut state = WeekViewState::new();
    state.set_days(&[Mon, Tue, Wed, Thu, Fri]);

    assert_eq!(state.set_starting_day(Wed), Ok(true));
    assert_eq!(state.days(), &[Wed, Thu, Fri, Mon, Tue]);
    assert_eq!(state.set_starting_day(Wed), Ok(false));

    // absent day errors and leaves the day-set unchanged.
    assert!(state.set_starting_day(Sat).is_err());
    assert_eq!(state.days(), &[Wed, Thu, Fri, Mon, Tue]);
}

#[test]
fn test_render_areas() {
    let mut state = sample();
    render(&mut state);

    // column-major display order: workout on Mon before standup on Fri.
    assert_eq!(state.item_order, vec![1, 0]);
    // Mon is the second column, 7:00 is the second hour row.
    assert_eq!(state.area_items[0], Rect::new(14, 2, 8, 2));
    // Fri is the sixth column, 9:00 the fourth hour row.
    assert_eq!(state.area_items[1], Rect::new(46, 4, 8, 1));
}

#[test]
fn test_render_labels() {
    let mut state = sample();
    let buf = render(&mut state);

    let label: String = (0u16..6)
        .map(|x| buf.cell((x, 1)).expect("cell").symbol())
        .collect();
    assert_eq!(label, " 6:00 ");
}

#[test]
fn test_render_excludes() {
    let mut state = sample();
    state.add_item(WeekItem::new(Sat, 9, 9, "empty"));
    state.set_days(&[Mon, Tue, Wed, Thu, Fri]);
    state.add_item(WeekItem::new(Sun, 9, 10, "hidden"));
    render(&mut state);

    assert_eq!(state.item_order, vec![1, 0]);
}

#[test]
fn test_render_clips() {
    let mut state = WeekViewState::new();
    state.set_items(vec![WeekItem::new(Sun, 4, 7, "early")]);
    render(&mut state);

    // 4:00..6:00 is above the grid, 6:00..7:00 remains visible.
    assert_eq!(state.area_items[0], Rect::new(6, 1, 8, 1));
}

#[test]
fn test_render_inverted_hours() {
    let mut state = sample();
    state.set_starting_hour(10);
    state.set_ending_hour(8);
    render(&mut state);

    // no hours to display. header-only render, nothing placed.
    assert_eq!(state.area_grid, Rect::default());
    assert!(state.area_hours.is_empty());
    assert!(state.area_items.is_empty());
    assert!(state.item_order.is_empty());
    assert_eq!(state.area_days.len(), 7);
}

#[test]
fn test_fully_clipped() {
    let mut state = WeekViewState::new();
    state.set_items(vec![WeekItem::new(Sun, 0, 5, "night")]);
    render(&mut state);

    // entirely above the hour range. placed, but with an empty
    // area, so it can't be clicked.
    assert_eq!(state.item_order, vec![0]);
    assert_eq!(state.area_items[0], Rect::default());
    assert_eq!(state.handle(&click(6, 1), MouseOnly), WeekOutcome::Continue);
    assert_eq!(state.selected(), None);
}

#[test]
fn test_mouse_select() {
    let mut state = sample();
    render(&mut state);

    assert_eq!(state.handle(&click(15, 2), MouseOnly), WeekOutcome::Selected);
    assert_eq!(state.selected(), Some(1));
    assert_eq!(state.selected_item().expect("item").text, "workout");

    // same selection again is no change.
    assert_eq!(state.handle(&click(15, 3), MouseOnly), WeekOutcome::Continue);

    assert_eq!(state.handle(&click(46, 4), MouseOnly), WeekOutcome::Selected);
    assert_eq!(state.selected(), Some(0));

    // click beside any item.
    assert_eq!(state.handle(&click(30, 10), MouseOnly), WeekOutcome::Continue);
    assert_eq!(state.selected(), Some(0));
}

#[test]
fn test_key_select() {
    let mut state = sample();
    render(&mut state);
    state.focus.set(true);

    assert_eq!(state.handle(&key(KeyCode::Down), Regular), WeekOutcome::Selected);
    assert_eq!(state.selected(), Some(1));
    assert_eq!(state.handle(&key(KeyCode::Down), Regular), WeekOutcome::Selected);
    assert_eq!(state.selected(), Some(0));
    // no item after the last.
    assert_eq!(state.handle(&key(KeyCode::Down), Regular), WeekOutcome::Continue);

    assert_eq!(state.handle(&key(KeyCode::Up), Regular), WeekOutcome::Selected);
    assert_eq!(state.selected(), Some(1));
    // no item before the first.
    assert_eq!(state.handle(&key(KeyCode::Up), Regular), WeekOutcome::Continue);

    assert_eq!(state.handle(&key(KeyCode::End), Regular), WeekOutcome::Selected);
    assert_eq!(state.selected(), Some(0));
    assert_eq!(state.handle(&key(KeyCode::Home), Regular), WeekOutcome::Selected);
    assert_eq!(state.selected(), Some(1));
}

#[test]
fn test_key_needs_focus() {
    let mut state = sample();
    render(&mut state);

    assert_eq!(state.handle(&key(KeyCode::Down), Regular), WeekOutcome::Continue);
    assert_eq!(state.selected(), None);
}

#[test]
fn test_selection() {
    let mut state = sample();

    assert!(state.select(Some(0)));
    assert_eq!(state.selected(), Some(0));
    // out of bounds is ignored.
    assert!(!state.select(Some(17)));
    assert_eq!(state.selected(), Some(0));

    state.clear_selection();
    assert_eq!(state.selected(), None);

    state.select(Some(1));
    state.set_items(vec![WeekItem::new(Tue, 11, 12, "lunch")]);
    assert_eq!(state.selected(), None);
}
