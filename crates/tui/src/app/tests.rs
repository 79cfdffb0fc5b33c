use dualist_core::{DropGesture, Item, Side, TransferList};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use crate::components::StatusLevel;

// With an 80x12 terminal the left panel spans columns 1..40 and the right one
// 40..79. Item rows start at screen row 3.
const LEFT_COL: u16 = 10;
const RIGHT_COL: u16 = 50;
const FIRST_ROW: u16 = 3;

fn draw_frame(app: &mut App) -> Terminal<TestBackend> {
	let mut terminal = Terminal::new(TestBackend::new(80, 12)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	terminal
}

fn render(app: &mut App) -> Buffer {
	draw_frame(app).backend().buffer().clone()
}

/// One quoted line per screen row.
fn frame_view(app: &mut App) -> String {
	draw_frame(app).backend().to_string()
}

fn seeded_app() -> App {
	let mut app = App::new(TransferList::seeded());
	render(&mut app);
	app
}

fn ids(items: &[Item]) -> Vec<u64> {
	items.iter().map(|item| item.id).collect()
}

fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
	app.handle_mouse(MouseEvent {
		kind,
		column,
		row,
		modifiers: KeyModifiers::NONE,
	});
}

fn click(app: &mut App, column: u16, row: u16) {
	mouse(app, MouseEventKind::Down(MouseButton::Left), column, row);
	mouse(app, MouseEventKind::Up(MouseButton::Left), column, row);
}

fn drag(app: &mut App, from: (u16, u16), to: (u16, u16)) {
	mouse(app, MouseEventKind::Down(MouseButton::Left), from.0, from.1);
	mouse(app, MouseEventKind::Drag(MouseButton::Left), to.0, to.1);
	mouse(app, MouseEventKind::Up(MouseButton::Left), to.0, to.1);
}

fn key(app: &mut App, code: KeyCode) -> Option<crate::TransferOutcome> {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn dragging_an_unselected_item_moves_only_that_item() {
	let mut app = seeded_app();
	drag(&mut app, (LEFT_COL, FIRST_ROW), (RIGHT_COL, FIRST_ROW + 1));

	assert_eq!(ids(app.list().left_items()), vec![2, 3, 4, 5, 6, 7, 8]);
	assert_eq!(ids(app.list().right_items()), vec![9, 1, 10]);
	assert_eq!(app.focus(), Side::Right);
	assert_eq!(app.cursor(), Some(1));
}

#[test]
fn click_without_moving_toggles_selection() {
	let mut app = seeded_app();
	click(&mut app, LEFT_COL, FIRST_ROW + 1);
	assert!(app.list().is_selected(&Item::new(2, "Item 2"), Side::Left));

	click(&mut app, LEFT_COL, FIRST_ROW + 1);
	assert!(!app.list().has_selected_items(Side::Left));
}

#[test]
fn dragging_a_selected_item_moves_the_whole_selection() {
	let mut app = seeded_app();
	click(&mut app, LEFT_COL, FIRST_ROW);
	click(&mut app, LEFT_COL, FIRST_ROW + 2);

	drag(&mut app, (LEFT_COL, FIRST_ROW + 2), (RIGHT_COL, FIRST_ROW + 5));

	assert_eq!(ids(app.list().left_items()), vec![2, 4, 5, 6, 7, 8]);
	assert_eq!(ids(app.list().right_items()), vec![9, 10, 1, 3]);
	assert!(app.list().selection().is_clear());
}

#[test]
fn dragging_within_a_panel_reorders() {
	let mut app = seeded_app();
	drag(&mut app, (LEFT_COL, FIRST_ROW), (LEFT_COL, FIRST_ROW + 2));
	assert_eq!(ids(app.list().left_items()), vec![2, 3, 1, 4, 5, 6, 7, 8]);
}

#[test]
fn release_outside_the_panels_changes_nothing() {
	let mut app = seeded_app();
	drag(&mut app, (LEFT_COL, FIRST_ROW), (RIGHT_COL, 11));

	assert_eq!(app.list(), &TransferList::seeded());
	assert!(app.status().is_none());
}

#[test]
fn keyboard_selection_and_batch_move() {
	let mut app = seeded_app();
	key(&mut app, KeyCode::Char(' '));
	key(&mut app, KeyCode::Down);
	key(&mut app, KeyCode::Down);
	key(&mut app, KeyCode::Char(' '));
	assert_eq!(app.list().selected_count(Side::Left), 2);

	key(&mut app, KeyCode::Char('>'));
	assert_eq!(ids(app.list().right_items()), vec![9, 10, 1, 3]);

	let outcome = key(&mut app, KeyCode::Enter).expect("enter accepts");
	assert!(outcome.accepted);
	assert_eq!(ids(&outcome.right), vec![9, 10, 1, 3]);
	assert_eq!(ids(&outcome.left), vec![2, 4, 5, 6, 7, 8]);
}

#[test]
fn ctrl_left_moves_selection_back() {
	let mut app = seeded_app();
	key(&mut app, KeyCode::Right);
	key(&mut app, KeyCode::Char(' '));
	app.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::CONTROL));

	assert_eq!(ids(app.list().right_items()), vec![10]);
	assert_eq!(app.list().left_items().last().map(|item| item.id), Some(9));
}

#[test]
fn batch_move_without_selection_reports_and_keeps_lists() {
	let mut app = seeded_app();
	key(&mut app, KeyCode::Char('>'));

	assert_eq!(app.list(), &TransferList::seeded());
	let status = app.status().expect("status message");
	assert_eq!(status.level, StatusLevel::Info);
	assert!(status.text.contains("Nothing selected"));
}

#[test]
fn shift_arrows_reorder_the_focused_item() {
	let mut app = seeded_app();
	app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT));

	assert_eq!(ids(app.list().left_items()), vec![2, 1, 3, 4, 5, 6, 7, 8]);
	assert_eq!(app.cursor(), Some(1));

	app.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT));
	assert_eq!(app.list(), &TransferList::seeded());
}

#[test]
fn d_sends_the_focused_item_to_the_end_of_the_other_panel() {
	let mut app = seeded_app();
	key(&mut app, KeyCode::Char('d'));

	assert_eq!(ids(app.list().right_items()), vec![9, 10, 1]);
	assert_eq!(app.focus(), Side::Right);
	assert_eq!(app.cursor(), Some(2));
}

#[test]
fn rejected_gesture_shows_an_error() {
	let mut app = seeded_app();
	app.apply_drop(DropGesture::transfer(Side::Left, 0, 7, 1));

	assert_eq!(app.list(), &TransferList::seeded());
	let status = app.status().expect("status message");
	assert_eq!(status.level, StatusLevel::Error);
}

#[test]
fn escape_and_q_cancel() {
	let mut app = seeded_app();
	let outcome = key(&mut app, KeyCode::Esc).expect("esc exits");
	assert!(!outcome.accepted);

	let outcome = key(&mut app, KeyCode::Char('q')).expect("q exits");
	assert!(!outcome.accepted);
	assert_eq!(ids(&outcome.left), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn clear_key_drops_all_selections() {
	let mut app = seeded_app();
	key(&mut app, KeyCode::Char(' '));
	key(&mut app, KeyCode::Tab);
	key(&mut app, KeyCode::Char(' '));
	key(&mut app, KeyCode::Char('c'));

	assert!(app.list().selection().is_clear());
}

#[test]
fn seeded_frame_snapshot() {
	let mut app = seeded_app();
	let frame = frame_view(&mut app);

	// Mouse hit-testing assumes item rows start right under the separator.
	assert_eq!(app.pane(Side::Left).row_at(FIRST_ROW, 8), Some(0));
	assert_eq!(app.pane(Side::Right).row_at(FIRST_ROW + 1, 2), Some(1));
	insta::assert_snapshot!("seeded_frame", frame);
}

#[test]
fn selection_frame_snapshot() {
	let mut app = seeded_app();
	key(&mut app, KeyCode::Char(' '));
	let frame = frame_view(&mut app);

	insta::assert_snapshot!("selection_frame", frame);
}

#[test]
fn empty_panel_frame_snapshot() {
	let list = TransferList::from_items(vec![Item::new(1, "Only")], Vec::new()).expect("list");
	let mut app = App::new(list);
	let frame = frame_view(&mut app);

	insta::assert_snapshot!("empty_panel_frame", frame);
}
