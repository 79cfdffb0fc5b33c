use dualist_core::{DropGesture, DropKind, DropOutcome, Side};
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use super::state::DragState;
use crate::components::StatusMessage;
use crate::outcome::TransferOutcome;

impl App {
	/// Process a keyboard event and return the outcome if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<TransferOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let shift = key.modifiers.contains(KeyModifiers::SHIFT);

		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => {
				return Some(TransferOutcome::from_list(&self.list, false));
			}
			KeyCode::Enter => {
				return Some(TransferOutcome::from_list(&self.list, true));
			}
			KeyCode::Right if ctrl => self.move_selected(Side::Left),
			KeyCode::Left if ctrl => self.move_selected(Side::Right),
			KeyCode::Char('>') => self.move_selected(Side::Left),
			KeyCode::Char('<') => self.move_selected(Side::Right),
			KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.other(),
			KeyCode::Left => self.focus = Side::Left,
			KeyCode::Right => self.focus = Side::Right,
			KeyCode::Up if shift => self.shift_focused(-1),
			KeyCode::Down if shift => self.shift_focused(1),
			KeyCode::Up => self.move_cursor(self.focus, -1),
			KeyCode::Down => self.move_cursor(self.focus, 1),
			KeyCode::Char(' ') => self.toggle_focused(),
			KeyCode::Char('d') => self.send_focused_across(),
			KeyCode::Char('c') => {
				self.list.clear_selections();
				self.status = Some(StatusMessage::info("Selections cleared"));
			}
			_ => {}
		}
		None
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		self.left.update_hover(mouse.column, mouse.row);
		self.right.update_hover(mouse.column, mouse.row);

		match mouse.kind {
			MouseEventKind::ScrollUp => {
				if let Some(side) = self.side_at(mouse.column, mouse.row) {
					self.move_cursor(side, -1);
				}
			}
			MouseEventKind::ScrollDown => {
				if let Some(side) = self.side_at(mouse.column, mouse.row) {
					self.move_cursor(side, 1);
				}
			}
			MouseEventKind::Down(MouseButton::Left) => self.begin_drag(mouse.column, mouse.row),
			MouseEventKind::Drag(MouseButton::Left) => {
				if let Some(drag) = self.drag.as_mut()
					&& drag.origin != (mouse.column, mouse.row)
				{
					drag.moved = true;
				}
			}
			MouseEventKind::Up(MouseButton::Left) => self.finish_drag(mouse.column, mouse.row),
			_ => {}
		}
	}

	fn begin_drag(&mut self, column: u16, row: u16) {
		self.drag = None;
		let Some(side) = self.side_at(column, row) else {
			return;
		};
		self.focus = side;

		let len = self.list.items(side).len();
		let Some(index) = self.pane(side).row_at(row, len) else {
			return;
		};
		self.pane_mut(side).set_cursor(index, len);
		self.drag = Some(DragState {
			source: side,
			source_index: index,
			item: self.list.items(side)[index].id,
			origin: (column, row),
			moved: false,
		});
	}

	fn finish_drag(&mut self, column: u16, row: u16) {
		let Some(drag) = self.drag.take() else {
			return;
		};
		let Some(target) = self.side_at(column, row) else {
			return;
		};

		let target_len = self.list.items(target).len();
		let released_on = self.pane(target).row_at(row, target_len);
		if !drag.moved || (target == drag.source && released_on == Some(drag.source_index)) {
			self.toggle_at(drag.source, drag.source_index);
			return;
		}

		let slot = self.pane(target).drop_slot_at(row, target_len);
		let gesture = if target == drag.source {
			DropGesture::reorder(
				drag.source,
				drag.source_index,
				slot.min(target_len.saturating_sub(1)),
				drag.item,
			)
		} else {
			DropGesture::transfer(drag.source, drag.source_index, slot, drag.item)
		};
		self.apply_drop(gesture);
	}

	/// Run `gesture` through the transfer list and report the result.
	pub(crate) fn apply_drop(&mut self, gesture: DropGesture) {
		match self.list.drop(gesture) {
			Ok(outcome) => {
				self.status = Some(StatusMessage::info(self.describe_drop(&gesture, &outcome)));
				self.focus = gesture.target;
				self.sync_cursors();
				if let Some(first) = outcome.moved.first()
					&& let Some(index) = self.list.store().position(gesture.target, *first)
				{
					let len = self.list.items(gesture.target).len();
					self.pane_mut(gesture.target).set_cursor(index, len);
				}
			}
			Err(err) => self.status = Some(StatusMessage::error(err.to_string())),
		}
	}

	fn describe_drop(&self, gesture: &DropGesture, outcome: &DropOutcome) -> String {
		match outcome.kind {
			DropKind::Reorder => format!(
				"Moved item {} to position {}",
				gesture.item,
				gesture.target_index + 1
			),
			DropKind::Single | DropKind::Batch => {
				self.describe_move(outcome.moved.len(), gesture.target)
			}
		}
	}

	fn describe_move(&self, count: usize, to: Side) -> String {
		let noun = if count == 1 { "item" } else { "items" };
		format!("Moved {count} {noun} to {}", self.labels.pane(to).title)
	}

	/// Move every selected item of `from` to the end of the other panel.
	fn move_selected(&mut self, from: Side) {
		let moved = self.list.move_all_selected_to_other_side(from);
		if moved == 0 {
			self.status = Some(StatusMessage::info(format!(
				"Nothing selected in {}",
				self.labels.pane(from).title
			)));
			return;
		}

		let to = from.other();
		self.status = Some(StatusMessage::info(self.describe_move(moved, to)));
		self.sync_cursors();
		let len = self.list.items(to).len();
		self.pane_mut(to).set_cursor(len - moved, len);
	}

	fn move_cursor(&mut self, side: Side, delta: isize) {
		let len = self.list.items(side).len();
		let pane = self.pane_mut(side);
		let Some(current) = pane.cursor() else {
			pane.ensure_cursor(len);
			return;
		};
		pane.set_cursor(current.saturating_add_signed(delta), len);
	}

	/// Reorder the focused item one step up or down.
	fn shift_focused(&mut self, delta: isize) {
		let side = self.focus;
		let len = self.list.items(side).len();
		let Some(from) = self.pane(side).cursor() else {
			return;
		};
		let Some(to) = from.checked_add_signed(delta).filter(|to| *to < len) else {
			return;
		};
		let item = self.list.items(side)[from].id;
		self.apply_drop(DropGesture::reorder(side, from, to, item));
	}

	/// Drop the focused item at the end of the other panel.
	fn send_focused_across(&mut self) {
		let side = self.focus;
		let Some(from) = self.pane(side).cursor() else {
			return;
		};
		let Some(item) = self.list.items(side).get(from).map(|item| item.id) else {
			return;
		};
		let to = self.list.items(side.other()).len();
		self.apply_drop(DropGesture::transfer(side, from, to, item));
	}

	fn toggle_focused(&mut self) {
		if let Some(index) = self.pane(self.focus).cursor() {
			self.toggle_at(self.focus, index);
		}
	}

	fn toggle_at(&mut self, side: Side, index: usize) {
		let Some(item) = self.list.items(side).get(index).cloned() else {
			return;
		};
		match self.list.toggle_select(&item, side) {
			Ok(_) => self.status = None,
			Err(err) => self.status = Some(StatusMessage::error(err.to_string())),
		}
	}
}
