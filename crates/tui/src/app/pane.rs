//! View state for a single panel.

use ratatui::layout::Rect;
use ratatui::widgets::{ScrollbarState, TableState};

use crate::components::point_in_rect;
use crate::components::tables::TABLE_HEADER_ROWS;

/// Screen geometry, cursor and scroll state of one panel.
pub(crate) struct PaneState {
	/// Cursor row and scroll offset of the panel's table.
	pub table_state: TableState,
	/// Scrollbar state for the panel.
	pub scrollbar_state: ScrollbarState,
	/// Screen area of the scrollbar if rendered.
	pub scrollbar_area: Option<Rect>,
	/// Last known panel area on screen, including its border.
	pub area: Option<Rect>,
	/// Whether the mouse is currently over the panel.
	pub hovered: bool,
}

impl Default for PaneState {
	fn default() -> Self {
		let mut table_state = TableState::default();
		table_state.select(Some(0));
		Self {
			table_state,
			scrollbar_state: ScrollbarState::default(),
			scrollbar_area: None,
			area: None,
			hovered: false,
		}
	}
}

impl PaneState {
	pub fn cursor(&self) -> Option<usize> {
		self.table_state.selected()
	}

	pub fn set_cursor(&mut self, index: usize, len: usize) {
		if len == 0 {
			self.table_state.select(None);
		} else {
			self.table_state.select(Some(index.min(len - 1)));
		}
	}

	/// Keep the cursor on an existing row after the panel changed size.
	pub fn ensure_cursor(&mut self, len: usize) {
		match self.table_state.selected() {
			_ if len == 0 => self.table_state.select(None),
			None => self.table_state.select(Some(0)),
			Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}

	pub fn contains(&self, column: u16, row: u16) -> bool {
		self.area
			.is_some_and(|area| point_in_rect(column, row, area))
	}

	pub fn update_hover(&mut self, column: u16, row: u16) {
		self.hovered = self.contains(column, row);
	}

	/// First and one-past-last screen rows of the table body.
	fn body_rows(&self) -> Option<(u16, u16)> {
		let area = self.area?;
		// Rounded border on every side; the header and its separator take two rows.
		let inner_y = area.y.saturating_add(1);
		let inner_height = area.height.saturating_sub(2);
		let start = inner_y.saturating_add(TABLE_HEADER_ROWS as u16);
		let end = inner_y.saturating_add(inner_height);
		(start < end).then_some((start, end))
	}

	/// Index of the item drawn at screen row `row`, if any.
	pub fn row_at(&self, row: u16, len: usize) -> Option<usize> {
		let (start, end) = self.body_rows()?;
		if row < start || row >= end {
			return None;
		}
		let index = self.table_state.offset() + usize::from(row - start);
		(index < len).then_some(index)
	}

	/// Insertion slot for a drop released at screen row `row`.
	///
	/// Rows above the body map to the first visible slot; rows below the last
	/// item map to `len`.
	pub fn drop_slot_at(&self, row: u16, len: usize) -> usize {
		let offset = self.table_state.offset();
		let Some((start, _)) = self.body_rows() else {
			return len;
		};
		if row < start {
			return offset.min(len);
		}
		(offset + usize::from(row - start)).min(len)
	}

	/// Sync the scrollbar with the table content and scroll position.
	pub fn update_scrollbar(&mut self, viewport_height: usize, len: usize) {
		let rows = viewport_height.saturating_sub(TABLE_HEADER_ROWS);
		if len == 0 || rows == 0 || len <= rows {
			*self.table_state.offset_mut() = 0;
			self.scrollbar_state = ScrollbarState::default();
			return;
		}

		let max_offset = len - rows;
		let offset = self.table_state.offset().min(max_offset);
		*self.table_state.offset_mut() = offset;

		self.scrollbar_state = self
			.scrollbar_state
			.content_length(max_offset + 1)
			.viewport_content_length(rows)
			.position(offset);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn pane_at(area: Rect) -> PaneState {
		PaneState {
			area: Some(area),
			..PaneState::default()
		}
	}

	#[test]
	fn rows_start_below_border_header_and_separator() {
		let pane = pane_at(Rect::new(0, 0, 30, 10));
		assert_eq!(pane.row_at(2, 5), None);
		assert_eq!(pane.row_at(3, 5), Some(0));
		assert_eq!(pane.row_at(7, 5), Some(4));
		assert_eq!(pane.row_at(8, 5), None);
		assert_eq!(pane.row_at(9, 20), None);
	}

	#[test]
	fn drop_slot_clamps_to_length() {
		let pane = pane_at(Rect::new(0, 0, 30, 10));
		assert_eq!(pane.drop_slot_at(1, 3), 0);
		assert_eq!(pane.drop_slot_at(4, 3), 1);
		assert_eq!(pane.drop_slot_at(8, 3), 3);
	}

	#[test]
	fn ensure_cursor_tracks_length() {
		let mut pane = PaneState::default();
		pane.set_cursor(4, 5);
		pane.ensure_cursor(2);
		assert_eq!(pane.cursor(), Some(1));
		pane.ensure_cursor(0);
		assert_eq!(pane.cursor(), None);
		pane.ensure_cursor(3);
		assert_eq!(pane.cursor(), Some(0));
	}
}
