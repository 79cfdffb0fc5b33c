//! Core state container for the terminal application's front-end.
//!
//! The `app` module exposes the [`App`] struct which bundles the transfer list
//! with the view state of both panels, the in-flight drag and the status bar.

use dualist_core::{ItemId, Side, TransferList};

use super::pane::PaneState;
use crate::components::StatusMessage;
use crate::config::UiLabels;
use crate::style::Theme;

/// A drag that started on a row and has not been released yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DragState {
	pub source: Side,
	pub source_index: usize,
	pub item: ItemId,
	/// Screen cell where the button went down.
	pub origin: (u16, u16),
	/// Whether the pointer left `origin` before release.
	pub moved: bool,
}

/// Aggregate state shared across the terminal UI.
pub struct App {
	pub(crate) list: TransferList,
	pub(crate) left: PaneState,
	pub(crate) right: PaneState,
	/// Panel receiving keyboard commands.
	pub(crate) focus: Side,
	pub(crate) drag: Option<DragState>,
	pub(crate) status: Option<StatusMessage>,
	pub(crate) labels: UiLabels,
	pub(crate) theme: Theme,
}

impl App {
	/// Construct an [`App`] around `list` with default labels and theme.
	pub fn new(list: TransferList) -> Self {
		let mut app = Self {
			list,
			left: PaneState::default(),
			right: PaneState::default(),
			focus: Side::Left,
			drag: None,
			status: None,
			labels: UiLabels::default(),
			theme: Theme::default(),
		};
		app.sync_cursors();
		app
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	pub fn list(&self) -> &TransferList {
		&self.list
	}

	/// Panel currently receiving keyboard commands.
	pub fn focus(&self) -> Side {
		self.focus
	}

	/// Last message shown in the status bar.
	pub fn status(&self) -> Option<&StatusMessage> {
		self.status.as_ref()
	}

	pub(crate) fn pane(&self, side: Side) -> &PaneState {
		match side {
			Side::Left => &self.left,
			Side::Right => &self.right,
		}
	}

	pub(crate) fn pane_mut(&mut self, side: Side) -> &mut PaneState {
		match side {
			Side::Left => &mut self.left,
			Side::Right => &mut self.right,
		}
	}

	/// Cursor index of the focused panel.
	pub fn cursor(&self) -> Option<usize> {
		self.pane(self.focus).cursor()
	}

	/// Panel under the given screen cell.
	pub(crate) fn side_at(&self, column: u16, row: u16) -> Option<Side> {
		[Side::Left, Side::Right]
			.into_iter()
			.find(|side| self.pane(*side).contains(column, row))
	}

	pub(crate) fn sync_cursors(&mut self) {
		for side in [Side::Left, Side::Right] {
			let len = self.list.items(side).len();
			self.pane_mut(side).ensure_cursor(len);
		}
	}
}
