use dualist_core::Side;

/// Text rendered around a single panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneLabels {
	/// Title drawn in the panel border.
	pub title: String,
	/// Placeholder shown when the panel has no items.
	pub empty: String,
}

impl PaneLabels {
	#[must_use]
	pub fn new(title: impl Into<String>, empty: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			empty: empty.into(),
		}
	}
}

/// Textual configuration for both panels and the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	pub left: PaneLabels,
	pub right: PaneLabels,
	/// Column headers: selection marker, id, name.
	pub headers: [String; 3],
	/// Key hints shown in the status bar when there is nothing to report.
	pub hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			left: PaneLabels::new("Available", "No items"),
			right: PaneLabels::new("Assigned", "No items"),
			headers: ["Sel".into(), "Id".into(), "Name".into()],
			hint: "space select · drag or d move · > < move selected · shift+↑↓ reorder · enter accept · esc cancel".into(),
		}
	}
}

impl UiLabels {
	/// Replace both panel titles.
	#[must_use]
	pub fn with_titles(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
		self.left.title = left.into();
		self.right.title = right.into();
		self
	}

	pub fn pane(&self, side: Side) -> &PaneLabels {
		match side {
			Side::Left => &self.left,
			Side::Right => &self.right,
		}
	}
}
