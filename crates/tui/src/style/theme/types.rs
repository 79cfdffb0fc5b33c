use ratatui::style::{Color, Style};

/// A theme containing styles for the panels and the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for borders, headers and separators.
	pub header: Style,
	/// Style for the cursor row of the focused panel.
	pub row_highlight: Style,
	/// Style for rows that are part of the selection.
	pub selected: Style,
	/// Border style of the focused panel and of the current drop target.
	pub focus: Style,
	/// Style for key hints and informational status messages.
	pub prompt: Style,
	/// Style for empty-panel placeholders.
	pub empty: Style,
	/// Style for error messages in the status bar.
	pub error: Style,
}

impl Theme {
	/// Foreground color used for plain borders.
	#[must_use]
	pub fn border_color(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}
}

/// A named built-in theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub aliases: &'static [&'static str],
	pub theme: Theme,
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			aliases: &[],
			theme,
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	/// Whether `normalized` names this theme or one of its aliases.
	pub(crate) fn matches(&self, normalized: &str) -> bool {
		self.name == normalized || self.aliases.contains(&normalized)
	}
}
