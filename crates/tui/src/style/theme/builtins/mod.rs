use ratatui::style::{Color, Modifier, Style};

use crate::style::theme::types::{Theme, ThemeDefinition};

pub(super) const SLATE: Theme = Theme {
	header: Style::new().fg(Color::Rgb(148, 163, 184)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	selected: Style::new()
		.fg(Color::Rgb(56, 189, 248))
		.add_modifier(Modifier::BOLD),
	focus: Style::new().fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	error: Style::new()
		.fg(Color::Rgb(248, 113, 113))
		.add_modifier(Modifier::BOLD),
};

const LIGHT: Theme = Theme {
	header: Style::new().fg(Color::Rgb(71, 85, 105)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	selected: Style::new()
		.fg(Color::Rgb(0, 102, 153))
		.add_modifier(Modifier::BOLD),
	focus: Style::new().fg(Color::Rgb(120, 120, 0)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	error: Style::new()
		.fg(Color::Rgb(185, 28, 28))
		.add_modifier(Modifier::BOLD),
};

const SOLARIZED: Theme = Theme {
	header: Style::new().fg(Color::Rgb(147, 161, 161)),
	row_highlight: Style::new()
		.bg(Color::Rgb(7, 54, 66))
		.fg(Color::Rgb(181, 137, 0)),
	selected: Style::new()
		.fg(Color::Rgb(42, 161, 152))
		.add_modifier(Modifier::BOLD),
	focus: Style::new().fg(Color::Rgb(181, 137, 0)),
	prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
	empty: Style::new().fg(Color::Rgb(88, 110, 117)),
	error: Style::new()
		.fg(Color::Rgb(220, 50, 47))
		.add_modifier(Modifier::BOLD),
};

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition::new("slate", SLATE).with_aliases(&["dark", "default"]),
	ThemeDefinition::new("light", LIGHT),
	ThemeDefinition::new("solarized", SOLARIZED),
];
