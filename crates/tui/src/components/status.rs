use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

/// Severity of a status bar message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
	Info,
	Error,
}

/// A one-line message reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
	pub level: StatusLevel,
	pub text: String,
}

impl StatusMessage {
	pub fn info(text: impl Into<String>) -> Self {
		Self {
			level: StatusLevel::Info,
			text: text.into(),
		}
	}

	pub fn error(text: impl Into<String>) -> Self {
		Self {
			level: StatusLevel::Error,
			text: text.into(),
		}
	}
}

/// Render the last status message, or the key hints when there is none.
pub fn render_status(
	frame: &mut Frame,
	area: Rect,
	message: Option<&StatusMessage>,
	hint: &str,
	theme: &Theme,
) {
	let line = match message {
		Some(StatusMessage {
			level: StatusLevel::Error,
			text,
		}) => Line::from(vec![
			Span::styled("error: ", theme.error),
			Span::styled(text.as_str(), theme.error),
		]),
		Some(StatusMessage { text, .. }) => Line::from(Span::styled(text.as_str(), theme.prompt)),
		None => Line::from(Span::styled(hint, theme.empty)),
	};
	frame.render_widget(Paragraph::new(line), area);
}
