use std::borrow::Cow;

use dualist_core::Item;
use ratatui::style::Style;
use ratatui::widgets::{Cell, Row};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::style::Theme;

const SELECTED_MARKER: &str = "[x]";
const UNSELECTED_MARKER: &str = "[ ]";
const ELLIPSIS: char = '…';

/// Build one table row per item: selection marker, id and name.
///
/// Selected rows use the theme's `selected` style. Names wider than
/// `name_width` columns are cut with an ellipsis.
#[must_use]
pub fn build_item_rows<'a>(
	items: &'a [Item],
	is_selected: impl Fn(&Item) -> bool,
	theme: &Theme,
	name_width: Option<usize>,
) -> Vec<Row<'a>> {
	items
		.iter()
		.map(|item| {
			let selected = is_selected(item);
			let marker = if selected {
				SELECTED_MARKER
			} else {
				UNSELECTED_MARKER
			};
			let name = match name_width {
				Some(width) => truncate_to_width(&item.name, width),
				None => Cow::Borrowed(item.name.as_str()),
			};
			let style = if selected {
				theme.selected
			} else {
				Style::default()
			};
			Row::new([
				Cell::from(marker),
				Cell::from(item.id.to_string()),
				Cell::from(name),
			])
			.style(style)
		})
		.collect()
}

/// Shorten `text` to at most `max` display columns.
pub(crate) fn truncate_to_width(text: &str, max: usize) -> Cow<'_, str> {
	if text.width() <= max {
		return Cow::Borrowed(text);
	}
	if max == 0 {
		return Cow::Borrowed("");
	}

	let budget = max - 1;
	let mut used = 0;
	let mut out = String::new();
	for ch in text.chars() {
		let width = ch.width().unwrap_or(0);
		if used + width > budget {
			break;
		}
		used += width;
		out.push(ch);
	}
	out.push(ELLIPSIS);
	Cow::Owned(out)
}
