use dualist_core::Side;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use super::App;
use crate::components::rows::build_item_rows;
use crate::components::tables::{
	HIGHLIGHT_SYMBOL, TABLE_COLUMN_SPACING, TABLE_HEADER_ROWS, TABLE_HIGHLIGHT_SPACING, TableSpec,
};
use crate::components::{render_status, render_table};

const MARKER_WIDTH: u16 = 3;

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Min(1), Constraint::Length(1)])
			.split(area);

		let panes = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
			.split(layout[0]);

		self.render_pane(frame, Side::Left, panes[0]);
		self.render_pane(frame, Side::Right, panes[1]);

		render_status(
			frame,
			layout[1],
			self.status.as_ref(),
			&self.labels.hint,
			&self.theme,
		);
	}

	fn render_pane(&mut self, frame: &mut Frame, side: Side, area: Rect) {
		let Self {
			list,
			left,
			right,
			labels,
			theme,
			focus,
			drag,
			..
		} = self;
		let pane = match side {
			Side::Left => left,
			Side::Right => right,
		};
		pane.area = Some(area);

		let items = list.items(side);
		let drop_target = drag.is_some_and(|drag| drag.moved) && pane.hovered;
		let border_style = if *focus == side || drop_target {
			theme.focus
		} else {
			theme.header
		};
		let highlight_style = if *focus == side {
			theme.row_highlight
		} else {
			Style::default()
		};

		let viewport = usize::from(area.height.saturating_sub(2));
		pane.update_scrollbar(viewport, items.len());

		let id_width = id_column_width(items.iter().map(|item| item.id), &labels.headers[1]);
		let name_width = name_column_width(area.width, id_width);
		let rows = build_item_rows(
			items,
			|item| list.is_selected(item, side),
			theme,
			Some(name_width),
		);

		let pane_labels = labels.pane(side);
		let title = format!(
			" {} ({} items, {} selected) ",
			pane_labels.title,
			items.len(),
			list.selected_count(side)
		);
		let spec = TableSpec {
			headers: labels.headers.to_vec(),
			widths: vec![
				Constraint::Length(MARKER_WIDTH),
				Constraint::Length(id_width),
				Constraint::Fill(1),
			],
			rows,
			title: Some(title),
			highlight_spacing: TABLE_HIGHLIGHT_SPACING,
			highlight_style,
			border_style,
		};
		render_table(
			frame,
			area,
			&mut pane.table_state,
			&mut pane.scrollbar_state,
			&mut pane.scrollbar_area,
			spec,
			theme,
		);

		// Border plus header and separator.
		let chrome = 2 + TABLE_HEADER_ROWS as u16;
		if items.is_empty() && area.height > chrome {
			let message_area = Rect {
				x: area.x + 1,
				y: area.y + 1 + TABLE_HEADER_ROWS as u16,
				width: area.width.saturating_sub(2),
				height: 1,
			};
			let message = Paragraph::new(pane_labels.empty.as_str())
				.style(theme.empty)
				.alignment(Alignment::Center);
			frame.render_widget(message, message_area);
		}
	}
}

fn id_column_width(ids: impl Iterator<Item = u64>, header: &str) -> u16 {
	let widest = ids.map(|id| id.to_string().len()).max().unwrap_or(0);
	let width = widest.max(header.chars().count()).max(1);
	u16::try_from(width).unwrap_or(u16::MAX)
}

/// Columns left for item names once borders, the highlight symbol, the fixed
/// columns, spacing and a possible scrollbar are accounted for.
fn name_column_width(pane_width: u16, id_width: u16) -> usize {
	let symbol = HIGHLIGHT_SYMBOL.chars().count() as u16;
	let fixed = 2 + symbol + MARKER_WIDTH + id_width + 2 * TABLE_COLUMN_SPACING + 1;
	usize::from(pane_width.saturating_sub(fixed)).max(1)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn id_column_fits_header_and_widest_id() {
		assert_eq!(id_column_width([1, 2, 3].into_iter(), "Id"), 2);
		assert_eq!(id_column_width([7, 1234].into_iter(), "Id"), 4);
		assert_eq!(id_column_width(std::iter::empty(), ""), 1);
	}

	#[test]
	fn name_column_never_collapses() {
		assert_eq!(name_column_width(4, 2), 1);
		assert_eq!(name_column_width(40, 2), 28);
	}
}
