// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::{
	layout::{Constraint, Direction, Layout, Position, Rect},
	text::Line,
	widgets::{Block, Borders, Paragraph},
	Frame,
};

use crate::input::InputState;
use crate::theme::Theme;

const INPUT_WIDTH: u16 = 60;

/// The search box, centred in `area`.
pub fn render_entry(frame: &mut Frame, area: Rect, input: &InputState, theme: &Theme) {
	let rows = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Fill(1),
			Constraint::Length(1),
			Constraint::Length(3),
			Constraint::Length(1),
			Constraint::Fill(1),
		])
		.split(area);

	let width = INPUT_WIDTH.min(area.width);
	let centre = |row: Rect| Rect {
		x: row.x + (row.width.saturating_sub(width)) / 2,
		width,
		..row
	};

	frame.render_widget(
		Paragraph::new(Line::styled("Search the catalogue", theme.title)),
		centre(rows[1]),
	);

	let box_area = centre(rows[2]);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.border_focused)
		.title("Search...");
	let inner = block.inner(box_area);
	frame.render_widget(Paragraph::new(input.content()).block(block), box_area);

	frame.render_widget(
		Paragraph::new(Line::styled("Enter to search, Esc to quit", theme.muted())),
		centre(rows[3]),
	);

	if inner.width > 0 {
		let offset = u16::try_from(input.cursor()).unwrap_or(u16::MAX);
		let x = inner.x.saturating_add(offset).min(inner.right().saturating_sub(1));
		frame.set_cursor_position(Position::new(x, inner.y));
	}
}
