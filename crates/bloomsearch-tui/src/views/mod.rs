// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod entry;
mod results;

pub use entry::render_entry;
pub use results::{render_not_found, render_results, results_lines, ResultsView};

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header, body and status rows.
pub fn main_layout(area: Rect) -> [Rect; 3] {
	let chunks = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(2),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.split(area);
	[chunks[0], chunks[1], chunks[2]]
}
