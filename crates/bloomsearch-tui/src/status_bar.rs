// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::{Style, Stylize},
	text::{Line, Span},
	widgets::Widget,
};

use crate::theme::Theme;

/// Bottom line: location on the left, key hints on the right.
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
	items: Vec<(String, String)>,
	shortcuts: Vec<(String, String)>,
	theme: Theme,
}

impl StatusBar {
	pub fn new(theme: Theme) -> Self {
		Self {
			theme,
			..Default::default()
		}
	}

	pub fn item(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
		self.items.push((label.into(), value.into()));
		self
	}

	pub fn shortcut(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
		self.shortcuts.push((key.into(), desc.into()));
		self
	}
}

impl Widget for StatusBar {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.is_empty() {
			return;
		}
		buf.set_style(area, self.theme.status);

		let mut shortcut_spans = Vec::new();
		for (i, (key, desc)) in self.shortcuts.iter().enumerate() {
			if i > 0 {
				shortcut_spans.push(Span::raw(" | "));
			}
			shortcut_spans.push(Span::raw(key.as_str()).bold().fg(self.theme.colors.accent));
			shortcut_spans.push(Span::raw(" "));
			shortcut_spans.push(Span::raw(desc.as_str()));
		}
		let shortcut_line = Line::from(shortcut_spans);
		let shortcut_width = u16::try_from(shortcut_line.width()).unwrap_or(u16::MAX);

		let mut item_spans = Vec::new();
		for (i, (label, value)) in self.items.iter().enumerate() {
			if i > 0 {
				item_spans.push(Span::raw(" | "));
			}
			item_spans.push(Span::raw(label.as_str()).bold());
			item_spans.push(Span::raw(": "));
			item_spans.push(Span::styled(value.as_str(), Style::default()));
		}
		let item_line = Line::from(item_spans);

		// Items yield to shortcuts when the line is too narrow for both.
		let available_for_items = area.width.saturating_sub(shortcut_width.saturating_add(1));
		buf.set_line(area.x, area.y, &item_line, available_for_items);

		let shortcut_x = area.right().saturating_sub(shortcut_width);
		if shortcut_x >= area.x {
			buf.set_line(shortcut_x, area.y, &shortcut_line, shortcut_width);
		}
	}
}
