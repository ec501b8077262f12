// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors {
	pub accent: Color,
	pub muted: Color,
	pub error: Color,
	pub link: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub colors: Colors,
	pub title: Style,
	pub border: Style,
	pub border_focused: Style,
	pub status: Style,
}

impl Theme {
	pub fn dark() -> Self {
		let colors = Colors {
			accent: Color::Cyan,
			muted: Color::DarkGray,
			error: Color::Red,
			link: Color::Blue,
		};
		Self {
			colors,
			title: Style::default().add_modifier(Modifier::BOLD),
			border: Style::default().fg(colors.muted),
			border_focused: Style::default().fg(colors.accent),
			status: Style::default().bg(Color::Black),
		}
	}

	pub fn muted(&self) -> Style {
		Style::default().fg(self.colors.muted)
	}

	pub fn error(&self) -> Style {
		Style::default().fg(self.colors.error)
	}

	pub fn link(&self) -> Style {
		Style::default()
			.fg(self.colors.link)
			.add_modifier(Modifier::UNDERLINED)
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::dark()
	}
}
