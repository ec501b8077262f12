// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use bloomsearch_core::sanitize::plain_text;
use bloomsearch_core::{LoadedResults, ViewState};
use ratatui::{
	layout::Rect,
	style::{Modifier, Style},
	text::{Line, Span},
	widgets::{Paragraph, Wrap},
	Frame,
};

use crate::theme::Theme;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Everything the results screen needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct ResultsView<'a> {
	pub state: &'a ViewState,
	pub page_size_options: &'a [u32],
	pub link_base_url: &'a str,
	pub spinner_frame: usize,
}

pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	view: &ResultsView<'_>,
	scroll: u16,
	theme: &Theme,
) {
	let paragraph = Paragraph::new(results_lines(view, theme))
		.wrap(Wrap { trim: false })
		.scroll((scroll, 0));
	frame.render_widget(paragraph, area);
}

pub fn render_not_found(frame: &mut Frame, area: Rect, path: &str, theme: &Theme) {
	let lines = vec![
		Line::styled(format!("Nothing lives at {}", plain_text(path)), theme.title),
		Line::styled("Press Esc to go back to search.", theme.muted()),
	];
	frame.render_widget(Paragraph::new(lines), area);
}

/// Text of the results screen for the current view state.
pub fn results_lines(view: &ResultsView<'_>, theme: &Theme) -> Vec<Line<'static>> {
	match view.state {
		ViewState::Idle => Vec::new(),
		ViewState::Loading { query } => {
			let frame = SPINNER_FRAMES[view.spinner_frame % SPINNER_FRAMES.len()];
			vec![Line::from(vec![
				Span::styled(format!("{frame} "), Style::default().fg(theme.colors.accent)),
				Span::raw(format!("Loading results for \"{}\"...", plain_text(query))),
			])]
		}
		ViewState::Errored(err) => vec![Line::styled(err.user_message(), theme.error())],
		ViewState::Empty { query } => vec![
			Line::styled(
				format!("No results found for \"{}\"", plain_text(query)),
				theme.title,
			),
			Line::raw("Try searching for something else!"),
		],
		ViewState::Redirected { query, redirect } => vec![
			Line::styled(
				format!("Redirect found for \"{}\"!", plain_text(query)),
				theme.title,
			),
			Line::from(vec![
				Span::raw("If this were a real application, you would be redirected to "),
				Span::styled(plain_text(&redirect.redirected_url), theme.link()),
			]),
		],
		ViewState::Loaded(loaded) => loaded_lines(loaded, view, theme),
	}
}

fn loaded_lines(
	loaded: &LoadedResults,
	view: &ResultsView<'_>,
	theme: &Theme,
) -> Vec<Line<'static>> {
	let mut lines = vec![Line::styled(plain_text(&loaded.title()), theme.title)];

	if let Some(suggestion) = loaded.suggestion() {
		lines.push(Line::from(vec![
			Span::raw("Did you mean: "),
			Span::styled(plain_text(suggestion), theme.link()),
			Span::styled("  [d]", theme.muted()),
		]));
	}

	lines.push(Line::raw(loaded.count_label()));

	let pagination = loaded.pagination;
	let mut controls = vec![
		Span::raw(pagination.label()),
		Span::styled("  Page size:", theme.muted()),
	];
	for size in view.page_size_options {
		let style = if *size == pagination.page_size {
			Style::default()
				.fg(theme.colors.accent)
				.add_modifier(Modifier::BOLD | Modifier::REVERSED)
		} else {
			theme.muted()
		};
		controls.push(Span::raw(" "));
		controls.push(Span::styled(size.to_string(), style));
	}
	lines.push(Line::from(controls));

	if pagination.is_out_of_range() {
		if let Some(last) = pagination.last_page() {
			lines.push(Line::styled(
				format!(
					"Page {} is past the last page. Press G to jump to page {last}.",
					pagination.page_number
				),
				theme.error(),
			));
		}
	}

	let first_rank = u64::from(pagination.page_number.saturating_sub(1))
		* u64::from(pagination.page_size);
	for (i, doc) in loaded.response.docs.iter().enumerate() {
		lines.push(Line::raw(""));
		lines.push(Line::styled(
			format!("{}. {}", first_rank + i as u64 + 1, doc.display_title()),
			theme.title,
		));
		let intro = doc.introduction_text();
		if !intro.is_empty() {
			lines.push(Line::raw(format!("   {intro}")));
		}
		lines.push(Line::from(vec![
			Span::styled("   Read more: ", theme.muted()),
			Span::styled(plain_text(&doc.link(view.link_base_url)), theme.link()),
		]));
	}

	lines
}
