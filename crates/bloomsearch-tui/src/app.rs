// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The interactive application: an entry screen and a results screen, both
//! driven entirely by the current [`Location`].

use std::sync::Arc;

use bloomsearch_core::{
	entry_location, submit_search, FetchCompletion, FetchTicket, Location, PagePolicy,
	ResultsController, Route, ViewState,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
	text::Line,
	widgets::{Block, Borders, Paragraph},
	Frame,
};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use bloomsearch_core::SearchBackend;

use crate::input::InputState;
use crate::runner::TuiApp;
use crate::status_bar::StatusBar;
use crate::theme::Theme;
use crate::views::{main_layout, render_entry, render_not_found, render_results, ResultsView};

const MAX_HISTORY: usize = 100;

/// Presentation settings for the results screen.
#[derive(Debug, Clone)]
pub struct AppSettings {
	pub policy: PagePolicy,
	pub page_size_options: Vec<u32>,
	pub link_base_url: String,
}

pub struct App<B: SearchBackend + 'static> {
	backend: Arc<B>,
	runtime: Handle,
	completions_tx: mpsc::UnboundedSender<FetchCompletion>,
	completions_rx: mpsc::UnboundedReceiver<FetchCompletion>,
	settings: AppSettings,
	location: Location,
	route: Route,
	history: Vec<Location>,
	controller: ResultsController,
	input: InputState,
	theme: Theme,
	scroll: u16,
	spinner_frame: usize,
	should_quit: bool,
}

impl<B: SearchBackend + 'static> App<B> {
	/// Opens `start` immediately. Requests are spawned on `runtime`.
	pub fn new(backend: Arc<B>, runtime: Handle, settings: AppSettings, start: Location) -> Self {
		let (completions_tx, completions_rx) = mpsc::unbounded_channel();
		let controller = ResultsController::new(settings.policy);
		let mut app = Self {
			backend,
			runtime,
			completions_tx,
			completions_rx,
			settings,
			location: start.clone(),
			route: Route::Entry,
			history: Vec::new(),
			controller,
			input: InputState::new(),
			theme: Theme::dark(),
			scroll: 0,
			spinner_frame: 0,
			should_quit: false,
		};
		app.sync(start);
		app
	}

	pub fn location(&self) -> &Location {
		&self.location
	}

	pub fn route(&self) -> &Route {
		&self.route
	}

	pub fn view_state(&self) -> &ViewState {
		self.controller.state()
	}

	pub fn input(&self) -> &InputState {
		&self.input
	}

	pub fn history_len(&self) -> usize {
		self.history.len()
	}

	pub fn should_quit(&self) -> bool {
		self.should_quit
	}

	/// Navigates to `location`, remembering the current one for [`App::back`].
	pub fn open(&mut self, location: Location) {
		if location == self.location {
			debug!(location = %location, "already at location");
			return;
		}
		info!(from = %self.location, to = %location, "navigate");
		self.history.push(self.location.clone());
		if self.history.len() > MAX_HISTORY {
			self.history.remove(0);
		}
		self.sync(location);
	}

	/// Returns to the previous location, if any.
	pub fn back(&mut self) -> bool {
		let Some(previous) = self.history.pop() else {
			return false;
		};
		info!(to = %previous, "back");
		self.sync(previous);
		true
	}

	pub fn go_home(&mut self) {
		self.open(entry_location());
	}

	/// Re-runs the current search.
	pub fn reload(&mut self) {
		if let Some(ticket) = self.controller.reload() {
			self.spawn(ticket);
		}
	}

	/// Applies finished requests. Stale ones are dropped by the controller.
	pub fn drain_completions(&mut self) -> usize {
		let mut applied = 0;
		while let Ok(completion) = self.completions_rx.try_recv() {
			if self.controller.apply(completion) {
				applied += 1;
			}
		}
		applied
	}

	pub fn tick(&mut self) {
		self.drain_completions();
		self.spinner_frame = self.spinner_frame.wrapping_add(1);
	}

	fn sync(&mut self, location: Location) {
		self.location = location;
		self.scroll = 0;
		self.route = Route::resolve(&self.location, self.controller.policy());

		match &self.route {
			Route::Results(_) => {
				if let Some(ticket) = self.controller.navigate(self.location.params()) {
					self.spawn(ticket);
				}
			}
			Route::Entry => {
				self.controller.reset();
			}
			Route::NotFound(path) => {
				warn!(path = %path, "no route for location");
				self.controller.reset();
			}
		}
	}

	fn spawn(&self, ticket: FetchTicket) {
		let backend = Arc::clone(&self.backend);
		let tx = self.completions_tx.clone();
		self.runtime.spawn(async move {
			let completion = ticket.execute(backend.as_ref()).await;
			if tx.send(completion).is_err() {
				debug!("app closed before search completed");
			}
		});
	}

	fn change_page(&mut self, page: u32) {
		if let Some(params) = self.controller.page_change(self.location.params(), page) {
			self.open(self.location.replace_params(params));
		}
	}

	fn change_page_size(&mut self, size: u32) {
		let params = self.controller.page_size_change(self.location.params(), size);
		self.open(self.location.replace_params(params));
	}

	fn cycle_page_size(&mut self, forward: bool) {
		let Some(current) = self.controller.params().map(|p| p.page.page_size()) else {
			return;
		};
		let options = &self.settings.page_size_options;
		if options.is_empty() {
			return;
		}
		let index = options.iter().position(|&size| size == current);
		let next = match (index, forward) {
			(Some(i), true) => options.get(i + 1).copied(),
			(Some(i), false) => i.checked_sub(1).and_then(|i| options.get(i).copied()),
			(None, true) => options.iter().copied().find(|&size| size > current),
			(None, false) => options.iter().rev().copied().find(|&size| size < current),
		};
		if let Some(size) = next {
			self.change_page_size(size);
		}
	}

	pub fn handle_key_event(&mut self, key: KeyEvent) {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			self.should_quit = true;
			return;
		}

		match self.route {
			Route::Entry => self.handle_entry_key(key),
			Route::Results(_) => self.handle_results_key(key),
			Route::NotFound(_) => self.handle_not_found_key(key),
		}
	}

	fn handle_entry_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc => self.should_quit = true,
			KeyCode::Enter => {
				// Blank input does not navigate.
				if let Some(location) = submit_search(self.input.content()) {
					self.open(location);
				}
			}
			KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => self.input.clear(),
			KeyCode::Char(c) => self.input.insert_char(c),
			KeyCode::Backspace => {
				self.input.delete_char();
			}
			KeyCode::Left => self.input.move_cursor_left(),
			KeyCode::Right => self.input.move_cursor_right(),
			KeyCode::Home => self.input.move_cursor_start(),
			KeyCode::End => self.input.move_cursor_end(),
			_ => {}
		}
	}

	fn handle_results_key(&mut self, key: KeyEvent) {
		let pagination = self.controller.pagination();
		match key.code {
			KeyCode::Char('q') => self.should_quit = true,
			KeyCode::Esc | KeyCode::Char('/') => self.go_home(),
			KeyCode::Backspace => {
				self.back();
			}
			KeyCode::Char('r') => self.reload(),
			KeyCode::Left | KeyCode::Char('h') => {
				if let Some(p) = pagination.filter(|p| p.has_previous()) {
					self.change_page(p.page_number - 1);
				}
			}
			KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
				if let Some(p) = pagination.filter(|p| p.has_next()) {
					self.change_page(p.page_number + 1);
				}
			}
			KeyCode::End | KeyCode::Char('G') => {
				if let Some(last) = pagination
					.filter(|p| p.is_out_of_range())
					.and_then(|p| p.last_page())
				{
					self.change_page(last);
				}
			}
			KeyCode::Char('+') => self.cycle_page_size(true),
			KeyCode::Char('-') => self.cycle_page_size(false),
			KeyCode::Char(c @ '1'..='9') => {
				let index = (c as usize) - ('1' as usize);
				if let Some(&size) = self.settings.page_size_options.get(index) {
					self.change_page_size(size);
				}
			}
			KeyCode::Char('d') => {
				let target = match self.controller.state() {
					ViewState::Loaded(loaded) => loaded.suggestion_location(),
					_ => None,
				};
				if let Some(location) = target {
					self.open(location);
				}
			}
			KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
			KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
			KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
			KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
			_ => {}
		}
	}

	fn handle_not_found_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Char('q') => self.should_quit = true,
			KeyCode::Esc | KeyCode::Char('/') => self.go_home(),
			KeyCode::Backspace => {
				self.back();
			}
			_ => {}
		}
	}

	pub fn render(&mut self, frame: &mut Frame) {
		let [header_area, body_area, status_area] = main_layout(frame.area());

		let header = Paragraph::new(Line::styled("bloomsearch", self.theme.title)).block(
			Block::default()
				.borders(Borders::BOTTOM)
				.border_style(self.theme.border),
		);
		frame.render_widget(header, header_area);

		let shortcuts: &[(&str, &str)] = match &self.route {
			Route::Entry => {
				render_entry(frame, body_area, &self.input, &self.theme);
				&[("Enter", "search"), ("Esc", "quit")]
			}
			Route::Results(_) => {
				let view = ResultsView {
					state: self.controller.state(),
					page_size_options: &self.settings.page_size_options,
					link_base_url: &self.settings.link_base_url,
					spinner_frame: self.spinner_frame,
				};
				render_results(frame, body_area, &view, self.scroll, &self.theme);
				&[
					("←/→", "page"),
					("+/-", "size"),
					("r", "reload"),
					("⌫", "back"),
					("Esc", "home"),
					("q", "quit"),
				]
			}
			Route::NotFound(path) => {
				render_not_found(frame, body_area, path, &self.theme);
				&[("⌫", "back"), ("Esc", "home"), ("q", "quit")]
			}
		};

		let mut status = StatusBar::new(self.theme).item("at", self.location.to_string());
		for (key, desc) in shortcuts {
			status = status.shortcut(*key, *desc);
		}
		frame.render_widget(status, status_area);
	}
}

impl<B: SearchBackend + 'static> TuiApp for App<B> {
	fn render(&mut self, frame: &mut Frame) {
		App::render(self, frame);
	}

	fn on_key(&mut self, key: KeyEvent) {
		self.handle_key_event(key);
	}

	fn on_tick(&mut self) {
		self.tick();
	}

	fn should_quit(&self) -> bool {
		self.should_quit
	}
}
