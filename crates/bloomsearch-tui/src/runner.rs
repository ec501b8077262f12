// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal::{
	disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};

pub trait TuiApp {
	fn render(&mut self, frame: &mut Frame);
	fn on_key(&mut self, key: KeyEvent);
	fn on_tick(&mut self);
	fn should_quit(&self) -> bool;
}

/// Drives `app` on the real terminal until it asks to quit.
///
/// The terminal is restored even when drawing or event polling fails.
pub fn run_tui_app<A: TuiApp>(mut app: A, tick_rate: Duration) -> anyhow::Result<()> {
	enable_raw_mode()?;
	io::stdout().execute(EnterAlternateScreen)?;

	let result = (|| -> anyhow::Result<()> {
		let backend = CrosstermBackend::new(io::stdout());
		let mut terminal = Terminal::new(backend)?;

		loop {
			terminal.draw(|frame| app.render(frame))?;

			if event::poll(tick_rate)? {
				if let Event::Key(key) = event::read()? {
					if key.kind == KeyEventKind::Press {
						app.on_key(key);
					}
				}
			}

			app.on_tick();

			if app.should_quit() {
				break;
			}
		}
		Ok(())
	})();

	disable_raw_mode()?;
	io::stdout().execute(LeaveAlternateScreen)?;

	result
}
