// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Terminal UI for bloomsearch.

pub mod app;
pub mod input;
pub mod runner;
pub mod status_bar;
pub mod theme;
pub mod views;

use std::sync::Arc;
use std::time::Duration;

use bloomsearch_core::{Location, SearchBackend};
use tokio::runtime::Handle;

pub use app::{App, AppSettings};
pub use input::InputState;
pub use runner::{run_tui_app, TuiApp};
pub use status_bar::StatusBar;
pub use theme::Theme;

pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Runs the interactive app on the real terminal, starting at `start`.
///
/// Blocks the calling thread; searches run as tasks on `runtime`.
pub fn run<B: SearchBackend + 'static>(
	backend: Arc<B>,
	runtime: Handle,
	settings: AppSettings,
	start: Location,
) -> anyhow::Result<()> {
	let app = App::new(backend, runtime, settings, start);
	run_tui_app(app, TICK_RATE)
}
