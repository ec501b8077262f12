// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where log lines go.
#[derive(Debug, Clone)]
pub enum LogTarget {
	Stderr,
	/// Appends to a file; used while the terminal UI owns the screen.
	File(PathBuf),
}

/// Installs the global subscriber. `RUST_LOG` overrides `level`.
pub fn init_logging(level: &str, target: LogTarget) -> anyhow::Result<()> {
	let filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(level))
		.unwrap_or_else(|_| EnvFilter::new("info"));

	match target {
		LogTarget::Stderr => {
			tracing_subscriber::registry()
				.with(filter)
				.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
				.try_init()?;
		}
		LogTarget::File(path) => {
			if let Some(dir) = path.parent() {
				fs::create_dir_all(dir)
					.with_context(|| format!("creating log directory {}", dir.display()))?;
			}
			let file = OpenOptions::new()
				.create(true)
				.append(true)
				.open(&path)
				.with_context(|| format!("opening log file {}", path.display()))?;
			tracing_subscriber::registry()
				.with(filter)
				.with(
					tracing_subscriber::fmt::layer()
						.with_ansi(false)
						.with_writer(Arc::new(file)),
				)
				.try_init()?;
		}
	}

	Ok(())
}
