// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! XDG Base Directory compliant path resolution.

use std::path::{Path, PathBuf};

use crate::ConfigError;

pub const APP_DIR: &str = "bloomsearch";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "bloomsearch.log";

/// Resolved XDG paths for bloomsearch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsConfig {
	/// User config file: ~/.config/bloomsearch/config.toml
	pub config_file: PathBuf,
	/// State directory: ~/.local/state/bloomsearch/
	pub state_dir: PathBuf,
}

impl PathsConfig {
	/// Log file used while the terminal UI owns the screen.
	pub fn log_file(&self) -> PathBuf {
		self.state_dir.join(LOG_FILE_NAME)
	}

	fn from_homes(config_home: &Path, state_home: &Path) -> Self {
		Self {
			config_file: config_home.join(APP_DIR).join(CONFIG_FILE_NAME),
			state_dir: state_home.join(APP_DIR),
		}
	}
}

/// Resolve XDG paths, honouring `XDG_CONFIG_HOME` and `XDG_STATE_HOME`.
pub fn resolve_xdg_paths() -> Result<PathsConfig, ConfigError> {
	let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;

	let config_home = std::env::var_os("XDG_CONFIG_HOME")
		.map(PathBuf::from)
		.unwrap_or_else(|| home.join(".config"));

	let state_home = std::env::var_os("XDG_STATE_HOME")
		.map(PathBuf::from)
		.unwrap_or_else(|| home.join(".local/state"));

	tracing::debug!(
		config_home = %config_home.display(),
		state_home = %state_home.display(),
		"resolved XDG paths"
	);

	Ok(PathsConfig::from_homes(&config_home, &state_home))
}
