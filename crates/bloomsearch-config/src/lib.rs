// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Layered configuration for bloomsearch.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file,
//!   environment, command-line flags)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`BLOOMSEARCH_*`)
//!
//! # Usage
//!
//! ```ignore
//! use bloomsearch_config::{load_config, CliOverrides};
//!
//! let config = load_config(CliOverrides::default())?;
//! let policy = config.results.page_policy()?;
//! ```

pub mod error;
pub mod layer;
pub mod paths;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ConfigLayer;
pub use paths::{resolve_xdg_paths, PathsConfig};
pub use sections::*;
pub use sources::{
	CliOverrides, CliSource, ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource,
};

use bloomsearch_core::PagePolicy;
use tracing::{debug, info};

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct BloomsearchConfig {
	pub paths: PathsConfig,
	pub api: ApiConfig,
	pub results: ResultsConfig,
	pub logging: LoggingConfig,
}

impl BloomsearchConfig {
	/// Pagination policy for the results view. Always valid once loaded.
	pub fn page_policy(&self) -> Result<PagePolicy, ConfigError> {
		self.results.page_policy()
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Command-line flags
/// 2. Environment variables (`BLOOMSEARCH_*`)
/// 3. Config file (`--config` or `$XDG_CONFIG_HOME/bloomsearch/config.toml`)
/// 4. Built-in defaults
pub fn load_config(cli: CliOverrides) -> Result<BloomsearchConfig, ConfigError> {
	let paths = resolve_xdg_paths()?;
	let config_file = cli
		.config_path
		.clone()
		.unwrap_or_else(|| paths.config_file.clone());

	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_file)),
		Box::new(EnvSource::new()),
		Box::new(CliSource::new(cli)),
	];

	load_from_sources(sources, paths)
}

/// Merge `sources` in precedence order and finalize.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
	paths: PathsConfig,
) -> Result<BloomsearchConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged, paths)
}

fn finalize(layer: ConfigLayer, paths: PathsConfig) -> Result<BloomsearchConfig, ConfigError> {
	let api = layer.api.unwrap_or_default().finalize();
	let results = layer.results.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	api.validate()?;
	results.validate()?;

	info!(
		base_url = %api.base_url,
		credentials_configured = api.has_credentials(),
		default_page_size = results.default_page_size,
		max_page_size = results.max_page_size,
		log_level = %logging.level,
		"Configuration loaded"
	);

	Ok(BloomsearchConfig {
		paths,
		api,
		results,
		logging,
	})
}
