// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: build-time defaults, TOML files, environment
//! variables and command-line flags.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ConfigLayer;
use crate::sections::{ApiConfigLayer, LoggingConfigLayer, ResultsConfigLayer};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
	Cli = 60,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ConfigLayer, ConfigError>;
}

/// Built-in defaults, including credentials baked in at build time from
/// `BLOOMSEARCH_ACCOUNT_ID` and `BLOOMSEARCH_DOMAIN_KEY`.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ConfigLayer {
			api: Some(ApiConfigLayer {
				account_id: option_env!("BLOOMSEARCH_ACCOUNT_ID").map(str::to_string),
				domain_key: option_env!("BLOOMSEARCH_DOMAIN_KEY").map(str::to_string),
				..Default::default()
			}),
			..Default::default()
		})
	}
}

/// TOML file configuration source. A missing file is not an error.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: `BLOOMSEARCH_<FIELD>`.
pub struct EnvSource {
	lookup: Box<dyn Fn(&str) -> Option<String> + Send + Sync>,
}

impl EnvSource {
	pub fn new() -> Self {
		Self::with_lookup(|name| std::env::var(name).ok())
	}

	/// Reads variables through `lookup` instead of the process environment.
	pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
		Self {
			lookup: Box::new(lookup),
		}
	}

	fn var(&self, name: &str) -> Option<String> {
		(self.lookup)(name).filter(|s| !s.is_empty())
	}

	fn parsed<T: FromStr>(&self, name: &str) -> Result<Option<T>, ConfigError> {
		match self.var(name) {
			Some(v) => v.trim().parse().map(Some).map_err(|_| {
				ConfigError::invalid_value(name, format!("invalid number '{v}'"))
			}),
			None => Ok(None),
		}
	}

	fn size_list(&self, name: &str) -> Result<Option<Vec<u32>>, ConfigError> {
		let Some(raw) = self.var(name) else {
			return Ok(None);
		};
		raw.split(',')
			.map(str::trim)
			.filter(|s| !s.is_empty())
			.map(|s| {
				s.parse()
					.map_err(|_| ConfigError::invalid_value(name, format!("invalid size '{s}'")))
			})
			.collect::<Result<Vec<_>, _>>()
			.map(Some)
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ConfigLayer {
			api: Some(ApiConfigLayer {
				base_url: self.var("BLOOMSEARCH_BASE_URL"),
				account_id: self.var("BLOOMSEARCH_ACCOUNT_ID"),
				domain_key: self.var("BLOOMSEARCH_DOMAIN_KEY"),
				fields: self.var("BLOOMSEARCH_FIELDS"),
				br_uid: self.var("BLOOMSEARCH_BR_UID"),
				request_id: self.var("BLOOMSEARCH_REQUEST_ID"),
				site_url: self.var("BLOOMSEARCH_SITE_URL"),
				timeout_secs: self.parsed("BLOOMSEARCH_TIMEOUT_SECS")?,
			}),
			results: Some(ResultsConfigLayer {
				default_page_size: self.parsed("BLOOMSEARCH_DEFAULT_PAGE_SIZE")?,
				max_page_size: self.parsed("BLOOMSEARCH_MAX_PAGE_SIZE")?,
				page_size_options: self.size_list("BLOOMSEARCH_PAGE_SIZE_OPTIONS")?,
				link_base_url: self.var("BLOOMSEARCH_LINK_BASE_URL"),
			}),
			logging: Some(LoggingConfigLayer {
				level: self.var("BLOOMSEARCH_LOG_LEVEL"),
			}),
		})
	}
}

/// Values supplied as command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
	pub config_path: Option<PathBuf>,
	pub account_id: Option<String>,
	pub domain_key: Option<String>,
	pub base_url: Option<String>,
	pub log_level: Option<String>,
}

/// Command-line flag source.
pub struct CliSource {
	overrides: CliOverrides,
}

impl CliSource {
	pub fn new(overrides: CliOverrides) -> Self {
		Self { overrides }
	}
}

impl ConfigSource for CliSource {
	fn name(&self) -> &'static str {
		"cli"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Cli
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		let o = &self.overrides;
		Ok(ConfigLayer {
			api: Some(ApiConfigLayer {
				base_url: o.base_url.clone(),
				account_id: o.account_id.clone(),
				domain_key: o.domain_key.clone(),
				..Default::default()
			}),
			results: None,
			logging: Some(LoggingConfigLayer {
				level: o.log_level.clone(),
			}),
		})
	}
}
