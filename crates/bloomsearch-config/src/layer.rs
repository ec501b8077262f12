// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by a single source.

use serde::{Deserialize, Serialize};

use crate::sections::{ApiConfigLayer, LoggingConfigLayer, ResultsConfigLayer};

/// One source's view of the configuration. Unset fields defer to lower
/// precedence sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
	#[serde(default)]
	pub api: Option<ApiConfigLayer>,
	#[serde(default)]
	pub results: Option<ResultsConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl ConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if let Some(other_api) = other.api {
			self.api.get_or_insert_with(Default::default).merge(other_api);
		}
		if let Some(other_results) = other.results {
			self
				.results
				.get_or_insert_with(Default::default)
				.merge(other_results);
		}
		if let Some(other_logging) = other.logging {
			self
				.logging
				.get_or_insert_with(Default::default)
				.merge(other_logging);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_creates_missing_sections() {
		let mut base = ConfigLayer::default();
		base.merge(ConfigLayer {
			logging: Some(LoggingConfigLayer {
				level: Some("debug".to_string()),
			}),
			..Default::default()
		});
		assert_eq!(
			base.logging.and_then(|l| l.level).as_deref(),
			Some("debug")
		);
		assert!(base.api.is_none());
	}

	#[test]
	fn test_unknown_section_is_rejected() {
		let result: Result<ConfigLayer, _> = toml::from_str("[serper]\napi_key = \"x\"");
		assert!(result.is_err());
	}
}
