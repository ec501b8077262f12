// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bloomreach API configuration section.

use std::time::Duration;

use bloomsearch_api::{
	Credentials, RequestSettings, DEFAULT_BASE_URL, DEFAULT_BR_UID, DEFAULT_FIELDS,
	DEFAULT_REQUEST_ID, DEFAULT_SITE_URL, REQUEST_TIMEOUT,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfigLayer {
	pub base_url: Option<String>,
	pub account_id: Option<String>,
	pub domain_key: Option<String>,
	pub fields: Option<String>,
	pub br_uid: Option<String>,
	pub request_id: Option<String>,
	pub site_url: Option<String>,
	pub timeout_secs: Option<u64>,
}

impl ApiConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.account_id.is_some() {
			self.account_id = other.account_id;
		}
		if other.domain_key.is_some() {
			self.domain_key = other.domain_key;
		}
		if other.fields.is_some() {
			self.fields = other.fields;
		}
		if other.br_uid.is_some() {
			self.br_uid = other.br_uid;
		}
		if other.request_id.is_some() {
			self.request_id = other.request_id;
		}
		if other.site_url.is_some() {
			self.site_url = other.site_url;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
	}

	pub fn finalize(self) -> ApiConfig {
		ApiConfig {
			base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			account_id: self.account_id.filter(|s| !s.trim().is_empty()),
			domain_key: self.domain_key.filter(|s| !s.trim().is_empty()),
			fields: self.fields.unwrap_or_else(|| DEFAULT_FIELDS.to_string()),
			br_uid: self.br_uid.unwrap_or_else(|| DEFAULT_BR_UID.to_string()),
			request_id: self
				.request_id
				.unwrap_or_else(|| DEFAULT_REQUEST_ID.to_string()),
			site_url: self.site_url.unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
			timeout_secs: self.timeout_secs.unwrap_or(REQUEST_TIMEOUT.as_secs()),
		}
	}
}

/// Resolved API settings. Credentials stay optional until a search is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
	pub base_url: String,
	pub account_id: Option<String>,
	pub domain_key: Option<String>,
	pub fields: String,
	pub br_uid: String,
	pub request_id: String,
	pub site_url: String,
	pub timeout_secs: u64,
}

impl Default for ApiConfig {
	fn default() -> Self {
		ApiConfigLayer::default().finalize()
	}
}

impl ApiConfig {
	pub fn has_credentials(&self) -> bool {
		self.account_id.is_some() && self.domain_key.is_some()
	}

	/// Credentials for the client, or the first missing setting.
	pub fn credentials(&self) -> Result<Credentials, ConfigError> {
		let account_id = self
			.account_id
			.clone()
			.ok_or_else(|| ConfigError::missing_field("api.account_id (BLOOMSEARCH_ACCOUNT_ID)"))?;
		let domain_key = self
			.domain_key
			.clone()
			.ok_or_else(|| ConfigError::missing_field("api.domain_key (BLOOMSEARCH_DOMAIN_KEY)"))?;
		Ok(Credentials::new(account_id, domain_key))
	}

	pub fn request_settings(&self) -> RequestSettings {
		RequestSettings {
			fields: self.fields.clone(),
			br_uid: self.br_uid.clone(),
			request_id: self.request_id.clone(),
			site_url: self.site_url.clone(),
		}
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_secs)
	}

	pub(crate) fn validate(&self) -> Result<(), ConfigError> {
		if self.base_url.trim().is_empty() {
			return Err(ConfigError::invalid_value("api.base_url", "must not be empty"));
		}
		if self.timeout_secs == 0 {
			return Err(ConfigError::invalid_value(
				"api.timeout_secs",
				"must be at least 1",
			));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = ApiConfig::default();
		assert_eq!(config.base_url, DEFAULT_BASE_URL);
		assert_eq!(config.fields, "pid,title,introduction,url");
		assert_eq!(config.timeout_secs, 10);
		assert!(!config.has_credentials());
	}

	#[test]
	fn test_layer_merge_keeps_unset_fields() {
		let mut base = ApiConfigLayer {
			account_id: Some("6702".to_string()),
			site_url: Some("old.example.com".to_string()),
			..Default::default()
		};
		base.merge(ApiConfigLayer {
			site_url: Some("new.example.com".to_string()),
			..Default::default()
		});
		assert_eq!(base.account_id.as_deref(), Some("6702"));
		assert_eq!(base.site_url.as_deref(), Some("new.example.com"));
	}

	#[test]
	fn test_blank_credentials_are_missing() {
		let config = ApiConfigLayer {
			account_id: Some("  ".to_string()),
			domain_key: Some("example_com".to_string()),
			..Default::default()
		}
		.finalize();
		let err = config.credentials().unwrap_err();
		assert!(err.to_string().contains("api.account_id"));
	}

	#[test]
	fn test_credentials_and_settings() {
		let config = ApiConfigLayer {
			account_id: Some("6702".to_string()),
			domain_key: Some("example_com".to_string()),
			br_uid: Some("uid".to_string()),
			..Default::default()
		}
		.finalize();
		let credentials = config.credentials().unwrap();
		assert_eq!(credentials.account_id, "6702");
		assert_eq!(config.request_settings().br_uid, "uid");
	}

	#[test]
	fn test_validate_rejects_zero_timeout() {
		let config = ApiConfigLayer {
			timeout_secs: Some(0),
			..Default::default()
		}
		.finalize();
		assert!(config.validate().is_err());
	}

	#[test]
	fn test_deserialize_partial() {
		let layer: ApiConfigLayer = toml::from_str("account_id = \"6702\"").unwrap();
		assert_eq!(layer.account_id.as_deref(), Some("6702"));
		assert!(layer.base_url.is_none());
	}
}
