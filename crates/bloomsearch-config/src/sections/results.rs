// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Results view configuration section.

use bloomsearch_core::{PagePolicy, DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_PAGE_SIZE_OPTIONS: [u32; 4] = [6, 12, 24, 48];
pub const DEFAULT_LINK_BASE_URL: &str = "https://www.example.com";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsConfigLayer {
	pub default_page_size: Option<u32>,
	pub max_page_size: Option<u32>,
	pub page_size_options: Option<Vec<u32>>,
	pub link_base_url: Option<String>,
}

impl ResultsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_page_size.is_some() {
			self.default_page_size = other.default_page_size;
		}
		if other.max_page_size.is_some() {
			self.max_page_size = other.max_page_size;
		}
		if other.page_size_options.is_some() {
			self.page_size_options = other.page_size_options;
		}
		if other.link_base_url.is_some() {
			self.link_base_url = other.link_base_url;
		}
	}

	pub fn finalize(self) -> ResultsConfig {
		ResultsConfig {
			default_page_size: self.default_page_size.unwrap_or(DEFAULT_PAGE_SIZE),
			max_page_size: self.max_page_size.unwrap_or(DEFAULT_MAX_PAGE_SIZE),
			page_size_options: self
				.page_size_options
				.unwrap_or_else(|| DEFAULT_PAGE_SIZE_OPTIONS.to_vec()),
			link_base_url: self
				.link_base_url
				.unwrap_or_else(|| DEFAULT_LINK_BASE_URL.to_string()),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsConfig {
	pub default_page_size: u32,
	pub max_page_size: u32,
	/// Sizes offered by the page-size control, in display order.
	pub page_size_options: Vec<u32>,
	/// Prefix for each document's "Read more" link.
	pub link_base_url: String,
}

impl Default for ResultsConfig {
	fn default() -> Self {
		ResultsConfigLayer::default().finalize()
	}
}

impl ResultsConfig {
	pub fn page_policy(&self) -> Result<PagePolicy, ConfigError> {
		if self.default_page_size == 0 {
			return Err(ConfigError::invalid_value(
				"results.default_page_size",
				"must be at least 1",
			));
		}
		PagePolicy::new(self.default_page_size, self.max_page_size).ok_or_else(|| {
			ConfigError::validation(format!(
				"results.default_page_size ({}) exceeds results.max_page_size ({})",
				self.default_page_size, self.max_page_size
			))
		})
	}

	pub(crate) fn validate(&self) -> Result<(), ConfigError> {
		self.page_policy()?;

		if self.page_size_options.is_empty() {
			return Err(ConfigError::invalid_value(
				"results.page_size_options",
				"must list at least one size",
			));
		}
		if let Some(bad) = self
			.page_size_options
			.iter()
			.find(|&&size| size == 0 || size > self.max_page_size)
		{
			return Err(ConfigError::invalid_value(
				"results.page_size_options",
				format!("{bad} is outside 1..={}", self.max_page_size),
			));
		}
		Ok(())
	}
}
