// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Search results as returned by a [`SearchBackend`](crate::SearchBackend).

use serde::{Deserialize, Serialize};

use crate::sanitize;

/// A single matching document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultDoc {
	/// Unique within one response.
	pub pid: String,
	pub title: String,
	/// Untrusted HTML.
	pub introduction: String,
	/// Site-relative path of the document.
	pub url: String,
}

impl SearchResultDoc {
	pub fn display_title(&self) -> String {
		sanitize::plain_text(&self.title)
	}

	/// The introduction reduced to plain text.
	pub fn introduction_text(&self) -> String {
		sanitize::html_to_text(&self.introduction)
	}

	/// Absolute "read more" link under `site_base_url`.
	pub fn link(&self, site_base_url: &str) -> String {
		if self.url.starts_with("http://") || self.url.starts_with("https://") {
			return self.url.clone();
		}
		let base = site_base_url.trim_end_matches('/');
		if self.url.starts_with('/') {
			format!("{base}{}", self.url)
		} else {
			format!("{base}/{}", self.url)
		}
	}
}

/// API instruction to send the user somewhere instead of listing results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRedirect {
	pub redirected_url: String,
	pub original_query: Option<String>,
	pub redirected_query: Option<String>,
}

/// One page of results. Replaced wholesale on every fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
	pub num_found: u64,
	pub docs: Vec<SearchResultDoc>,
	pub auto_correct_query: Option<String>,
	pub relaxed_query: Option<String>,
	pub did_you_mean: Vec<String>,
	pub keyword_redirect: Option<KeywordRedirect>,
}

impl SearchResponse {
	/// Redirect target, if the API sent a non-empty one.
	pub fn redirect_target(&self) -> Option<&str> {
		self
			.keyword_redirect
			.as_ref()
			.map(|redirect| redirect.redirected_url.as_str())
			.filter(|url| !url.trim().is_empty())
	}

	/// The query the API actually ran: auto-correction first, then relaxation.
	pub fn corrected_query(&self) -> Option<&str> {
		non_empty(self.auto_correct_query.as_deref()).or_else(|| non_empty(self.relaxed_query.as_deref()))
	}

	/// First "did you mean" suggestion.
	pub fn suggestion(&self) -> Option<&str> {
		non_empty(self.did_you_mean.first().map(String::as_str))
	}
}

fn non_empty(value: Option<&str>) -> Option<&str> {
	value.filter(|v| !v.trim().is_empty())
}
