// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Wire format of the Bloomreach core search response.
//!
//! Field names follow the API (`numFound`, `relaxed.query`, `redirected url`,
//! ...). Camel- and snake-case spellings are accepted as aliases.

use bloomsearch_core::{KeywordRedirect, SearchResponse, SearchResultDoc};
use serde::Deserialize;

use crate::error::BloomreachError;

#[derive(Debug, Deserialize)]
pub struct ApiResponse {
	pub response: ApiResultSet,
	#[serde(default, rename = "autoCorrectQuery", alias = "auto_correct_query")]
	pub auto_correct_query: Option<String>,
	#[serde(
		default,
		rename = "relaxed.query",
		alias = "relaxedQuery",
		alias = "relaxed_query"
	)]
	pub relaxed_query: Option<String>,
	#[serde(default, rename = "did_you_mean", alias = "didYouMean")]
	pub did_you_mean: Option<Vec<String>>,
	#[serde(default, rename = "keywordRedirect", alias = "keyword_redirect")]
	pub keyword_redirect: Option<ApiKeywordRedirect>,
}

#[derive(Debug, Deserialize)]
pub struct ApiResultSet {
	#[serde(rename = "numFound")]
	pub num_found: u64,
	#[serde(default)]
	pub start: u64,
	#[serde(default)]
	pub docs: Option<Vec<ApiDoc>>,
}

#[derive(Debug, Deserialize)]
pub struct ApiDoc {
	#[serde(default)]
	pub pid: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub introduction: String,
	#[serde(default)]
	pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiKeywordRedirect {
	#[serde(default, rename = "redirected url", alias = "redirectedUrl")]
	pub redirected_url: Option<String>,
	#[serde(default, rename = "original query", alias = "originalQuery")]
	pub original_query: Option<String>,
	#[serde(default, rename = "redirected query", alias = "redirectedQuery")]
	pub redirected_query: Option<String>,
}

impl From<ApiDoc> for SearchResultDoc {
	fn from(doc: ApiDoc) -> Self {
		Self {
			pid: doc.pid,
			title: doc.title,
			introduction: doc.introduction,
			url: doc.url,
		}
	}
}

impl From<ApiKeywordRedirect> for KeywordRedirect {
	fn from(redirect: ApiKeywordRedirect) -> Self {
		Self {
			redirected_url: redirect.redirected_url.unwrap_or_default(),
			original_query: redirect.original_query,
			redirected_query: redirect.redirected_query,
		}
	}
}

impl From<ApiResponse> for SearchResponse {
	fn from(api: ApiResponse) -> Self {
		Self {
			num_found: api.response.num_found,
			docs: api
				.response
				.docs
				.unwrap_or_default()
				.into_iter()
				.map(SearchResultDoc::from)
				.collect(),
			auto_correct_query: api.auto_correct_query,
			relaxed_query: api.relaxed_query,
			did_you_mean: api.did_you_mean.unwrap_or_default(),
			keyword_redirect: api.keyword_redirect.map(KeywordRedirect::from),
		}
	}
}

/// Parses a response body into the domain model.
pub fn parse_response(body: &str) -> Result<SearchResponse, BloomreachError> {
	let api: ApiResponse = serde_json::from_str(body)
		.map_err(|e| BloomreachError::InvalidResponse(format!("JSON parse error: {e}")))?;
	Ok(api.into())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_full_response() {
		let body = r#"{
			"response": {
				"numFound": 2,
				"start": 0,
				"docs": [
					{"pid": "a1", "title": "Trail Runner", "introduction": "<p>Light</p>", "url": "/p/a1"},
					{"pid": "b2", "title": "Road Runner", "introduction": "", "url": "/p/b2"}
				]
			},
			"autoCorrectQuery": "runner",
			"did_you_mean": ["running", "runners"],
			"category_map": {"ignored": true}
		}"#;

		let response = parse_response(body).unwrap();
		assert_eq!(response.num_found, 2);
		assert_eq!(response.docs.len(), 2);
		assert_eq!(response.docs[0].pid, "a1");
		assert_eq!(response.auto_correct_query.as_deref(), Some("runner"));
		assert_eq!(response.did_you_mean, vec!["running", "runners"]);
		assert!(response.keyword_redirect.is_none());
	}

	#[test]
	fn parses_dotted_and_spaced_keys() {
		let body = r#"{
			"response": {"numFound": 5, "docs": []},
			"relaxed.query": "red shoe",
			"keywordRedirect": {
				"original query": "returns",
				"redirected query": "returns policy",
				"redirected url": "/help/returns"
			}
		}"#;

		let response = parse_response(body).unwrap();
		assert_eq!(response.relaxed_query.as_deref(), Some("red shoe"));
		let redirect = response.keyword_redirect.unwrap();
		assert_eq!(redirect.redirected_url, "/help/returns");
		assert_eq!(redirect.original_query.as_deref(), Some("returns"));
		assert_eq!(redirect.redirected_query.as_deref(), Some("returns policy"));
	}

	#[test]
	fn accepts_camel_case_redirect() {
		let body = r#"{"response": {"numFound": 1}, "keywordRedirect": {"redirectedUrl": "/x"}}"#;
		let response = parse_response(body).unwrap();
		assert_eq!(response.redirect_target(), Some("/x"));
		assert!(response.docs.is_empty());
	}

	#[test]
	fn null_collections_become_empty() {
		let body = r#"{"response": {"numFound": 0, "docs": null}, "did_you_mean": null}"#;
		let response = parse_response(body).unwrap();
		assert!(response.docs.is_empty());
		assert!(response.did_you_mean.is_empty());
	}

	#[test]
	fn missing_result_set_is_invalid() {
		let err = parse_response(r#"{"did_you_mean": []}"#).unwrap_err();
		assert!(matches!(err, BloomreachError::InvalidResponse(_)));
	}

	#[test]
	fn malformed_body_is_invalid() {
		let err = parse_response("<html>502 Bad Gateway</html>").unwrap_err();
		assert!(matches!(err, BloomreachError::InvalidResponse(_)));
	}
}
