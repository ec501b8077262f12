// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bloomreach API client implementation.

use std::time::Duration;

use async_trait::async_trait;
use bloomsearch_core::{SearchBackend, SearchRequest, SearchResponse};
use reqwest::Client;
use tracing::{debug, error, instrument, trace};

use crate::error::BloomreachError;
use crate::types::parse_response;

pub const DEFAULT_BASE_URL: &str = "https://staging-core.dxpapi.com/api/v1/core/";
pub const DEFAULT_FIELDS: &str = "pid,title,introduction,url";
pub const DEFAULT_BR_UID: &str = "1234567890";
pub const DEFAULT_REQUEST_ID: &str = "123456";
pub const DEFAULT_SITE_URL: &str = "www.example.com";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Account credentials injected into every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
	pub account_id: String,
	pub domain_key: String,
}

impl Credentials {
	pub fn new(account_id: impl Into<String>, domain_key: impl Into<String>) -> Self {
		Self {
			account_id: account_id.into(),
			domain_key: domain_key.into(),
		}
	}
}

/// Fixed request parameters that are not part of the search itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSettings {
	/// `fl`: fields returned per document.
	pub fields: String,
	/// `_br_uid_2`: visitor cookie value.
	pub br_uid: String,
	pub request_id: String,
	/// `url`: the page the search is attributed to.
	pub site_url: String,
}

impl Default for RequestSettings {
	fn default() -> Self {
		Self {
			fields: DEFAULT_FIELDS.to_string(),
			br_uid: DEFAULT_BR_UID.to_string(),
			request_id: DEFAULT_REQUEST_ID.to_string(),
			site_url: DEFAULT_SITE_URL.to_string(),
		}
	}
}

/// Client for the Bloomreach core search API.
#[derive(Debug, Clone)]
pub struct BloomreachClient {
	http_client: Client,
	credentials: Credentials,
	base_url: String,
	settings: RequestSettings,
}

impl BloomreachClient {
	/// Creates a new client with the default timeout.
	pub fn new(credentials: Credentials) -> Result<Self, BloomreachError> {
		Self::with_timeout(credentials, REQUEST_TIMEOUT)
	}

	pub fn with_timeout(
		credentials: Credentials,
		timeout: Duration,
	) -> Result<Self, BloomreachError> {
		let http_client = bloomsearch_common_http::new_client_with_timeout(timeout)?;

		Ok(Self {
			http_client,
			credentials,
			base_url: DEFAULT_BASE_URL.to_string(),
			settings: RequestSettings::default(),
		})
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn with_settings(mut self, settings: RequestSettings) -> Self {
		self.settings = settings;
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Query parameters for `request`, in the order the API documents them.
	pub fn query_pairs(&self, request: &SearchRequest) -> Vec<(&'static str, String)> {
		vec![
			("fl", self.settings.fields.clone()),
			("_br_uid_2", self.settings.br_uid.clone()),
			("search_type", "keyword".to_string()),
			("start", request.window.start.to_string()),
			("rows", request.window.rows.to_string()),
			("request_id", self.settings.request_id.clone()),
			("account_id", self.credentials.account_id.clone()),
			("domain_key", self.credentials.domain_key.clone()),
			("request_type", "search".to_string()),
			("url", self.settings.site_url.clone()),
			("q", request.query.term().to_string()),
		]
	}

	/// Full request URL for `request`.
	///
	/// Values are escaped like `encodeURIComponent`; the commas separating the
	/// `fl` field list stay literal.
	pub fn request_url(&self, request: &SearchRequest) -> String {
		let query = self
			.query_pairs(request)
			.iter()
			.map(|(key, value)| format!("{key}={}", encode_value(key, value)))
			.collect::<Vec<_>>()
			.join("&");
		let separator = if self.base_url.contains('?') { '&' } else { '?' };
		format!("{}{separator}{query}", self.base_url)
	}

	/// Performs one keyword search. Never retries.
	#[instrument(
		skip(self, request),
		fields(query = %request.query, start = request.window.start, rows = request.window.rows)
	)]
	pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, BloomreachError> {
		debug!(url = %self.base_url, "Sending search request to Bloomreach");

		let response = self
			.http_client
			.get(self.request_url(request))
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return BloomreachError::Timeout;
				}
				error!(error = %e, "Network error during Bloomreach request");
				BloomreachError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from Bloomreach");

		if !status.is_success() {
			let status_code = status.as_u16();
			let body = response.text().await.unwrap_or_default();

			if status_code == 401 || status_code == 403 {
				error!(status = status_code, "Unauthorized request");
				return Err(BloomreachError::Unauthorized);
			}

			if status_code == 429 {
				error!(status = status_code, "Rate limit exceeded");
				return Err(BloomreachError::RateLimited);
			}

			error!(status = status_code, body = %body, "Bloomreach API error");
			return Err(BloomreachError::ApiError {
				status: status_code,
				message: body,
			});
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			BloomreachError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		let search_response = parse_response(&body).map_err(|e| {
			error!(error = %e, "Failed to parse Bloomreach response");
			e
		})?;

		debug!(
			num_found = search_response.num_found,
			doc_count = search_response.docs.len(),
			"Search completed successfully"
		);

		Ok(search_response)
	}
}

fn encode_value(key: &str, value: &str) -> String {
	if key == "fl" {
		return value
			.split(',')
			.map(|field| urlencoding::encode(field).into_owned())
			.collect::<Vec<_>>()
			.join(",");
	}
	urlencoding::encode(value).into_owned()
}

#[async_trait]
impl SearchBackend for BloomreachClient {
	type Error = BloomreachError;

	async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, BloomreachError> {
		BloomreachClient::search(self, request).await
	}
}

#[cfg(test)]
mod tests {
	use bloomsearch_core::{FetchWindow, SearchQuery};

	use super::*;

	fn client() -> BloomreachClient {
		BloomreachClient::new(Credentials::new("6702", "example_com")).unwrap()
	}

	#[test]
	fn test_client_creation() {
		let client = client();
		assert_eq!(client.credentials.account_id, "6702");
		assert_eq!(client.base_url(), DEFAULT_BASE_URL);
		assert_eq!(client.settings, RequestSettings::default());
	}

	#[test]
	fn test_with_base_url() {
		let client = client().with_base_url("https://core.dxpapi.com/api/v1/core/");
		assert_eq!(client.base_url(), "https://core.dxpapi.com/api/v1/core/");
	}

	#[test]
	fn test_query_pairs_order_and_values() {
		let request = SearchRequest {
			query: SearchQuery::parse(" red shoes ").unwrap(),
			window: FetchWindow { start: 12, rows: 6 },
		};
		let pairs = client().query_pairs(&request);
		let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
		assert_eq!(
			keys,
			vec![
				"fl",
				"_br_uid_2",
				"search_type",
				"start",
				"rows",
				"request_id",
				"account_id",
				"domain_key",
				"request_type",
				"url",
				"q"
			]
		);
		let value = |key: &str| {
			pairs
				.iter()
				.find(|(k, _)| *k == key)
				.map(|(_, v)| v.as_str())
				.unwrap()
		};
		assert_eq!(value("fl"), DEFAULT_FIELDS);
		assert_eq!(value("search_type"), "keyword");
		assert_eq!(value("request_type"), "search");
		assert_eq!(value("start"), "12");
		assert_eq!(value("rows"), "6");
		assert_eq!(value("domain_key"), "example_com");
		assert_eq!(value("q"), "red shoes");
	}

	#[test]
	fn test_request_url_escapes_like_encode_uri_component() {
		let request = SearchRequest {
			query: SearchQuery::parse("red shoes & socks").unwrap(),
			window: FetchWindow { start: 0, rows: 6 },
		};
		let url = client().request_url(&request);
		assert!(url.starts_with(DEFAULT_BASE_URL));
		assert!(url.contains("?fl=pid,title,introduction,url&_br_uid_2=1234567890&"));
		assert!(url.ends_with("&q=red%20shoes%20%26%20socks"));
	}

	#[test]
	fn test_custom_settings_flow_into_pairs() {
		let settings = RequestSettings {
			site_url: "shop.example.org".to_string(),
			..Default::default()
		};
		let request = SearchRequest {
			query: SearchQuery::parse("hat").unwrap(),
			window: FetchWindow { start: 0, rows: 6 },
		};
		let pairs = client().with_settings(settings).query_pairs(&request);
		assert!(pairs.contains(&("url", "shop.example.org".to_string())));
	}
}
