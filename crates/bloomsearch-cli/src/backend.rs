// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The search backend as configured. Missing credentials only surface when a
//! search is attempted.

use async_trait::async_trait;
use bloomsearch_api::{BloomreachClient, BloomreachError};
use bloomsearch_config::ApiConfig;
use bloomsearch_core::{SearchBackend, SearchRequest, SearchResponse};
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
	#[error(transparent)]
	Api(#[from] BloomreachError),

	#[error("search is not configured: {0}")]
	NotConfigured(String),
}

#[derive(Debug)]
pub enum ConfiguredBackend {
	Ready(BloomreachClient),
	Unconfigured { reason: String },
}

impl ConfiguredBackend {
	pub fn from_config(api: &ApiConfig) -> Result<Self, BloomreachError> {
		let credentials = match api.credentials() {
			Ok(credentials) => credentials,
			Err(e) => {
				warn!(error = %e, "Bloomreach credentials missing; searches will fail");
				return Ok(Self::Unconfigured {
					reason: e.to_string(),
				});
			}
		};

		let client = BloomreachClient::with_timeout(credentials, api.timeout())?
			.with_base_url(api.base_url.clone())
			.with_settings(api.request_settings());
		Ok(Self::Ready(client))
	}
}

#[async_trait]
impl SearchBackend for ConfiguredBackend {
	type Error = BackendError;

	async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, BackendError> {
		match self {
			Self::Ready(client) => Ok(client.search(request).await?),
			Self::Unconfigured { reason } => Err(BackendError::NotConfigured(reason.clone())),
		}
	}
}

#[cfg(test)]
mod tests {
	use bloomsearch_config::ApiConfigLayer;
	use bloomsearch_core::{FetchWindow, SearchQuery};

	use super::*;

	#[tokio::test]
	async fn unconfigured_backend_fails_on_search() {
		let backend = ConfiguredBackend::from_config(&ApiConfigLayer::default().finalize()).unwrap();
		assert!(matches!(backend, ConfiguredBackend::Unconfigured { .. }));

		let request = SearchRequest {
			query: SearchQuery::parse("shoes").unwrap(),
			window: FetchWindow { start: 0, rows: 6 },
		};
		let err = backend.search(&request).await.unwrap_err();
		assert!(err.to_string().contains("api.account_id"));
	}

	#[test]
	fn configured_backend_is_ready() {
		let api = ApiConfigLayer {
			account_id: Some("6702".to_string()),
			domain_key: Some("example_com".to_string()),
			..Default::default()
		}
		.finalize();
		let backend = ConfiguredBackend::from_config(&api).unwrap();
		match backend {
			ConfiguredBackend::Ready(client) => assert_eq!(client.base_url(), api.base_url),
			other => panic!("expected a ready backend, got {other:?}"),
		}
	}
}
