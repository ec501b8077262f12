// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The seam between the results view and the remote search API.

use async_trait::async_trait;
use serde::Serialize;

use crate::page::FetchWindow;
use crate::query::SearchQuery;
use crate::response::SearchResponse;

/// One outbound search: the term plus the window to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
	pub query: SearchQuery,
	pub window: FetchWindow,
}

/// A remote keyword-search service.
///
/// Implementations perform exactly one request per call and never retry.
#[async_trait]
pub trait SearchBackend: Send + Sync {
	type Error: std::error::Error + Send + Sync + 'static;

	async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, Self::Error>;
}
