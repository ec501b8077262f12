// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core model for bloomsearch.
//!
//! The results view keeps all of its navigable state in the location's query
//! string. This crate provides:
//! - [`Location`] and [`QueryParams`]: the "URL" as an explicit value
//! - [`PagePolicy`], [`PageState`], [`FetchWindow`]: pagination derivation
//! - [`ResultsController`]: the results view state machine, guarded by
//!   request generations so only the latest fetch commits
//! - [`SearchBackend`]: the seam to the remote search API
//! - [`sanitize`]: plain-text rendering of untrusted API markup

pub mod backend;
pub mod controller;
pub mod error;
pub mod page;
pub mod params;
pub mod query;
pub mod response;
pub mod route;
pub mod sanitize;

pub use backend::{SearchBackend, SearchRequest};
pub use controller::{
	classify, FetchCompletion, FetchTicket, LoadedResults, Pagination, Phase, ResultsController,
	ViewState,
};
pub use error::{SearchError, FETCH_FAILED_MESSAGE, MISSING_QUERY_MESSAGE};
pub use page::{
	derive_fetch_window, derive_page_state, total_pages, FetchWindow, PagePolicy, PageState,
	DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, PAGE_NUMBER_PARAM,
	PAGE_SIZE_PARAM,
};
pub use params::{Location, ParseLocationError, QueryParams};
pub use query::SearchQuery;
pub use response::{KeywordRedirect, SearchResponse, SearchResultDoc};
pub use route::{
	entry_location, results_location, submit_search, ResultsParams, Route, ENTRY_PATH, QUERY_PARAM,
	RESULTS_PATH,
};
