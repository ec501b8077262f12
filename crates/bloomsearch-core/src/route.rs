// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Routes and the results route's parameter object.

use serde::Serialize;

use crate::page::{FetchWindow, PagePolicy, PageState};
use crate::params::{Location, QueryParams};
use crate::query::SearchQuery;

pub const ENTRY_PATH: &str = "/";
pub const RESULTS_PATH: &str = "/search-results";
pub const QUERY_PARAM: &str = "query";

/// What a location resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
	Entry,
	Results(ResultsParams),
	NotFound(String),
}

impl Route {
	pub fn resolve(location: &Location, policy: &PagePolicy) -> Self {
		match location.path().trim_end_matches('/') {
			"" => Route::Entry,
			path if path == RESULTS_PATH => {
				Route::Results(ResultsParams::from_params(location.params(), policy))
			}
			path => Route::NotFound(path.to_string()),
		}
	}
}

/// Navigable state of the results view, read from and written to the
/// location's query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsParams {
	/// Raw `query` parameter; may be blank.
	pub query: Option<String>,
	pub page: PageState,
}

impl ResultsParams {
	pub fn from_params(params: &QueryParams, policy: &PagePolicy) -> Self {
		Self {
			query: params.get(QUERY_PARAM).map(str::to_string),
			page: policy.derive(params),
		}
	}

	/// The validated query, `None` when absent or blank.
	pub fn search_query(&self) -> Option<SearchQuery> {
		self.query.as_deref().and_then(SearchQuery::parse)
	}

	pub fn fetch_window(&self) -> FetchWindow {
		self.page.fetch_window()
	}

	pub fn write_to(&self, params: &mut QueryParams) {
		match &self.query {
			Some(query) => params.set(QUERY_PARAM, query.as_str()),
			None => params.remove(QUERY_PARAM),
		}
		self.page.write_to(params);
	}

	pub fn to_location(&self) -> Location {
		let mut params = QueryParams::new();
		self.write_to(&mut params);
		Location::with_params(RESULTS_PATH, params)
	}
}

pub fn entry_location() -> Location {
	Location::new(ENTRY_PATH)
}

/// Results location for a query, carrying only the `query` parameter.
pub fn results_location(query: &SearchQuery) -> Location {
	Location::with_params(RESULTS_PATH, QueryParams::new().with(QUERY_PARAM, query.term()))
}

/// Entry-view submit: navigate to the results route, or do nothing for
/// blank input.
pub fn submit_search(input: &str) -> Option<Location> {
	SearchQuery::parse(input).map(|query| results_location(&query))
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn submit_encodes_trimmed_term() {
		let location = submit_search("  red shoes & socks ").unwrap();
		assert_eq!(location.to_string(), "/search-results?query=red%20shoes%20%26%20socks");
	}

	#[test]
	fn submit_ignores_blank_input() {
		assert!(submit_search("").is_none());
		assert!(submit_search("   ").is_none());
	}

	#[test]
	fn resolve_routes() {
		let policy = PagePolicy::default();
		assert_eq!(Route::resolve(&entry_location(), &policy), Route::Entry);

		let location = Location::parse("/search-results/?query=boots&pageNumber=2").unwrap();
		match Route::resolve(&location, &policy) {
			Route::Results(params) => {
				assert_eq!(params.query.as_deref(), Some("boots"));
				assert_eq!(params.page.page_number(), 2);
			}
			other => panic!("expected results route, got {other:?}"),
		}

		let location = Location::parse("/nowhere").unwrap();
		assert_eq!(Route::resolve(&location, &policy), Route::NotFound("/nowhere".to_string()));
	}

	#[test]
	fn blank_query_is_not_a_search_query() {
		let params = QueryParams::new().with(QUERY_PARAM, "   ");
		let results = ResultsParams::from_params(&params, &PagePolicy::default());
		assert_eq!(results.query.as_deref(), Some("   "));
		assert!(results.search_query().is_none());
	}

	#[test]
	fn write_to_keeps_unrelated_params() {
		let mut params = QueryParams::parse("utm=mail&query=a&pageSize=12");
		let results = ResultsParams::from_params(&params, &PagePolicy::default());
		results.write_to(&mut params);
		assert_eq!(params.to_query_string(), "utm=mail&query=a&pageSize=12&pageNumber=1");
	}

	proptest! {
		/// Serializing the results parameters and parsing them back is stable.
		#[test]
		fn results_params_are_idempotent(
			query in proptest::option::of("\\PC{0,20}"),
			number in "[0-9]{0,4}",
			size in "[0-9]{0,4}",
		) {
			let policy = PagePolicy::default();
			let mut raw = QueryParams::new().with("pageNumber", number).with("pageSize", size);
			if let Some(query) = query {
				raw.set(QUERY_PARAM, query);
			}
			let first = ResultsParams::from_params(&raw, &policy);
			let location = Location::parse(&first.to_location().to_string()).unwrap();
			let second = ResultsParams::from_params(location.params(), &policy);
			prop_assert_eq!(second, first);
		}
	}
}
