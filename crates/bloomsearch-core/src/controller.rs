// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Results view state machine.
//!
//! The controller re-derives its parameters from the location on every
//! navigation and starts a new request generation whenever the effective
//! `(query, start, rows)` triple changes. Superseded requests are not
//! cancelled; their results are discarded by the generation check so only the
//! latest request commits.

use std::fmt;

use tracing::{debug, error, warn};

use crate::backend::{SearchBackend, SearchRequest};
use crate::error::SearchError;
use crate::page::{
	total_pages, FetchWindow, PagePolicy, PageState, DEFAULT_PAGE_NUMBER, PAGE_NUMBER_PARAM,
	PAGE_SIZE_PARAM,
};
use crate::params::{Location, QueryParams};
use crate::query::SearchQuery;
use crate::response::{KeywordRedirect, SearchResponse};
use crate::route::{results_location, ResultsParams};

/// Discriminant of [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	Idle,
	Loading,
	Loaded,
	Empty,
	Redirected,
	Errored,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
	Idle,
	Loading {
		query: String,
	},
	Loaded(LoadedResults),
	Empty {
		query: String,
	},
	Redirected {
		query: String,
		redirect: KeywordRedirect,
	},
	Errored(SearchError),
}

impl ViewState {
	pub fn phase(&self) -> Phase {
		match self {
			ViewState::Idle => Phase::Idle,
			ViewState::Loading { .. } => Phase::Loading,
			ViewState::Loaded(_) => Phase::Loaded,
			ViewState::Empty { .. } => Phase::Empty,
			ViewState::Redirected { .. } => Phase::Redirected,
			ViewState::Errored(_) => Phase::Errored,
		}
	}
}

/// Page position within the latest committed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
	pub page_number: u32,
	pub page_size: u32,
	pub total_pages: u64,
}

impl Pagination {
	pub fn new(page: PageState, num_found: u64) -> Self {
		Self {
			page_number: page.page_number(),
			page_size: page.page_size(),
			total_pages: total_pages(num_found, page.page_size()),
		}
	}

	/// Whether a page-change control targeting `page` is enabled.
	pub fn can_go_to(&self, page: u32) -> bool {
		page >= 1 && u64::from(page) <= self.total_pages
	}

	pub fn has_previous(&self) -> bool {
		self.page_number > 1 && self.can_go_to(self.page_number - 1)
	}

	pub fn has_next(&self) -> bool {
		self
			.page_number
			.checked_add(1)
			.is_some_and(|next| self.can_go_to(next))
	}

	/// The location points past the last page (e.g. a stale bookmark).
	pub fn is_out_of_range(&self) -> bool {
		u64::from(self.page_number) > self.total_pages
	}

	pub fn last_page(&self) -> Option<u32> {
		if self.total_pages == 0 {
			return None;
		}
		Some(u32::try_from(self.total_pages).unwrap_or(u32::MAX))
	}

	pub fn label(&self) -> String {
		format!("Page {} of {}", self.page_number, self.total_pages)
	}
}

/// A committed, non-empty, non-redirect response.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedResults {
	pub query: String,
	pub page: PageState,
	pub response: SearchResponse,
	pub pagination: Pagination,
}

impl LoadedResults {
	pub fn title(&self) -> String {
		match self.response.corrected_query() {
			Some(corrected) => format!(
				"No results for \"{}\" - searched for \"{}\"",
				self.query, corrected
			),
			None => format!("Search Results for \"{}\"", self.query),
		}
	}

	pub fn count_label(&self) -> String {
		format!("{} item(s) found", self.response.num_found)
	}

	pub fn suggestion(&self) -> Option<&str> {
		self.response.suggestion()
	}

	/// Where the "did you mean" link navigates.
	pub fn suggestion_location(&self) -> Option<Location> {
		self
			.suggestion()
			.and_then(SearchQuery::parse)
			.map(|query| results_location(&query))
	}
}

/// Maps a committed response onto a view state.
///
/// The zero-results check runs before the redirect check.
pub fn classify(query: String, page: PageState, response: SearchResponse) -> ViewState {
	if response.num_found == 0 {
		return ViewState::Empty { query };
	}

	if response.redirect_target().is_some() {
		if let Some(redirect) = response.keyword_redirect {
			return ViewState::Redirected { query, redirect };
		}
	}

	ViewState::Loaded(LoadedResults {
		pagination: Pagination::new(page, response.num_found),
		query,
		page,
		response,
	})
}

/// An issued request, tagged with its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
	pub generation: u64,
	pub request: SearchRequest,
}

impl FetchTicket {
	/// Performs the request; the outcome still has to be applied to the
	/// controller that issued the ticket.
	pub async fn execute<B>(self, backend: &B) -> FetchCompletion
	where
		B: SearchBackend + ?Sized,
	{
		let result = backend
			.search(&self.request)
			.await
			.map_err(|e| e.to_string());
		FetchCompletion {
			generation: self.generation,
			result,
		}
	}
}

/// Outcome of a [`FetchTicket`].
#[derive(Debug, Clone)]
pub struct FetchCompletion {
	pub generation: u64,
	pub result: Result<SearchResponse, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FetchKey {
	query: Option<SearchQuery>,
	window: FetchWindow,
}

impl FetchKey {
	fn of(params: &ResultsParams) -> Self {
		Self {
			query: params.search_query(),
			window: params.fetch_window(),
		}
	}
}

#[derive(Debug)]
pub struct ResultsController {
	policy: PagePolicy,
	state: ViewState,
	params: Option<ResultsParams>,
	key: Option<FetchKey>,
	generation: u64,
}

impl ResultsController {
	pub fn new(policy: PagePolicy) -> Self {
		Self {
			policy,
			state: ViewState::Idle,
			params: None,
			key: None,
			generation: 0,
		}
	}

	pub fn policy(&self) -> &PagePolicy {
		&self.policy
	}

	pub fn state(&self) -> &ViewState {
		&self.state
	}

	pub fn phase(&self) -> Phase {
		self.state.phase()
	}

	/// Latest issued generation.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Parameters derived from the last navigation.
	pub fn params(&self) -> Option<&ResultsParams> {
		self.params.as_ref()
	}

	/// Applies a location change.
	///
	/// Returns a ticket when a request must be sent. An unchanged
	/// `(query, start, rows)` triple issues nothing.
	pub fn navigate(&mut self, params: &QueryParams) -> Option<FetchTicket> {
		let results = ResultsParams::from_params(params, &self.policy);
		let key = FetchKey::of(&results);

		if self.phase() != Phase::Idle && self.key.as_ref() == Some(&key) {
			debug!(
				generation = self.generation,
				"results parameters unchanged, no new request"
			);
			self.params = Some(results);
			return None;
		}

		self.start(results, key)
	}

	/// Re-runs the current parameters as if the view had been remounted.
	pub fn reload(&mut self) -> Option<FetchTicket> {
		let results = self.params.clone()?;
		let key = FetchKey::of(&results);
		self.start(results, key)
	}

	/// Leaves the results view; any in-flight result is discarded.
	pub fn reset(&mut self) {
		self.generation += 1;
		self.state = ViewState::Idle;
		self.params = None;
		self.key = None;
	}

	fn start(&mut self, results: ResultsParams, key: FetchKey) -> Option<FetchTicket> {
		self.generation += 1;
		self.params = Some(results);
		self.key = Some(key.clone());

		let Some(query) = key.query else {
			debug!(generation = self.generation, "no search query in location");
			self.state = ViewState::Errored(SearchError::MissingQuery);
			return None;
		};

		debug!(
			generation = self.generation,
			query = %query,
			start = key.window.start,
			rows = key.window.rows,
			"issuing search request"
		);
		self.state = ViewState::Loading {
			query: query.term().to_string(),
		};

		Some(FetchTicket {
			generation: self.generation,
			request: SearchRequest {
				query,
				window: key.window,
			},
		})
	}

	/// Commits a result if it belongs to the latest generation.
	///
	/// Returns `false` when the result was stale and dropped.
	pub fn resolve<E: fmt::Display>(
		&mut self,
		generation: u64,
		result: Result<SearchResponse, E>,
	) -> bool {
		if generation != self.generation {
			warn!(
				generation,
				current = self.generation,
				"dropping stale search result"
			);
			return false;
		}

		let ViewState::Loading { query } = &self.state else {
			warn!(generation, phase = ?self.phase(), "search result arrived outside of loading");
			return false;
		};
		let query = query.clone();
		let page = self
			.params
			.as_ref()
			.map(|params| params.page)
			.unwrap_or_default();

		self.state = match result {
			Ok(response) => classify(query, page, response),
			Err(err) => {
				error!(generation, error = %err, "search request failed");
				ViewState::Errored(SearchError::fetch_failed(err.to_string()))
			}
		};
		debug!(generation, phase = ?self.phase(), "search result committed");
		true
	}

	pub fn apply(&mut self, completion: FetchCompletion) -> bool {
		self.resolve(completion.generation, completion.result)
	}

	/// Pagination of the loaded response, if any.
	pub fn pagination(&self) -> Option<Pagination> {
		match &self.state {
			ViewState::Loaded(loaded) => Some(loaded.pagination),
			_ => None,
		}
	}

	/// New location parameters for a page change, or `None` when the control
	/// is disabled. `pageSize` is left untouched.
	pub fn page_change(&self, params: &QueryParams, new_page: u32) -> Option<QueryParams> {
		let pagination = self.pagination()?;
		if !pagination.can_go_to(new_page) {
			debug!(
				new_page,
				total_pages = pagination.total_pages,
				"page change disabled"
			);
			return None;
		}

		let mut next = params.clone();
		next.set(PAGE_NUMBER_PARAM, new_page.to_string());
		Some(next)
	}

	/// New location parameters for a page size change; always back to page 1.
	pub fn page_size_change(&self, params: &QueryParams, new_size: u32) -> QueryParams {
		let mut next = params.clone();
		next.set(
			PAGE_SIZE_PARAM,
			self.policy.normalize_page_size(new_size).to_string(),
		);
		next.set(PAGE_NUMBER_PARAM, DEFAULT_PAGE_NUMBER.to_string());
		next
	}
}

impl Default for ResultsController {
	fn default() -> Self {
		Self::new(PagePolicy::default())
	}
}
