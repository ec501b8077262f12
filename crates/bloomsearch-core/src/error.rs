// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User-facing failures of the results view.

use thiserror::Error;

pub const MISSING_QUERY_MESSAGE: &str = "No search query provided";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch search results. Please try again later.";

/// Terminal failures of a results-view attempt.
///
/// `Display` is the message shown to the user. The underlying cause of a
/// fetch failure is kept in `detail` for logging only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
	/// The location carries no usable `query` parameter.
	#[error("{}", MISSING_QUERY_MESSAGE)]
	MissingQuery,

	/// The request failed or its body could not be parsed.
	#[error("{}", FETCH_FAILED_MESSAGE)]
	NetworkOrParseFailure { detail: String },
}

impl SearchError {
	pub fn fetch_failed(detail: impl Into<String>) -> Self {
		Self::NetworkOrParseFailure {
			detail: detail.into(),
		}
	}

	pub fn user_message(&self) -> &'static str {
		match self {
			SearchError::MissingQuery => MISSING_QUERY_MESSAGE,
			SearchError::NetworkOrParseFailure { .. } => FETCH_FAILED_MESSAGE,
		}
	}

	pub fn detail(&self) -> Option<&str> {
		match self {
			SearchError::MissingQuery => None,
			SearchError::NetworkOrParseFailure { detail } => Some(detail),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_is_the_user_message() {
		assert_eq!(SearchError::MissingQuery.to_string(), MISSING_QUERY_MESSAGE);
		let err = SearchError::fetch_failed("connection refused");
		assert_eq!(err.to_string(), FETCH_FAILED_MESSAGE);
		assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
	}

	#[test]
	fn detail_never_leaks_into_message() {
		let err = SearchError::fetch_failed("502 from upstream");
		assert_eq!(err.detail(), Some("502 from upstream"));
		assert!(!err.to_string().contains("502"));
		assert_eq!(SearchError::MissingQuery.detail(), None);
	}
}
