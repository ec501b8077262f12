// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;

use serde::Serialize;

/// A user-entered search term: trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SearchQuery {
	term: String,
}

impl SearchQuery {
	/// Returns `None` for empty or whitespace-only input.
	pub fn parse(input: &str) -> Option<Self> {
		let term = input.trim();
		if term.is_empty() {
			return None;
		}
		Some(Self {
			term: term.to_string(),
		})
	}

	pub fn term(&self) -> &str {
		&self.term
	}
}

impl fmt::Display for SearchQuery {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.term)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn trims_input() {
		let query = SearchQuery::parse("  running shoes \t").unwrap();
		assert_eq!(query.term(), "running shoes");
	}

	#[test]
	fn rejects_blank_input() {
		assert!(SearchQuery::parse("").is_none());
		assert!(SearchQuery::parse("   \n\t").is_none());
	}
}
