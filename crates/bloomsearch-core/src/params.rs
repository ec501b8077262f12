// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locations and their query-string parameters.
//!
//! [`QueryParams`] follows `URLSearchParams` semantics: decoding accepts both
//! `+` and `%20` for spaces, `get` returns the first value for a key and `set`
//! rewrites in place while keeping unrelated parameters in order.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use url::form_urlencoded;

/// Errors produced when parsing a location string.
#[derive(Debug, Error)]
pub enum ParseLocationError {
	#[error("location is empty")]
	Empty,

	#[error("location must start with '/' or be an absolute URL: {0}")]
	Relative(String),

	#[error("invalid URL: {0}")]
	InvalidUrl(#[from] url::ParseError),
}

/// Ordered multimap of decoded query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
	pairs: Vec<(String, String)>,
}

impl QueryParams {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a raw query string; a leading `?` is ignored.
	pub fn parse(query: &str) -> Self {
		let query = query.strip_prefix('?').unwrap_or(query);
		Self {
			pairs: form_urlencoded::parse(query.as_bytes())
				.into_owned()
				.collect(),
		}
	}

	/// Builder-style [`QueryParams::set`].
	pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
		self.set(key, value);
		self
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self
			.pairs
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	pub fn contains(&self, key: &str) -> bool {
		self.pairs.iter().any(|(k, _)| k == key)
	}

	/// Sets `key` to `value`.
	///
	/// The first occurrence is rewritten in place and later duplicates are
	/// dropped; an absent key is appended.
	pub fn set(&mut self, key: &str, value: impl Into<String>) {
		let value = value.into();
		let mut found = false;
		self.pairs.retain_mut(|(k, v)| {
			if k != key {
				return true;
			}
			if found {
				return false;
			}
			v.clone_from(&value);
			found = true;
			true
		});
		if !found {
			self.pairs.push((key.to_string(), value));
		}
	}

	pub fn remove(&mut self, key: &str) {
		self.pairs.retain(|(k, _)| k != key);
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	/// Serializes with `encodeURIComponent`-style escaping.
	pub fn to_query_string(&self) -> String {
		self
			.pairs
			.iter()
			.map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
			.collect::<Vec<_>>()
			.join("&")
	}
}

impl fmt::Display for QueryParams {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_query_string())
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut params = QueryParams::new();
		for (k, v) in iter {
			params.set(&k.into(), v);
		}
		params
	}
}

/// A path plus query parameters; the application's "URL".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
	path: String,
	params: QueryParams,
}

impl Location {
	pub fn new(path: impl Into<String>) -> Self {
		Self::with_params(path, QueryParams::new())
	}

	pub fn with_params(path: impl Into<String>, params: QueryParams) -> Self {
		Self {
			path: path.into(),
			params,
		}
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn params(&self) -> &QueryParams {
		&self.params
	}

	/// Same path, replaced parameters.
	pub fn replace_params(&self, params: QueryParams) -> Self {
		Self::with_params(self.path.clone(), params)
	}

	/// Parses `/path?query` or a full `scheme://host/path?query` URL.
	///
	/// Fragments are discarded.
	pub fn parse(input: &str) -> Result<Self, ParseLocationError> {
		let input = input.trim();
		if input.is_empty() {
			return Err(ParseLocationError::Empty);
		}

		if !input.starts_with('/') {
			if !input.contains("://") {
				return Err(ParseLocationError::Relative(input.to_string()));
			}
			let url = url::Url::parse(input)?;
			return Ok(Self::with_params(
				url.path(),
				QueryParams::parse(url.query().unwrap_or_default()),
			));
		}

		let without_fragment = input.split_once('#').map_or(input, |(head, _)| head);
		let (path, query) = without_fragment
			.split_once('?')
			.unwrap_or((without_fragment, ""));

		Ok(Self::with_params(path, QueryParams::parse(query)))
	}
}

impl FromStr for Location {
	type Err = ParseLocationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for Location {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.path)?;
		if !self.params.is_empty() {
			write!(f, "?{}", self.params)?;
		}
		Ok(())
	}
}
