// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Page state derivation from location parameters.
//!
//! Parsing is total: anything missing, non-numeric, zero or negative falls
//! back to the default, and page sizes above the policy maximum are clamped.
//! The output is already normalized, so deriving from a serialized
//! [`PageState`] returns the same state.

use serde::Serialize;

use crate::params::QueryParams;

pub const PAGE_NUMBER_PARAM: &str = "pageNumber";
pub const PAGE_SIZE_PARAM: &str = "pageSize";

pub const DEFAULT_PAGE_NUMBER: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 6;
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

/// Current page of the results view. Both fields are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageState {
	page_number: u32,
	page_size: u32,
}

impl PageState {
	/// Returns `None` when either value is zero.
	pub fn new(page_number: u32, page_size: u32) -> Option<Self> {
		if page_number == 0 || page_size == 0 {
			return None;
		}
		Some(Self {
			page_number,
			page_size,
		})
	}

	pub fn page_number(&self) -> u32 {
		self.page_number
	}

	pub fn page_size(&self) -> u32 {
		self.page_size
	}

	pub fn fetch_window(&self) -> FetchWindow {
		derive_fetch_window(*self)
	}

	/// Writes `pageNumber` and `pageSize` into `params`.
	pub fn write_to(&self, params: &mut QueryParams) {
		params.set(PAGE_NUMBER_PARAM, self.page_number.to_string());
		params.set(PAGE_SIZE_PARAM, self.page_size.to_string());
	}
}

impl Default for PageState {
	fn default() -> Self {
		Self {
			page_number: DEFAULT_PAGE_NUMBER,
			page_size: DEFAULT_PAGE_SIZE,
		}
	}
}

/// Offset and row count sent to the search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FetchWindow {
	pub start: u64,
	pub rows: u32,
}

/// Defaults and bounds applied while deriving a [`PageState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePolicy {
	default_page_size: u32,
	max_page_size: u32,
}

impl PagePolicy {
	/// Requires `1 <= default_page_size <= max_page_size`.
	pub fn new(default_page_size: u32, max_page_size: u32) -> Option<Self> {
		if default_page_size == 0 || default_page_size > max_page_size {
			return None;
		}
		Some(Self {
			default_page_size,
			max_page_size,
		})
	}

	pub fn default_page_size(&self) -> u32 {
		self.default_page_size
	}

	pub fn max_page_size(&self) -> u32 {
		self.max_page_size
	}

	/// Zero becomes the default, oversized values become the maximum.
	pub fn normalize_page_size(&self, requested: u32) -> u32 {
		match requested {
			0 => self.default_page_size,
			n => n.min(self.max_page_size),
		}
	}

	pub fn derive(&self, params: &QueryParams) -> PageState {
		let page_number =
			parse_positive(params.get(PAGE_NUMBER_PARAM)).unwrap_or(DEFAULT_PAGE_NUMBER);
		let page_size = parse_positive(params.get(PAGE_SIZE_PARAM))
			.map(|size| self.normalize_page_size(size))
			.unwrap_or(self.default_page_size);

		PageState {
			page_number,
			page_size,
		}
	}
}

impl Default for PagePolicy {
	fn default() -> Self {
		Self {
			default_page_size: DEFAULT_PAGE_SIZE,
			max_page_size: DEFAULT_MAX_PAGE_SIZE,
		}
	}
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
	raw?.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// Derives the page state with the default policy.
pub fn derive_page_state(params: &QueryParams) -> PageState {
	PagePolicy::default().derive(params)
}

pub fn derive_fetch_window(page: PageState) -> FetchWindow {
	FetchWindow {
		start: u64::from(page.page_number - 1) * u64::from(page.page_size),
		rows: page.page_size,
	}
}

/// `ceil(num_found / page_size)`; zero when `page_size` is zero.
pub fn total_pages(num_found: u64, page_size: u32) -> u64 {
	if page_size == 0 {
		return 0;
	}
	num_found.div_ceil(u64::from(page_size))
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn params(pairs: &[(&str, &str)]) -> QueryParams {
		pairs.iter().copied().collect()
	}

	#[test]
	fn empty_params_use_defaults() {
		let page = derive_page_state(&QueryParams::new());
		assert_eq!(page, PageState::new(1, 6).unwrap());
		assert_eq!(derive_fetch_window(page), FetchWindow { start: 0, rows: 6 });
	}

	#[test]
	fn explicit_params_drive_window() {
		let page = derive_page_state(&params(&[("pageNumber", "3"), ("pageSize", "10")]));
		assert_eq!(derive_fetch_window(page), FetchWindow { start: 20, rows: 10 });
	}

	#[test]
	fn invalid_values_fall_back_to_defaults() {
		for (number, size) in [("abc", "xyz"), ("0", "0"), ("-2", "-5"), ("", " "), ("1.5", "6e2")] {
			let page = derive_page_state(&params(&[("pageNumber", number), ("pageSize", size)]));
			assert_eq!(page, PageState::default(), "pageNumber={number} pageSize={size}");
		}
	}

	#[test]
	fn surrounding_whitespace_is_tolerated() {
		let page = derive_page_state(&params(&[("pageNumber", " 4 "), ("pageSize", "12\t")]));
		assert_eq!(page, PageState::new(4, 12).unwrap());
	}

	#[test]
	fn oversized_page_size_is_clamped() {
		let page = derive_page_state(&params(&[("pageSize", "5000")]));
		assert_eq!(page.page_size(), DEFAULT_MAX_PAGE_SIZE);
	}

	#[test]
	fn page_number_has_no_upper_bound() {
		let page = derive_page_state(&params(&[("pageNumber", "4294967295")]));
		assert_eq!(page.page_number(), u32::MAX);
		let window = page.fetch_window();
		assert_eq!(window.start, u64::from(u32::MAX - 1) * u64::from(DEFAULT_PAGE_SIZE));
	}

	#[test]
	fn overflowing_page_number_falls_back() {
		let page = derive_page_state(&params(&[("pageNumber", "99999999999")]));
		assert_eq!(page.page_number(), DEFAULT_PAGE_NUMBER);
	}

	#[test]
	fn custom_policy_applies_its_defaults() {
		let policy = PagePolicy::new(24, 48).unwrap();
		assert_eq!(policy.derive(&QueryParams::new()).page_size(), 24);
		assert_eq!(policy.derive(&params(&[("pageSize", "96")])).page_size(), 48);
	}

	#[test]
	fn policy_rejects_inconsistent_bounds() {
		assert!(PagePolicy::new(0, 10).is_none());
		assert!(PagePolicy::new(20, 10).is_none());
		assert!(PagePolicy::new(10, 10).is_some());
	}

	#[test]
	fn page_state_rejects_zero() {
		assert!(PageState::new(0, 6).is_none());
		assert!(PageState::new(1, 0).is_none());
	}

	#[test]
	fn total_pages_rounds_up() {
		assert_eq!(total_pages(0, 6), 0);
		assert_eq!(total_pages(1, 6), 1);
		assert_eq!(total_pages(6, 6), 1);
		assert_eq!(total_pages(7, 6), 2);
		assert_eq!(total_pages(100, 0), 0);
	}

	proptest! {
		/// Any parameter mapping yields a valid page state.
		#[test]
		fn derivation_is_total(number in "\\PC{0,12}", size in "\\PC{0,12}") {
			let page = derive_page_state(&params(&[("pageNumber", number.as_str()), ("pageSize", size.as_str())]));
			prop_assert!(page.page_number() >= 1);
			prop_assert!(page.page_size() >= 1);
			prop_assert!(page.page_size() <= DEFAULT_MAX_PAGE_SIZE);
		}

		/// start = (pageNumber - 1) * pageSize for every valid state.
		#[test]
		fn window_start_matches_formula(number in 1u32.., size in 1u32..) {
			let page = PageState::new(number, size).unwrap();
			let window = derive_fetch_window(page);
			prop_assert_eq!(window.start, (u64::from(number) - 1) * u64::from(size));
			prop_assert_eq!(window.rows, size);
		}

		/// Re-deriving from serialized parameters yields the same state.
		#[test]
		fn derivation_is_idempotent(number in "\\PC{0,12}", size in "\\PC{0,12}") {
			let page = derive_page_state(&params(&[("pageNumber", number.as_str()), ("pageSize", size.as_str())]));
			let mut serialized = QueryParams::new();
			page.write_to(&mut serialized);
			let reparsed = QueryParams::parse(&serialized.to_query_string());
			prop_assert_eq!(derive_page_state(&reparsed), page);
		}
	}
}
