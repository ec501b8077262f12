// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! One-shot rendering of the results view to stdout.

use std::fmt::Write as _;

use bloomsearch_core::sanitize::plain_text;
use bloomsearch_core::{Location, ResultsController, ViewState};
use serde::Serialize;

/// Plain-text results view. Navigation targets are printed as locations that
/// can be passed back to `bloomsearch open`.
pub fn render_text(
	controller: &ResultsController,
	location: &Location,
	link_base_url: &str,
) -> String {
	let mut out = String::new();

	match controller.state() {
		ViewState::Idle => {}
		ViewState::Loading { query } => {
			let _ = writeln!(out, "Loading results for \"{}\"...", plain_text(query));
		}
		ViewState::Errored(err) => {
			let _ = writeln!(out, "{}", err.user_message());
		}
		ViewState::Empty { query } => {
			let _ = writeln!(out, "No results found for \"{}\"", plain_text(query));
			let _ = writeln!(out, "Try searching for something else!");
		}
		ViewState::Redirected { query, redirect } => {
			let _ = writeln!(out, "Redirect found for \"{}\"!", plain_text(query));
			let _ = writeln!(
				out,
				"If this were a real application, you would be redirected to {}",
				plain_text(&redirect.redirected_url)
			);
		}
		ViewState::Loaded(loaded) => {
			let pagination = loaded.pagination;
			let _ = writeln!(out, "{}", plain_text(&loaded.title()));
			if let (Some(suggestion), Some(target)) =
				(loaded.suggestion(), loaded.suggestion_location())
			{
				let _ = writeln!(out, "Did you mean: {} ({target})", plain_text(suggestion));
			}
			let _ = writeln!(out, "{}", loaded.count_label());
			let _ = writeln!(
				out,
				"{} (page size {})",
				pagination.label(),
				pagination.page_size
			);

			if pagination.is_out_of_range() {
				if let Some(target) = pagination
					.last_page()
					.and_then(|last| page_location(controller, location, last))
				{
					let _ = writeln!(
						out,
						"Page {} is past the last page. Last page: {target}",
						pagination.page_number
					);
				}
			}

			let first_rank = u64::from(pagination.page_number.saturating_sub(1))
				* u64::from(pagination.page_size);
			for (i, doc) in loaded.response.docs.iter().enumerate() {
				let _ = writeln!(out);
				let _ = writeln!(out, "{}. {}", first_rank + i as u64 + 1, doc.display_title());
				let intro = doc.introduction_text();
				if !intro.is_empty() {
					let _ = writeln!(out, "   {intro}");
				}
				let _ = writeln!(out, "   Read more: {}", plain_text(&doc.link(link_base_url)));
			}

			let previous = pagination
				.has_previous()
				.then(|| page_location(controller, location, pagination.page_number - 1))
				.flatten();
			let next = pagination
				.has_next()
				.then(|| page_location(controller, location, pagination.page_number + 1))
				.flatten();
			if previous.is_some() || next.is_some() {
				let _ = writeln!(out);
			}
			if let Some(previous) = previous {
				let _ = writeln!(out, "Previous: {previous}");
			}
			if let Some(next) = next {
				let _ = writeln!(out, "Next: {next}");
			}
		}
	}

	out
}

fn page_location(
	controller: &ResultsController,
	location: &Location,
	page: u32,
) -> Option<Location> {
	controller
		.page_change(location.params(), page)
		.map(|params| location.replace_params(params))
}

#[derive(Debug, Serialize)]
pub struct JsonResults {
	pub location: String,
	pub phase: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub query: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub num_found: Option<u64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub page_number: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub page_size: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub total_pages: Option<u64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub suggestion: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub redirect_url: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	pub docs: Vec<JsonDoc>,
}

#[derive(Debug, Serialize)]
pub struct JsonDoc {
	pub pid: String,
	pub title: String,
	pub introduction: String,
	pub link: String,
}

/// Machine-readable results view. Document text is already reduced to plain
/// text.
pub fn render_json(
	controller: &ResultsController,
	location: &Location,
	link_base_url: &str,
) -> serde_json::Result<String> {
	let mut json = JsonResults {
		location: location.to_string(),
		phase: format!("{:?}", controller.phase()).to_lowercase(),
		query: controller
			.params()
			.and_then(|p| p.search_query())
			.map(|q| q.term().to_string()),
		title: None,
		num_found: None,
		page_number: None,
		page_size: None,
		total_pages: None,
		suggestion: None,
		redirect_url: None,
		error: None,
		docs: Vec::new(),
	};

	match controller.state() {
		ViewState::Errored(err) => json.error = Some(err.user_message().to_string()),
		ViewState::Empty { .. } => json.num_found = Some(0),
		ViewState::Redirected { redirect, .. } => {
			json.redirect_url = Some(redirect.redirected_url.clone());
		}
		ViewState::Loaded(loaded) => {
			json.title = Some(loaded.title());
			json.num_found = Some(loaded.response.num_found);
			json.page_number = Some(loaded.pagination.page_number);
			json.page_size = Some(loaded.pagination.page_size);
			json.total_pages = Some(loaded.pagination.total_pages);
			json.suggestion = loaded.suggestion().map(str::to_string);
			json.docs = loaded
				.response
				.docs
				.iter()
				.map(|doc| JsonDoc {
					pid: doc.pid.clone(),
					title: doc.display_title(),
					introduction: doc.introduction_text(),
					link: doc.link(link_base_url),
				})
				.collect();
		}
		ViewState::Idle | ViewState::Loading { .. } => {}
	}

	serde_json::to_string_pretty(&json)
}

#[cfg(test)]
mod tests {
	use bloomsearch_core::{PagePolicy, SearchResponse, SearchResultDoc};

	use super::*;

	fn loaded(location: &str, num_found: u64) -> (ResultsController, Location) {
		let location = Location::parse(location).unwrap();
		let mut controller = ResultsController::new(PagePolicy::default());
		let ticket = controller.navigate(location.params()).unwrap();
		let response = SearchResponse {
			num_found,
			docs: vec![SearchResultDoc {
				pid: "p1".to_string(),
				title: "Trail <b>Runner</b>".to_string(),
				introduction: "<p>Light</p>".to_string(),
				url: "/p/1".to_string(),
			}],
			auto_correct_query: Some("runner".to_string()),
			did_you_mean: vec!["runners".to_string()],
			..Default::default()
		};
		assert!(controller.resolve::<String>(ticket.generation, Ok(response)));
		(controller, location)
	}

	#[test]
	fn text_view_lists_results_and_navigation() {
		let (controller, location) = loaded("/search-results?query=runr&pageNumber=2", 14);
		let text = render_text(&controller, &location, "https://www.example.com");

		assert!(text.starts_with("No results for \"runr\" - searched for \"runner\"\n"));
		assert!(text.contains("Did you mean: runners (/search-results?query=runners)\n"));
		assert!(text.contains("14 item(s) found\n"));
		assert!(text.contains("Page 2 of 3 (page size 6)\n"));
		assert!(text.contains("7. Trail <b>Runner</b>\n"));
		assert!(text.contains("   Read more: https://www.example.com/p/1\n"));
		assert!(text.contains("Previous: /search-results?query=runr&pageNumber=1\n"));
		assert!(text.contains("Next: /search-results?query=runr&pageNumber=3\n"));
	}

	#[test]
	fn text_view_offers_last_page_when_out_of_range() {
		let (controller, location) = loaded("/search-results?query=runr&pageNumber=7", 14);
		let text = render_text(&controller, &location, "https://www.example.com");
		assert!(text.contains(
			"Page 7 is past the last page. Last page: /search-results?query=runr&pageNumber=3"
		));
		assert!(!text.contains("Next:"));
	}

	#[test]
	fn text_view_missing_query() {
		let location = Location::parse("/search-results?pageNumber=2").unwrap();
		let mut controller = ResultsController::default();
		assert!(controller.navigate(location.params()).is_none());
		assert_eq!(
			render_text(&controller, &location, "https://www.example.com"),
			"No search query provided\n"
		);
	}

	#[test]
	fn json_view_carries_pagination() {
		let (controller, location) = loaded("/search-results?query=runr", 14);
		let json = render_json(&controller, &location, "https://www.example.com").unwrap();
		let value: serde_json::Value = serde_json::from_str(&json).unwrap();
		assert_eq!(value["phase"], "loaded");
		assert_eq!(value["query"], "runr");
		assert_eq!(value["total_pages"], 3);
		assert_eq!(value["docs"][0]["link"], "https://www.example.com/p/1");
		assert!(value.get("error").is_none());
	}
}
