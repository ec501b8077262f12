// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Plain-text rendering of strings received from the search API.
//!
//! API markup is untrusted. Nothing is ever re-emitted as HTML: fragments are
//! parsed, reduced to their visible text, and stripped of control characters
//! so they cannot carry terminal escape sequences either.

use scraper::{Html, Node};

/// Elements whose content is never visible text.
const OPAQUE_ELEMENTS: &[&str] = &[
	"script", "style", "noscript", "template", "iframe", "object", "embed", "svg", "math",
];

/// Elements that imply a word break.
const BREAKING_ELEMENTS: &[&str] = &[
	"address", "article", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption", "footer",
	"h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "ol", "p", "pre", "section", "table",
	"td", "th", "tr", "ul",
];

/// Converts an HTML fragment to a single line of visible text.
pub fn html_to_text(html: &str) -> String {
	let fragment = Html::parse_fragment(html);
	let mut text = String::with_capacity(html.len());

	for node in fragment.tree.root().descendants() {
		match node.value() {
			Node::Text(chunk) => {
				let hidden = node.ancestors().any(|ancestor| {
					matches!(ancestor.value(), Node::Element(el) if OPAQUE_ELEMENTS.contains(&el.name()))
				});
				if !hidden {
					text.push_str(chunk);
				}
			}
			Node::Element(el) if BREAKING_ELEMENTS.contains(&el.name()) => text.push(' '),
			_ => {}
		}
	}

	plain_text(&text)
}

/// Collapses whitespace and replaces control characters with spaces.
pub fn plain_text(input: &str) -> String {
	input
		.chars()
		.map(|c| if c.is_control() { ' ' } else { c })
		.collect::<String>()
		.split_whitespace()
		.collect::<Vec<_>>()
		.join(" ")
}
