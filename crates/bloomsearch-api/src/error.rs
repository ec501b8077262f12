// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the Bloomreach API client.

use thiserror::Error;

/// Errors that can occur when interacting with the Bloomreach API.
///
/// None of these are retried; the results view reports every variant with
/// the same user-facing message.
#[derive(Debug, Error)]
pub enum BloomreachError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Rate limit exceeded.
	#[error("Rate limit exceeded")]
	RateLimited,

	/// Account id or domain key rejected.
	#[error("Invalid account id or domain key")]
	Unauthorized,

	/// Invalid or unparseable response from Bloomreach.
	#[error("Invalid response from Bloomreach: {0}")]
	InvalidResponse(String),

	/// Bloomreach API returned an error status.
	#[error("Bloomreach API error: {status} - {message}")]
	ApiError { status: u16, message: String },
}
