// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bloomreach keyword search API client for bloomsearch.
//!
//! This crate provides a typed client for the Bloomreach core search API,
//! encapsulating HTTP communication and response parsing, and implements
//! [`bloomsearch_core::SearchBackend`] on top of it.

pub mod client;
pub mod error;
pub mod types;

pub use client::{
	BloomreachClient, Credentials, RequestSettings, DEFAULT_BASE_URL, DEFAULT_BR_UID,
	DEFAULT_FIELDS, DEFAULT_REQUEST_ID, DEFAULT_SITE_URL, REQUEST_TIMEOUT,
};
pub use error::BloomreachError;
pub use types::parse_response;
