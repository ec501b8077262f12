// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod api;
mod logging;
mod results;

pub use api::{ApiConfig, ApiConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer, DEFAULT_LOG_LEVEL};
pub use results::{
	ResultsConfig, ResultsConfigLayer, DEFAULT_LINK_BASE_URL, DEFAULT_PAGE_SIZE_OPTIONS,
};
