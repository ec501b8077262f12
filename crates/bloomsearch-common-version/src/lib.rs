// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared build and version information for bloomsearch.
//!
//! Single source of truth for version, git SHA, build timestamp and platform,
//! used by the HTTP User-Agent and the `bloomsearch version` command.

shadow_rs::shadow!(build);

#[cfg(feature = "serde")]
use serde::Serialize;

/// Platform string in `{os}-{arch}` format, e.g. "linux-x86_64".
pub const PLATFORM: &str = env!("BLOOMSEARCH_PLATFORM");

/// Core build information.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
	pub version: &'static str,
	pub git_sha: &'static str,
	pub build_timestamp: &'static str,
	pub platform: &'static str,
}

impl BuildInfo {
	/// Get the current build information (compile-time constants).
	#[allow(clippy::const_is_empty)]
	pub const fn current() -> Self {
		Self {
			version: build::PKG_VERSION,
			git_sha: if build::SHORT_COMMIT.is_empty() {
				"unknown"
			} else {
				build::SHORT_COMMIT
			},
			build_timestamp: build::BUILD_TIME,
			platform: PLATFORM,
		}
	}
}

/// Human readable, multi-line version report.
pub fn format_version_info() -> String {
	let info = BuildInfo::current();

	format!(
		"Version:  {}\n\
		 Git SHA:  {}\n\
		 Built:    {}\n\
		 Platform: {}",
		info.version, info.git_sha, info.build_timestamp, info.platform,
	)
}
