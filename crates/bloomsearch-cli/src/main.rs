// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod backend;
mod logging;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use bloomsearch_common_version::BuildInfo;
use bloomsearch_config::{load_config, BloomsearchConfig, CliOverrides};
use bloomsearch_core::{
	entry_location, submit_search, Location, Phase, QueryParams, ResultsController, Route,
	PAGE_NUMBER_PARAM, PAGE_SIZE_PARAM,
};
use bloomsearch_tui::AppSettings;
use clap::{Parser, Subcommand};
use tokio::runtime::Handle;
use tracing::{debug, info};

use backend::ConfiguredBackend;
use logging::{init_logging, LogTarget};

/// Keyword search against a Bloomreach catalogue.
#[derive(Parser, Debug)]
#[command(name = "bloomsearch", about = "Bloomreach keyword search client", version)]
struct Args {
	/// Config file (default: $XDG_CONFIG_HOME/bloomsearch/config.toml)
	#[arg(long, global = true, value_name = "PATH")]
	config: Option<PathBuf>,

	#[arg(long, global = true, value_name = "ID")]
	account_id: Option<String>,

	#[arg(long, global = true, value_name = "KEY")]
	domain_key: Option<String>,

	/// Search API endpoint
	#[arg(long, global = true, value_name = "URL")]
	base_url: Option<String>,

	/// Log filter, e.g. `debug` or `bloomsearch_api=trace`
	#[arg(long, global = true, value_name = "LEVEL")]
	log_level: Option<String>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Interactive search (default)
	Tui {
		/// Location to open first, e.g. `/search-results?query=shoes`
		location: Option<String>,
	},
	/// Search once and print the results view
	Search {
		#[arg(required = true, num_args = 1..)]
		term: Vec<String>,
		#[arg(long, value_name = "N")]
		page: Option<u32>,
		#[arg(long, value_name = "N")]
		page_size: Option<u32>,
		/// Print JSON instead of text
		#[arg(long)]
		json: bool,
	},
	/// Print the view for a location, e.g. `/search-results?query=shoes&pageNumber=2`
	Open {
		location: String,
		#[arg(long)]
		json: bool,
	},
	/// Show version and build information
	Version {
		#[arg(long)]
		json: bool,
	},
}

impl Args {
	fn overrides(&self) -> CliOverrides {
		CliOverrides {
			config_path: self.config.clone(),
			account_id: self.account_id.clone(),
			domain_key: self.domain_key.clone(),
			base_url: self.base_url.clone(),
			log_level: self.log_level.clone(),
		}
	}
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
	let args = Args::parse();
	let overrides = args.overrides();

	match args.command.unwrap_or(Command::Tui { location: None }) {
		Command::Version { json } => {
			println!("{}", version_report(json)?);
			Ok(ExitCode::SUCCESS)
		}
		Command::Tui { location } => {
			let config = load(overrides)?;
			init_logging(&config.logging.level, LogTarget::File(config.paths.log_file()))?;
			let start = match location {
				Some(raw) => {
					Location::parse(&raw).with_context(|| format!("invalid location {raw:?}"))?
				}
				None => entry_location(),
			};
			run_tui(&config, start)?;
			Ok(ExitCode::SUCCESS)
		}
		Command::Search {
			term,
			page,
			page_size,
			json,
		} => {
			let config = load(overrides)?;
			init_logging(&config.logging.level, LogTarget::Stderr)?;
			let location = search_location(&term.join(" "), page, page_size)?;
			render_once(&config, location, json).await
		}
		Command::Open { location, json } => {
			let config = load(overrides)?;
			init_logging(&config.logging.level, LogTarget::Stderr)?;
			let location = Location::parse(&location)
				.with_context(|| format!("invalid location {location:?}"))?;
			render_once(&config, location, json).await
		}
	}
}

fn load(overrides: CliOverrides) -> Result<BloomsearchConfig> {
	load_config(overrides).context("loading configuration")
}

fn run_tui(config: &BloomsearchConfig, start: Location) -> Result<()> {
	let backend = Arc::new(ConfiguredBackend::from_config(&config.api)?);
	let settings = AppSettings {
		policy: config.page_policy()?,
		page_size_options: config.results.page_size_options.clone(),
		link_base_url: config.results.link_base_url.clone(),
	};
	info!(start = %start, "starting terminal UI");

	let runtime = Handle::current();
	tokio::task::block_in_place(|| bloomsearch_tui::run(backend, runtime, settings, start))
}

/// The location the entry view would navigate to, with optional paging.
fn search_location(term: &str, page: Option<u32>, page_size: Option<u32>) -> Result<Location> {
	let Some(location) = submit_search(term) else {
		bail!("search term is blank");
	};

	let mut params: QueryParams = location.params().clone();
	if let Some(page) = page {
		params.set(PAGE_NUMBER_PARAM, page.to_string());
	}
	if let Some(size) = page_size {
		params.set(PAGE_SIZE_PARAM, size.to_string());
	}
	Ok(location.replace_params(params))
}

fn version_report(json: bool) -> Result<String> {
	if json {
		return Ok(serde_json::to_string_pretty(&BuildInfo::current())?);
	}
	Ok(bloomsearch_common_version::format_version_info())
}

async fn render_once(
	config: &BloomsearchConfig,
	location: Location,
	json: bool,
) -> Result<ExitCode> {
	let policy = config.page_policy()?;

	match Route::resolve(&location, &policy) {
		Route::Results(_) => {}
		Route::Entry => {
			bail!("{location} is the search entry view; use `bloomsearch search <term>`")
		}
		Route::NotFound(path) => bail!("no view at {path}"),
	}

	let mut controller = ResultsController::new(policy);
	if let Some(ticket) = controller.navigate(location.params()) {
		let backend = ConfiguredBackend::from_config(&config.api)?;
		let completion = ticket.execute(&backend).await;
		controller.apply(completion);
	}
	debug!(phase = ?controller.phase(), "results view settled");

	let link_base_url = &config.results.link_base_url;
	if json {
		println!("{}", render::render_json(&controller, &location, link_base_url)?);
	} else {
		print!("{}", render::render_text(&controller, &location, link_base_url));
	}

	Ok(if controller.phase() == Phase::Errored {
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	})
}
