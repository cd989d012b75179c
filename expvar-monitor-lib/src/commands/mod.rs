//! Command-line interface and orchestration for expvar-monitor
//!
//! This module implements the CLI commands and wires configuration, fetching,
//! extraction and output together.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **scrape**: Poll the configured endpoint on its interval and print the data
//!   points of every cycle, either as aligned text or as JSON lines
//! - **extract**: Same extraction against a JSON document read from disk, useful
//!   for checking selectors without a running process
//! - **catalog**: List the effective selectors, user-defined first
//! - **init**: Generate a default configuration file
//! - **validate**: Check configuration syntax and every metric definition
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate command handler. Commands that need configuration go through
//! `CommonArgs::setup`, which initializes logging and loads `expvar.toml` (or the
//! file given with `--config`). Loading validates the whole configuration, so a
//! command never runs with a selector that could not be applied.
//!
//! Output goes through the `Host` trait so tests can capture it.

mod catalog;
mod common;
mod config;
mod extract;
mod host;
mod init;
mod output;
mod run;
mod scrape;
mod validate;

pub use catalog::{CatalogArgs, show_catalog};
pub use common::{ColorMode, CommonArgs, LogLevel, init_logging};
pub use config::{Config, DEFAULT_CONFIG_FILE, DEFAULT_CONFIG_TOML};
pub use extract::{ExtractArgs, extract_document};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use output::HostSink;
pub use run::run;
pub use scrape::{ScrapeArgs, scrape};
pub use validate::{ValidateArgs, validate_config};
