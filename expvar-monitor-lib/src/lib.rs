#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for expvar-monitor
//!
//! This library consolidates all functionality for the expvar-monitor tool, which
//! polls the JSON document published by a Go process's `expvar` handler and turns
//! selected fields into typed, dimensioned data points.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface, configuration and orchestration
//! - [`paths`]: Dotted JSON paths and their resolution against a document
//! - [`selectors`]: Metric and dimension selectors, the built-in catalog and validation
//! - [`extract`]: Turning one document into data points
//! - [`monitor`]: Fetching the document and running the periodic cycle
//! - [`reports`]: Console and JSON-lines rendering of data points

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod commands;
pub mod extract;
pub mod monitor;
pub mod paths;
pub mod reports;
pub mod selectors;

pub use crate::commands::{Host, run};
