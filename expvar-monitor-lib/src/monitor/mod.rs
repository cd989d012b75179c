//! Polling an expvar endpoint
//!
//! A [`Fetcher`] performs a single HTTP GET and parses the JSON document. A
//! [`Monitor`] repeats that on a fixed interval, runs each document through
//! [`extract`](crate::extract::extract) with a catalog shared across cycles, and
//! hands the result to a [`DataPointSink`](crate::reports::DataPointSink).

mod fetcher;
mod runner;

pub use fetcher::Fetcher;
pub use runner::Monitor;
