//! Collect metrics from Go expvar endpoints.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use expvar_monitor_lib::{Host, run};
use std::io::{self, Write};
use std::process::{self, ExitCode};

/// Writes to the standard streams; `scrape` output is typically piped into a collector.
#[derive(Debug, Clone, Copy, Default)]
struct StdStreams;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for StdStreams {
    fn output(&mut self) -> impl Write {
        io::stdout().lock()
    }

    fn error(&mut self) -> impl Write {
        io::stderr().lock()
    }

    fn exit(&mut self, code: i32) {
        let _ = io::stdout().flush();
        process::exit(code);
    }
}

#[tokio::main]
#[cfg_attr(coverage_nightly, coverage(off))]
async fn main() -> ExitCode {
    let mut host = StdStreams;

    match run(&mut host, std::env::args_os()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            host.fail(e);
            ExitCode::FAILURE
        }
    }
}
