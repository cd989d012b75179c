use super::Host;
use super::common::CommonArgs;
use super::output::HostSink;
use crate::Result;
use crate::extract::extract;
use crate::reports::DataPointSink;
use camino::Utf8PathBuf;
use chrono::Utc;
use clap::Parser;
use ohno::IntoAppError;
use serde_json::Value;
use std::fs;

#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// JSON document to extract data points from, as served by an expvar endpoint
    #[arg(long, value_name = "PATH")]
    pub document: Utf8PathBuf,

    /// Emit JSON lines instead of aligned text
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Run the configured selectors against a saved document instead of a live endpoint
pub fn extract_document<H: Host>(host: &mut H, args: &ExtractArgs) -> Result<()> {
    let config = args.common.setup()?;

    let text = fs::read_to_string(&args.document).into_app_err_with(|| format!("reading document '{}'", args.document))?;
    let document: Value = serde_json::from_str(&text).into_app_err_with(|| format!("parsing document '{}'", args.document))?;

    let extraction = extract(&document, &config.effective_catalog());

    let mut sink = HostSink::new(host, args.json, args.common.color.use_colors());
    sink.emit(Utc::now(), &extraction)
}
