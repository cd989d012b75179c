use super::Host;
use super::common::CommonArgs;
use super::output::HostSink;
use crate::Result;
use crate::monitor::{Fetcher, Monitor};
use clap::Parser;

#[derive(Parser, Debug)]
pub struct ScrapeArgs {
    /// Number of fetch cycles to run before exiting (runs until interrupted when omitted)
    #[arg(long, value_name = "N")]
    pub count: Option<u64>,

    /// Emit JSON lines instead of aligned text
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Poll the configured endpoint and emit data points after each fetch
pub async fn scrape<H: Host>(host: &mut H, args: &ScrapeArgs) -> Result<()> {
    let config = args.common.setup()?;

    let fetcher = Fetcher::new(config.endpoint_url()?, config.timeout, config.skip_verify)?;
    let monitor = Monitor::new(fetcher, config.effective_catalog(), config.interval)?;

    let mut sink = HostSink::new(host, args.json, args.common.color.use_colors());
    monitor.run(&mut sink, args.count).await
}
