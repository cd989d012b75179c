//! Command dispatch logic for expvar-monitor

use super::{CatalogArgs, ExtractArgs, InitArgs, ScrapeArgs, ValidateArgs, extract_document, init_config, scrape, show_catalog, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "expvar-monitor", version, author, long_about = None)]
#[command(about = "Collect metrics from Go expvar endpoints")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: MonitorSubcommand,
}

#[derive(Subcommand, Debug)]
enum MonitorSubcommand {
    /// Fetch the endpoint periodically and print data points
    Scrape(Box<ScrapeArgs>),
    /// Extract data points from a saved JSON document
    Extract(Box<ExtractArgs>),
    /// List the metrics collected on every fetch
    Catalog(CatalogArgs),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        MonitorSubcommand::Scrape(scrape_args) => scrape(host, scrape_args).await,
        MonitorSubcommand::Extract(extract_args) => extract_document(host, extract_args),
        MonitorSubcommand::Catalog(catalog_args) => show_catalog(host, catalog_args),
        MonitorSubcommand::Init(init_args) => init_config(host, init_args),
        MonitorSubcommand::Validate(validate_args) => validate_config(host, validate_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scrape_arguments() {
        let cli = Cli::parse_from(["expvar-monitor", "scrape", "--count", "3", "--json", "-c", "monitor.toml"]);
        let MonitorSubcommand::Scrape(args) = cli.command else {
            panic!("expected scrape");
        };
        assert_eq!(args.count, Some(3));
        assert!(args.json);
        assert_eq!(args.common.config.as_deref().map(camino::Utf8Path::as_str), Some("monitor.toml"));
    }
}
