use super::Host;
use super::common::CommonArgs;
use crate::Result;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Load the configuration, checking every metric definition, and report the outcome
pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    match args.common.setup() {
        Ok(config) => {
            let _ = writeln!(host.output(), "Configuration file is valid");
            if let Some(path) = &args.common.config {
                let _ = writeln!(host.output(), "Config file: {path}");
            } else {
                let _ = writeln!(host.output(), "Using default configuration (no config file given)");
            }

            let _ = writeln!(
                host.output(),
                "{} user metric(s), {} metric(s) in effect",
                config.metrics.len(),
                config.effective_catalog().len()
            );
            Ok(())
        }
        Err(e) => {
            host.fail(format_args!("Configuration validation failed: {e}"));
            host.exit(1);
            Err(e)
        }
    }
}
