use super::Host;
use super::common::CommonArgs;
use crate::Result;
use crate::selectors::EffectiveCatalog;
use clap::Parser;
use ohno::IntoAppError;
use owo_colors::OwoColorize;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Print every selector applied on each fetch cycle, in the order they are applied
pub fn show_catalog<H: Host>(host: &mut H, args: &CatalogArgs) -> Result<()> {
    let config = args.common.setup()?;

    let mut text = String::new();
    render(&config.effective_catalog(), args.common.color.use_colors(), &mut text)?;
    write!(host.output(), "{text}").into_app_err("writing catalog")?;

    Ok(())
}

fn render<W: core::fmt::Write>(catalog: &EffectiveCatalog, use_colors: bool, writer: &mut W) -> Result<()> {
    let name_width = catalog.iter().map(|entry| entry.name().len()).max().unwrap_or(0);
    let kind_width = "cumulative".len();

    for entry in catalog {
        let selector = entry.selector();
        let name = format!("{:<name_width$}", entry.name());
        let kind = selector.kind().to_string();
        let kind = format!("{kind:<kind_width$}");

        if use_colors {
            write!(writer, "{} {} {}", name.cyan(), kind.dimmed(), selector.path())?;
        } else {
            write!(writer, "{name} {kind} {}", selector.path())?;
        }

        for dimension in selector.dimensions().iter().filter(|d| !d.is_placeholder()) {
            match (dimension.value(), dimension.path()) {
                (Some(value), _) => write!(writer, " [{}={value}]", dimension.name())?,
                (None, Some(path)) => write!(writer, " [{}<-{path}]", dimension.name())?,
                (None, None) => {}
            }
        }

        writeln!(writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selectors::{DimensionSelector, MetricKind, MetricSelector, effective_selectors};

    #[test]
    fn test_render_lists_user_selectors_first() {
        let user = [MetricSelector::new("app.queue.depth", MetricKind::Gauge)
            .with_name("queue_depth")
            .with_dimension(DimensionSelector::from_value("env", "prod"))
            .with_dimension(DimensionSelector::from_path("queue", "app.queue"))];

        let mut text = String::new();
        render(&effective_selectors(&user, false), false, &mut text).unwrap();

        let first = text.lines().next().unwrap();
        assert!(first.starts_with("queue_depth "), "{first}");
        assert!(first.contains("gauge"), "{first}");
        assert!(first.ends_with("app.queue.depth [env=prod] [queue<-app.queue]"), "{first}");
        assert_eq!(text.lines().count(), 29);
    }

    #[test]
    fn test_placeholders_are_not_shown() {
        let mut text = String::new();
        render(&effective_selectors(&[], false), false, &mut text).unwrap();
        assert!(!text.contains('['));
        assert!(text.lines().any(|l| l.starts_with("memstats_num_gc ") && l.contains("cumulative")));
    }
}
