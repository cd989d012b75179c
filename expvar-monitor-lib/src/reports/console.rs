use crate::Result;
use crate::extract::DataPoint;
use crate::selectors::MetricKind;
use chrono::{DateTime, SecondsFormat, Utc};
use core::fmt::Write;
use owo_colors::OwoColorize;

pub fn generate<W: Write>(points: &[DataPoint], timestamp: DateTime<Utc>, use_colors: bool, writer: &mut W) -> Result<()> {
    let header = format!(
        "{} ({} data points)",
        timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
        points.len()
    );

    if use_colors {
        writeln!(writer, "{}", header.bold())?;
    } else {
        writeln!(writer, "{header}")?;
    }

    let labels: Vec<String> = points.iter().map(label).collect();
    let values: Vec<String> = points.iter().map(|p| p.value.to_string()).collect();

    let label_width = labels.iter().map(String::len).max().unwrap_or(0);
    let value_width = values.iter().map(String::len).max().unwrap_or(0);

    for ((point, label), value) in points.iter().zip(&labels).zip(&values) {
        // pad before coloring so escape codes don't skew the columns
        let label = format!("{label:<label_width$}");
        let value = format!("{value:>value_width$}");

        if use_colors {
            let kind = match point.kind {
                MetricKind::Gauge => point.kind.to_string().green().to_string(),
                MetricKind::Cumulative => point.kind.to_string().yellow().to_string(),
            };
            writeln!(writer, "  {} : {} {kind}", label.cyan(), value.bold())?;
        } else {
            writeln!(writer, "  {label} : {value} {}", point.kind)?;
        }
    }

    Ok(())
}

fn label(point: &DataPoint) -> String {
    if point.dimensions.is_empty() {
        return point.name.clone();
    }

    let dimensions = point
        .dimensions
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join(",");

    format!("{}{{{dimensions}}}", point.name)
}
