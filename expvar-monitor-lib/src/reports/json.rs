use crate::Result;
use crate::extract::DataPoint;
use chrono::{DateTime, SecondsFormat, Utc};
use core::fmt::Write;
use serde::Serialize;

#[derive(Serialize)]
struct Line<'a> {
    timestamp: &'a str,

    #[serde(flatten)]
    point: &'a DataPoint,
}

/// Write one JSON object per data point, each on its own line.
pub fn generate<W: Write>(points: &[DataPoint], timestamp: DateTime<Utc>, writer: &mut W) -> Result<()> {
    let timestamp = timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);

    for point in points {
        let line = Line {
            timestamp: &timestamp,
            point,
        };
        writeln!(writer, "{}", serde_json::to_string(&line)?)?;
    }

    Ok(())
}
