use super::Host;
use crate::Result;
use crate::extract::Extraction;
use crate::reports::{DataPointSink, generate_console, generate_json};
use chrono::{DateTime, Utc};
use ohno::IntoAppError;
use std::io::Write;

/// Writes each cycle to the host's output, as aligned text or as JSON lines.
///
/// Per-metric extraction errors and fetch failures go to the host's error stream.
#[derive(Debug)]
pub struct HostSink<'a, H: Host> {
    host: &'a mut H,
    json: bool,
    use_colors: bool,
}

impl<'a, H: Host> HostSink<'a, H> {
    pub const fn new(host: &'a mut H, json: bool, use_colors: bool) -> Self {
        Self { host, json, use_colors }
    }
}

impl<H: Host> DataPointSink for HostSink<'_, H> {
    fn emit(&mut self, timestamp: DateTime<Utc>, extraction: &Extraction) -> Result<()> {
        let mut text = String::new();
        if self.json {
            generate_json(&extraction.data_points, timestamp, &mut text)?;
        } else {
            generate_console(&extraction.data_points, timestamp, self.use_colors, &mut text)?;
        }

        write!(self.host.output(), "{text}").into_app_err("writing data points")?;

        for error in &extraction.errors {
            self.host.warn(error);
        }

        Ok(())
    }

    fn fetch_failed(&mut self, error: &ohno::AppError) {
        self.host.fail(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use crate::extract::{DataPoint, DataPointValue};
    use crate::selectors::MetricKind;
    use ohno::app_err;
    use std::collections::BTreeMap;

    fn extraction() -> Extraction {
        Extraction {
            data_points: vec![DataPoint {
                name: "memstats_num_gc".into(),
                kind: MetricKind::Cumulative,
                value: DataPointValue::UInt(5),
                dimensions: BTreeMap::new(),
            }],
            errors: vec![app_err!("metric 'app_version' at path 'app.version' is not numeric, found a string")],
        }
    }

    #[test]
    fn test_console_output_and_warnings() {
        let mut host = TestHost::default();
        HostSink::new(&mut host, false, false).emit(Utc::now(), &extraction()).unwrap();

        assert!(host.output_str().contains("memstats_num_gc : 5 cumulative"));
        assert!(host.error_str().contains("app.version"));
    }

    #[test]
    fn test_json_output() {
        let mut host = TestHost::default();
        HostSink::new(&mut host, true, false).emit(Utc::now(), &extraction()).unwrap();

        let line: serde_json::Value = serde_json::from_str(host.output_str().trim()).unwrap();
        assert_eq!(line["name"], "memstats_num_gc");
    }

    #[test]
    fn test_appends_across_cycles() {
        let mut host = TestHost::default();
        let mut sink = HostSink::new(&mut host, true, false);
        sink.emit(Utc::now(), &extraction()).unwrap();
        sink.emit(Utc::now(), &extraction()).unwrap();

        assert_eq!(host.output_str().lines().count(), 2);
    }

    #[test]
    fn test_fetch_failure_goes_to_error_stream() {
        let mut host = TestHost::default();
        HostSink::new(&mut host, false, false).fetch_failed(&app_err!("connection refused"));

        assert!(host.output_str().is_empty());
        assert!(host.error_str().contains("connection refused"));
    }
}
