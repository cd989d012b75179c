use super::dimensions::resolve_dimensions;
use super::{DataPoint, DataPointValue};
use crate::Result;
use crate::selectors::{CatalogEntry, EffectiveCatalog};
use ohno::app_err;
use serde_json::Value;

const LOG_TARGET: &str = "   extract";

/// The outcome of running the catalog over one document.
#[derive(Debug, Default)]
pub struct Extraction {
    /// One entry per selector whose value was found and numeric, in catalog order
    pub data_points: Vec<DataPoint>,

    /// Selectors whose value was found but could not be used
    pub errors: Vec<ohno::AppError>,
}

/// Produce the data points for one fetched document.
///
/// Selectors whose path is absent (or null) in this document are skipped
/// silently. A value that is present but not numeric is recorded as an error
/// for that selector only; the remaining selectors are still extracted.
#[must_use]
pub fn extract(document: &Value, catalog: &EffectiveCatalog) -> Extraction {
    let mut extraction = Extraction::default();

    for entry in catalog {
        match extract_one(document, entry) {
            Ok(Some(point)) => extraction.data_points.push(point),
            Ok(None) => {}
            Err(e) => {
                log::warn!(target: LOG_TARGET, "{e}");
                extraction.errors.push(e);
            }
        }
    }

    log::debug!(
        target: LOG_TARGET,
        "Extracted {} data points from {} selectors ({} errors)",
        extraction.data_points.len(),
        catalog.len(),
        extraction.errors.len()
    );

    extraction
}

fn extract_one(document: &Value, entry: &CatalogEntry) -> Result<Option<DataPoint>> {
    let raw = match entry.path().resolve(document) {
        None | Some(Value::Null) => return Ok(None),
        Some(raw) => raw,
    };

    let value = DataPointValue::from_json(raw).ok_or_else(|| {
        app_err!(
            "metric '{}' at path '{}' is not numeric, found {}",
            entry.name(),
            entry.selector().path(),
            json_type_name(raw)
        )
    })?;

    Ok(Some(DataPoint {
        name: entry.name().to_string(),
        kind: entry.selector().kind(),
        value,
        dimensions: resolve_dimensions(entry, document),
    }))
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
