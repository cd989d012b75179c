use crate::selectors::CatalogEntry;
use serde_json::Value;
use std::collections::BTreeMap;

/// Resolve the dimensions declared on a catalog entry against the document root.
///
/// Literal values are used verbatim. Path-based dimensions that are missing or
/// null in this document are left out instead of failing the metric. Empty
/// placeholder selectors contribute nothing, and a later dimension overwrites an
/// earlier one with the same name.
#[must_use]
pub fn resolve_dimensions(entry: &CatalogEntry, document: &Value) -> BTreeMap<String, String> {
    let mut dimensions = BTreeMap::new();

    for (dimension, path) in entry.dimensions() {
        if dimension.is_placeholder() {
            continue;
        }

        let resolved = match (dimension.value(), path) {
            (Some(value), _) => Some(value.to_string()),
            (None, Some(path)) => path.resolve(document).and_then(stringify),
            (None, None) => None,
        };

        if let Some(value) = resolved {
            let _ = dimensions.insert(dimension.name().to_string(), value);
        }
    }

    dimensions
}

fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selectors::{DimensionSelector, MetricKind, MetricSelector};
    use serde_json::json;

    fn document() -> Value {
        json!({
            "memstats": {
                "BySize": [{"Size": 8, "Mallocs": 3, "Frees": 1}],
                "Label": "primary",
                "Tags": ["a", "b"],
                "Enabled": true,
                "Nothing": null
            }
        })
    }

    fn selector(dimensions: Vec<DimensionSelector>) -> CatalogEntry {
        let selector = dimensions
            .into_iter()
            .fold(MetricSelector::new("memstats.BySize.0.Mallocs", MetricKind::Cumulative), MetricSelector::with_dimension);
        CatalogEntry::new(selector).unwrap()
    }

    #[test]
    fn test_literal_value() {
        let dims = resolve_dimensions(&selector(vec![DimensionSelector::from_value("env", "prod")]), &document());
        assert_eq!(dims.get("env").map(String::as_str), Some("prod"));
    }

    #[test]
    fn test_path_values_are_stringified() {
        let dims = resolve_dimensions(
            &selector(vec![
                DimensionSelector::from_path("size", "memstats.BySize.0.Size"),
                DimensionSelector::from_path("label", "memstats.Label"),
                DimensionSelector::from_path("enabled", "memstats.Enabled"),
                DimensionSelector::from_path("tags", "memstats.Tags"),
            ]),
            &document(),
        );
        assert_eq!(dims["size"], "8");
        assert_eq!(dims["label"], "primary");
        assert_eq!(dims["enabled"], "true");
        assert_eq!(dims["tags"], r#"["a","b"]"#);
    }

    #[test]
    fn test_missing_and_null_are_omitted() {
        let dims = resolve_dimensions(
            &selector(vec![
                DimensionSelector::from_path("gone", "memstats.Missing"),
                DimensionSelector::from_path("nothing", "memstats.Nothing"),
                DimensionSelector::from_value("env", "prod"),
            ]),
            &document(),
        );
        assert_eq!(dims.len(), 1);
        assert!(dims.contains_key("env"));
    }

    #[test]
    fn test_placeholder_contributes_nothing() {
        let dims = resolve_dimensions(&selector(vec![DimensionSelector::default()]), &document());
        assert!(dims.is_empty());
    }

    #[test]
    fn test_last_duplicate_wins() {
        let dims = resolve_dimensions(
            &selector(vec![
                DimensionSelector::from_value("env", "staging"),
                DimensionSelector::from_value("env", "prod"),
            ]),
            &document(),
        );
        assert_eq!(dims["env"], "prod");
    }
}
