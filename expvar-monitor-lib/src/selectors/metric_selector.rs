use super::naming::to_snake_case;
use super::{DimensionSelector, MetricKind};
use serde::{Deserialize, Serialize};

/// A rule turning one field of the document into a metric.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MetricSelector {
    /// Explicit metric name; derived from the path when blank
    #[serde(default, skip_serializing_if = "String::is_empty")]
    name: String,

    /// JSON path of the metric value
    #[serde(default, rename = "json_path", alias = "JSONPath")]
    path: String,

    /// Possible values are "gauge" or "cumulative"
    #[serde(rename = "type")]
    kind: MetricKind,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    dimensions: Vec<DimensionSelector>,
}

impl MetricSelector {
    #[must_use]
    pub fn new(path: impl Into<String>, kind: MetricKind) -> Self {
        Self {
            name: String::new(),
            path: path.into(),
            kind,
            dimensions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_dimension(mut self, dimension: DimensionSelector) -> Self {
        self.dimensions.push(dimension);
        self
    }

    /// The explicitly configured name, if it is not blank.
    #[must_use]
    pub fn name_override(&self) -> Option<&str> {
        (!self.name.trim().is_empty()).then_some(self.name.as_str())
    }

    /// The name data points of this selector are reported under.
    #[must_use]
    pub fn metric_name(&self) -> String {
        self.name_override().map_or_else(|| to_snake_case(&self.path), ToString::to_string)
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn kind(&self) -> MetricKind {
        self.kind
    }

    #[must_use]
    pub fn dimensions(&self) -> &[DimensionSelector] {
        &self.dimensions
    }
}
