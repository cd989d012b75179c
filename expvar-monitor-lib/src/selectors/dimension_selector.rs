use serde::{Deserialize, Serialize};

/// A dimension attached to every data point of a metric.
///
/// The value is either a literal or the value found at a JSON path. Exactly one
/// of the two must be configured; see [`validate`](super::validate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DimensionSelector {
    #[serde(default)]
    name: String,

    #[serde(default, rename = "json_path", alias = "JSONPath", skip_serializing_if = "String::is_empty")]
    path: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    value: String,
}

impl DimensionSelector {
    /// A dimension whose value is read from the document.
    #[must_use]
    pub fn from_path(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            value: String::new(),
        }
    }

    /// A dimension with a fixed value.
    #[must_use]
    pub fn from_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: String::new(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn path(&self) -> Option<&str> {
        (!self.path.is_empty()).then_some(self.path.as_str())
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        (!self.value.is_empty()).then_some(self.value.as_str())
    }

    /// True for the empty slot the built-in catalog attaches to its selectors.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.name.is_empty() && self.path.is_empty() && self.value.is_empty()
    }
}
