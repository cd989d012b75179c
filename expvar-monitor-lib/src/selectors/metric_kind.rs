use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter};

/// How a backend should interpret the values of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// An instantaneous value, not assumed to be monotonic.
    #[default]
    Gauge,

    /// A running total that never decreases.
    Cumulative,
}

impl MetricKind {
    /// Decode a configured type name.
    ///
    /// Only `cumulative` selects [`MetricKind::Cumulative`]; every other string,
    /// including ones that are not valid type names, falls back to a gauge.
    #[must_use]
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "cumulative" => Self::Cumulative,
            _ => Self::Gauge,
        }
    }
}

impl<'de> Deserialize<'de> for MetricKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_type_name(&name))
    }
}
