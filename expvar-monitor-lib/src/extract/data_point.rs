use crate::selectors::MetricKind;
use core::fmt::{Display, Formatter};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A numeric sample read from the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataPointValue {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl DataPointValue {
    /// Interpret a JSON value as a number.
    ///
    /// Booleans count as `0` and `1`, since runtime statistics such as `EnableGC`
    /// are published as booleans. Strings, arrays, objects and null are not numbers.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_u64()
                .map(Self::UInt)
                .or_else(|| n.as_i64().map(Self::Int))
                .or_else(|| n.as_f64().map(Self::Float)),
            Value::Bool(b) => Some(Self::UInt(u64::from(*b))),
            _ => None,
        }
    }
}

impl Display for DataPointValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// One named, typed, dimensioned value produced by a fetch cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    pub name: String,
    pub kind: MetricKind,
    pub value: DataPointValue,
    pub dimensions: BTreeMap<String, String>,
}
