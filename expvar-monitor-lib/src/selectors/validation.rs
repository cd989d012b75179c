use super::MetricSelector;
use crate::paths::JsonPath;
use core::fmt::{Display, Formatter};

/// A structural problem in the declared metric selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    EmptyMetricPath {
        metric: String,
    },
    MalformedMetricPath {
        metric: String,
        reason: String,
    },
    MissingDimensionName {
        metric: String,
        position: usize,
    },
    DimensionNameHasSpace {
        metric: String,
        dimension: String,
    },
    MissingDimensionSource {
        metric: String,
        dimension: String,
    },
    ConflictingDimensionSource {
        metric: String,
        dimension: String,
    },
    MalformedDimensionPath {
        metric: String,
        dimension: String,
        reason: String,
    },
    DimensionPathNotPrefix {
        metric: String,
        metric_path: String,
        dimension: String,
        dimension_path: String,
    },
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyMetricPath { metric } => write!(f, "{metric}: json_path is required"),
            Self::MalformedMetricPath { metric, reason } => write!(f, "{metric}: {reason}"),
            Self::MissingDimensionName { metric, position } => {
                write!(f, "{metric}: dimension #{position} has no name")
            }
            Self::DimensionNameHasSpace { metric, dimension } => {
                write!(f, "{metric}: dimension name '{dimension}' must not contain spaces")
            }
            Self::MissingDimensionSource { metric, dimension } => {
                write!(f, "{metric}: dimension '{dimension}' needs either json_path or value")
            }
            Self::ConflictingDimensionSource { metric, dimension } => {
                write!(f, "{metric}: dimension '{dimension}' sets both json_path and value, only one is allowed")
            }
            Self::MalformedDimensionPath { metric, dimension, reason } => {
                write!(f, "{metric}: dimension '{dimension}': {reason}")
            }
            Self::DimensionPathNotPrefix {
                metric,
                metric_path,
                dimension,
                dimension_path,
            } => write!(
                f,
                "{metric}: path '{dimension_path}' of dimension '{dimension}' must be shorter than metric path '{metric_path}' and start from the same root"
            ),
        }
    }
}

/// Check every declared selector, returning all violations found.
///
/// Unrecognized metric types are accepted and decode as gauges.
#[must_use]
pub fn validate(selectors: &[MetricSelector]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (index, selector) in selectors.iter().enumerate() {
        validate_selector(index, selector, &mut violations);
    }

    violations
}

fn validate_selector(index: usize, selector: &MetricSelector, violations: &mut Vec<Violation>) {
    let metric = describe(index, selector);

    let metric_path = if selector.path().is_empty() {
        violations.push(Violation::EmptyMetricPath { metric: metric.clone() });
        None
    } else {
        match JsonPath::parse(selector.path()) {
            Ok(path) => Some(path),
            Err(e) => {
                violations.push(Violation::MalformedMetricPath {
                    metric: metric.clone(),
                    reason: e.to_string(),
                });
                None
            }
        }
    };

    for (position, dimension) in selector.dimensions().iter().enumerate() {
        let name = dimension.name();

        if name.is_empty() {
            violations.push(Violation::MissingDimensionName {
                metric: metric.clone(),
                position: position + 1,
            });
        } else if name.contains(' ') {
            violations.push(Violation::DimensionNameHasSpace {
                metric: metric.clone(),
                dimension: name.to_string(),
            });
        }

        match (dimension.path(), dimension.value()) {
            (None, None) => violations.push(Violation::MissingDimensionSource {
                metric: metric.clone(),
                dimension: name.to_string(),
            }),
            (Some(_), Some(_)) => violations.push(Violation::ConflictingDimensionSource {
                metric: metric.clone(),
                dimension: name.to_string(),
            }),
            (Some(dimension_path), None) => match JsonPath::parse(dimension_path) {
                Ok(parsed) => {
                    // an unusable metric path was already reported above
                    if let Some(metric_path) = &metric_path
                        && !parsed.is_strict_prefix_of(metric_path)
                    {
                        violations.push(Violation::DimensionPathNotPrefix {
                            metric: metric.clone(),
                            metric_path: selector.path().to_string(),
                            dimension: name.to_string(),
                            dimension_path: dimension_path.to_string(),
                        });
                    }
                }
                Err(e) => violations.push(Violation::MalformedDimensionPath {
                    metric: metric.clone(),
                    dimension: name.to_string(),
                    reason: e.to_string(),
                }),
            },
            (None, Some(_)) => {}
        }
    }
}

fn describe(index: usize, selector: &MetricSelector) -> String {
    let name = selector.metric_name();
    if name.is_empty() {
        format!("metric #{}", index + 1)
    } else {
        format!("metric #{} ({name})", index + 1)
    }
}
