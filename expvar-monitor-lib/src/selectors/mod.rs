//! Declarative metric selection
//!
//! A [`MetricSelector`] names a JSON path whose value becomes a metric, the
//! [`MetricKind`] of that metric, and the [`DimensionSelector`]s attached to each
//! of its data points. Selectors come from two places: the user's configuration
//! and a fixed catalog of runtime memory statistics that every expvar endpoint
//! publishes under `memstats`.
//!
//! # Implementation Model
//!
//! - [`validate`] checks user selectors once, when the configuration is loaded.
//!   It reports every [`Violation`] rather than stopping at the first, so a broken
//!   configuration can be fixed in one pass.
//! - [`effective_selectors`] appends the built-in catalog to the user selectors,
//!   producing the [`EffectiveCatalog`] that extraction iterates on each cycle.
//!   Each [`CatalogEntry`] holds its paths already parsed. The optional built-ins
//!   are enabled by name through [`effective_selectors_with_extras`], or all at
//!   once with the extra-metrics wildcard.
//! - [`to_snake_case`] derives metric names for selectors that leave theirs blank.
//!
//! Selectors are immutable once built; the catalog is shared read-only between
//! fetch cycles.

mod catalog;
mod dimension_selector;
mod metric_kind;
mod metric_selector;
mod naming;
mod validation;

pub use catalog::{
    CatalogEntry, EffectiveCatalog, MEMSTATS_BY_SIZE_FREES_PATH, MEMSTATS_BY_SIZE_MALLOCS_PATH, MEMSTATS_BY_SIZE_PATH,
    MEMSTATS_BY_SIZE_SIZE_PATH, MEMSTATS_NUM_GC_PATH, MEMSTATS_PAUSE_END_PATH, MEMSTATS_PAUSE_NS_PATH, WILDCARD_EXTRA_METRIC,
    builtin_selectors, effective_selectors, effective_selectors_with_extras, optional_metric_names, unknown_extra_metrics,
};
pub use dimension_selector::DimensionSelector;
pub use metric_kind::MetricKind;
pub use metric_selector::MetricSelector;
pub use naming::to_snake_case;
pub use validation::{Violation, validate};
