use super::naming::to_snake_case;
use super::{DimensionSelector, MetricKind, MetricSelector};
use crate::Result;
use crate::paths::JsonPath;
use core::slice;
use ohno::app_err;

const LOG_TARGET: &str = " selectors";

/// Marker in the extra-metrics opt-in set that enables every optional built-in.
pub const WILDCARD_EXTRA_METRIC: &str = "*";

pub const MEMSTATS_PAUSE_NS_PATH: &str = "memstats.PauseNs.0";
pub const MEMSTATS_PAUSE_END_PATH: &str = "memstats.PauseEnd.0";
pub const MEMSTATS_NUM_GC_PATH: &str = "memstats.NumGC";

macro_rules! memstats_by_size {
    () => {
        "memstats.BySize.0"
    };
    ($field:literal) => {
        concat!(memstats_by_size!(), ".", $field)
    };
}

/// Base of the size-class bucket fields.
pub const MEMSTATS_BY_SIZE_PATH: &str = memstats_by_size!();
pub const MEMSTATS_BY_SIZE_SIZE_PATH: &str = memstats_by_size!("Size");
pub const MEMSTATS_BY_SIZE_MALLOCS_PATH: &str = memstats_by_size!("Mallocs");
pub const MEMSTATS_BY_SIZE_FREES_PATH: &str = memstats_by_size!("Frees");

const GAUGE_PATHS: &[&str] = &[
    "memstats.HeapAlloc",
    "memstats.HeapIdle",
    "memstats.HeapInuse",
    "memstats.HeapReleased",
    "memstats.HeapObjects",
    "memstats.StackInuse",
    "memstats.StackSys",
    "memstats.MSpanInuse",
    "memstats.MSpanSys",
    "memstats.MCacheInuse",
    "memstats.MCacheSys",
    "memstats.BuckHashSys",
    "memstats.GCSys",
    "memstats.OtherSys",
    "memstats.Sys",
    "memstats.NextGC",
    "memstats.LastGC",
    "memstats.GCCPUFraction",
    "memstats.EnableGC",
    MEMSTATS_PAUSE_NS_PATH,
    MEMSTATS_PAUSE_END_PATH,
];

const CUMULATIVE_PATHS: &[&str] = &[
    "memstats.TotalAlloc",
    "memstats.Lookups",
    "memstats.Mallocs",
    "memstats.Frees",
    "memstats.PauseTotalNs",
    MEMSTATS_NUM_GC_PATH,
    "memstats.NumForcedGC",
];

const ENHANCED_GAUGE_PATHS: &[&str] = &["memstats.HeapSys", "memstats.DebugGC", "memstats.Alloc"];

const ENHANCED_CUMULATIVE_PATHS: &[&str] = &[
    MEMSTATS_BY_SIZE_SIZE_PATH,
    MEMSTATS_BY_SIZE_MALLOCS_PATH,
    MEMSTATS_BY_SIZE_FREES_PATH,
];

/// A selector with its paths parsed once, ready to run against every document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    selector: MetricSelector,
    name: String,
    path: JsonPath,
    dimension_paths: Vec<Option<JsonPath>>,
}

impl CatalogEntry {
    /// # Errors
    ///
    /// Returns an error if the metric path or a dimension path is malformed
    pub fn new(selector: MetricSelector) -> Result<Self> {
        let name = selector.metric_name();
        let path = JsonPath::parse(selector.path()).map_err(|e| app_err!("metric '{name}': {e}"))?;
        let dimension_paths = selector
            .dimensions()
            .iter()
            .map(|dimension| dimension.path().map(JsonPath::parse).transpose())
            .collect::<Result<Vec<_>>>()
            .map_err(|e| app_err!("metric '{name}': {e}"))?;

        Ok(Self {
            selector,
            name,
            path,
            dimension_paths,
        })
    }

    #[must_use]
    pub const fn selector(&self) -> &MetricSelector {
        &self.selector
    }

    /// The name data points of this entry are reported under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn path(&self) -> &JsonPath {
        &self.path
    }

    /// Each declared dimension, with its parsed path when it is read from the document.
    pub fn dimensions(&self) -> impl Iterator<Item = (&DimensionSelector, Option<&JsonPath>)> {
        self.selector
            .dimensions()
            .iter()
            .zip(self.dimension_paths.iter().map(Option::as_ref))
    }
}

/// The ordered selectors used for every fetch cycle of one monitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveCatalog {
    entries: Vec<CatalogEntry>,
}

impl EffectiveCatalog {
    fn compile(selectors: impl IntoIterator<Item = MetricSelector>) -> Self {
        let entries = selectors
            .into_iter()
            .filter_map(|selector| match CatalogEntry::new(selector) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!(target: LOG_TARGET, "Leaving a selector out of the catalog: {e}");
                    None
                }
            })
            .collect();

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn selectors(&self) -> impl Iterator<Item = &MetricSelector> {
        self.entries.iter().map(CatalogEntry::selector)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a EffectiveCatalog {
    type Item = &'a CatalogEntry;
    type IntoIter = slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Merge user-declared selectors with the built-in memory statistics selectors.
///
/// User selectors come first, untouched and in their declared order. The base
/// built-ins always follow; the optional ones only when `enhanced` is set.
///
/// Selectors are expected to have passed [`validate`](super::validate). One whose
/// paths do not parse is logged and left out.
#[must_use]
pub fn effective_selectors(user: &[MetricSelector], enhanced: bool) -> EffectiveCatalog {
    EffectiveCatalog::compile(user.iter().cloned().chain(builtins(|_| enhanced)))
}

/// Like [`effective_selectors`], enabling the optional built-ins listed in `extra`.
///
/// Entries are matched against the derived names of the optional built-ins, and
/// `"*"` enables all of them.
#[must_use]
pub fn effective_selectors_with_extras<S: AsRef<str>>(user: &[MetricSelector], extra: &[S]) -> EffectiveCatalog {
    let all = extra.iter().any(|e| e.as_ref() == WILDCARD_EXTRA_METRIC);
    let wanted = |name: &str| all || extra.iter().any(|e| e.as_ref() == name);
    EffectiveCatalog::compile(user.iter().cloned().chain(builtins(wanted)))
}

/// The built-in memory statistics selectors, gauges first.
pub fn builtin_selectors(enhanced: bool) -> impl Iterator<Item = MetricSelector> {
    builtins(move |_| enhanced)
}

/// Names that can be listed in the extra-metrics set, in catalog order.
#[must_use]
pub fn optional_metric_names() -> Vec<String> {
    ENHANCED_GAUGE_PATHS
        .iter()
        .chain(ENHANCED_CUMULATIVE_PATHS)
        .map(|path| to_snake_case(path))
        .collect()
}

/// The entries of `extra` that are neither the wildcard nor an optional built-in.
#[must_use]
pub fn unknown_extra_metrics<S: AsRef<str>>(extra: &[S]) -> Vec<&str> {
    let known = optional_metric_names();
    extra
        .iter()
        .map(AsRef::as_ref)
        .filter(|e| *e != WILDCARD_EXTRA_METRIC && !known.iter().any(|k| k == e))
        .collect()
}

fn builtins(include_optional: impl Fn(&str) -> bool + Copy) -> impl Iterator<Item = MetricSelector> {
    let gauges = GAUGE_PATHS
        .iter()
        .chain(optional(ENHANCED_GAUGE_PATHS, include_optional))
        .map(|path| builtin(path, MetricKind::Gauge));

    let cumulatives = CUMULATIVE_PATHS
        .iter()
        .chain(optional(ENHANCED_CUMULATIVE_PATHS, include_optional))
        .map(|path| builtin(path, MetricKind::Cumulative));

    gauges.chain(cumulatives)
}

fn optional(paths: &'static [&'static str], include: impl Fn(&str) -> bool) -> impl Iterator<Item = &'static &'static str> {
    paths.iter().filter(move |path| include(&to_snake_case(path)))
}

fn builtin(path: &str, kind: MetricKind) -> MetricSelector {
    MetricSelector::new(path, kind)
        .with_name(to_snake_case(path))
        .with_dimension(DimensionSelector::default())
}
