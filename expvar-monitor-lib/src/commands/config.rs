use crate::Result;
use crate::selectors::{
    EffectiveCatalog, MetricSelector, WILDCARD_EXTRA_METRIC, effective_selectors_with_extras, optional_metric_names,
    unknown_extra_metrics, validate,
};
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// The file looked up in the base directory when no configuration path is given
pub const DEFAULT_CONFIG_FILE: &str = "expvar.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Host name or address of the endpoint
    pub host: String,

    /// Port of the endpoint
    pub port: u16,

    /// Use https instead of http
    #[serde(default)]
    pub use_https: bool,

    /// Accept invalid TLS certificates
    #[serde(default)]
    pub skip_verify: bool,

    /// Path of the expvar handler
    #[serde(default = "default_path")]
    pub path: String,

    /// Legacy switch equivalent to listing "*" in `extra_metrics`
    #[serde(default)]
    pub enhanced_metrics: bool,

    /// Optional built-in metrics to enable, by name, or "*" for all of them
    #[serde(default)]
    pub extra_metrics: Vec<String>,

    /// Time between two fetches
    #[serde(default = "default_interval", with = "humantime_serde")]
    pub interval: Duration,

    /// Per-request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    /// User-defined metric selectors
    #[serde(default)]
    pub metrics: Vec<MetricSelector>,
}

fn default_path() -> String {
    "/debug/vars".to_string()
}

const fn default_interval() -> Duration {
    Duration::from_secs(10)
}

const fn default_timeout() -> Duration {
    Duration::from_secs(5)
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `expvar.toml` in `base_dir` is used if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(DEFAULT_CONFIG_FILE);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
                Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Parse and validate configuration text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this configuration or fails validation
    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).into_app_err("parsing configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// All selector problems are reported together.
    ///
    /// # Errors
    ///
    /// Returns an error describing every problem found
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(app_err!("host must not be empty"));
        }

        if self.port == 0 {
            return Err(app_err!("port must be greater than zero"));
        }

        if self.interval.is_zero() {
            return Err(app_err!("interval must be greater than zero"));
        }

        if self.timeout.is_zero() {
            return Err(app_err!("timeout must be greater than zero"));
        }

        let unknown = unknown_extra_metrics(&self.extra_metrics);
        if !unknown.is_empty() {
            return Err(app_err!(
                "unknown extra metric(s) {}; expected \"{WILDCARD_EXTRA_METRIC}\" or one of: {}",
                unknown.iter().map(|m| format!("'{m}'")).collect::<Vec<_>>().join(", "),
                optional_metric_names().join(", ")
            ));
        }

        let violations = validate(&self.metrics);
        if !violations.is_empty() {
            let details = violations.iter().map(|v| format!("  - {v}")).collect::<Vec<_>>().join("\n");
            return Err(app_err!("{} invalid metric definition(s):\n{details}", violations.len()));
        }

        Ok(())
    }

    /// The extra metrics in effect, with the legacy `enhanced_metrics` flag folded in
    #[must_use]
    pub fn extra_metrics(&self) -> Vec<String> {
        let mut extra = Vec::with_capacity(self.extra_metrics.len() + 1);
        if self.enhanced_metrics {
            extra.push(WILDCARD_EXTRA_METRIC.to_string());
        }
        extra.extend(self.extra_metrics.iter().cloned());
        extra
    }

    #[must_use]
    pub fn enhanced_metrics_enabled(&self) -> bool {
        self.extra_metrics().iter().any(|m| m == WILDCARD_EXTRA_METRIC)
    }

    /// User selectors followed by the built-in catalog, with the requested extra metrics
    #[must_use]
    pub fn effective_catalog(&self) -> EffectiveCatalog {
        effective_selectors_with_extras(&self.metrics, &self.extra_metrics())
    }

    /// The address documents are fetched from
    ///
    /// # Errors
    ///
    /// Returns an error if the host, port and path do not form a valid URL
    pub fn endpoint_url(&self) -> Result<Url> {
        let scheme = if self.use_https { "https" } else { "http" };
        let mut url =
            Url::parse(&format!("{scheme}://{}:{}", self.host, self.port)).into_app_err_with(|| format!("invalid endpoint host '{}'", self.host))?;
        url.set_path(&self.path);
        Ok(url)
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
