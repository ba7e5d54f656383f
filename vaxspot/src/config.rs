use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::module::report::SortOrder;
use crate::module::site::Coordinate;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "vaxspot.toml";
/// Environment variable that points at an alternative config file
pub const CONFIG_PATH_ENV: &str = "VAXSPOT_CONFIG";

const FEED_BASE_URL: &str = "https://www.vaccinespotter.org/api/v0/states";

/// Vaccine type identifiers as reported by the feed.
pub mod vaccine_type {
    pub const UNKNOWN: &str = "unknown";
    pub const PFIZER: &str = "pfizer";
    pub const MODERNA: &str = "moderna";
    pub const JJ: &str = "jj";
    /// Wildcard: any vaccine type is acceptable
    pub const ALL: &str = "all";
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Point distances are measured from
    #[serde(default = "default_reference")]
    pub reference: Coordinate,

    /// Maximum distance from `reference`, in miles
    #[serde(default = "default_threshold_miles")]
    pub threshold_miles: f64,

    /// Accepted vaccine types, lowercase. Contains `all` to accept any.
    #[serde(default = "default_desired_vaccine_types")]
    pub desired_vaccine_types: BTreeSet<String>,

    /// Report sections, printed in this order
    #[serde(default = "default_sort_orders")]
    pub sort_orders: Vec<SortOrder>,

    /// Two-letter state code the feed is scoped to
    #[serde(default = "default_state")]
    pub state: String,

    /// Full feed URL, overrides the one derived from `state`
    #[serde(default)]
    pub feed_url: Option<String>,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_reference() -> Coordinate {
    Coordinate::new(37.40758515947319, -121.9368054864926)
}

fn default_threshold_miles() -> f64 {
    50.0
}

fn default_desired_vaccine_types() -> BTreeSet<String> {
    [
        vaccine_type::UNKNOWN,
        vaccine_type::PFIZER,
        vaccine_type::MODERNA,
        vaccine_type::ALL,
        vaccine_type::JJ,
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn default_sort_orders() -> Vec<SortOrder> {
    vec![SortOrder::LastModified, SortOrder::Distance]
}

fn default_state() -> String {
    "CA".to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            reference: default_reference(),
            threshold_miles: default_threshold_miles(),
            desired_vaccine_types: default_desired_vaccine_types(),
            sort_orders: default_sort_orders(),
            state: default_state(),
            feed_url: None,
            request_timeout_secs: default_request_timeout_secs(),
            log_level: default_log_level(),
            log_dir: default_log_dir(),
        }
    }
}

impl SearchConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config: SearchConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
        Ok(config.normalized())
    }

    /// Load the config named by `VAXSPOT_CONFIG`, else `vaxspot.toml` if it
    /// exists, else the built-in defaults.
    ///
    /// An explicitly named file that cannot be read is an error.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.is_empty() => Self::from_file(path),
            _ if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            _ => Ok(Self::default()),
        }
    }

    pub fn feed_url(&self) -> String {
        match &self.feed_url {
            Some(url) => url.clone(),
            None => format!("{}/{}.json", FEED_BASE_URL, self.state.to_uppercase()),
        }
    }

    // Matching against the feed is done on lowercased values.
    fn normalized(mut self) -> Self {
        self.desired_vaccine_types = self
            .desired_vaccine_types
            .into_iter()
            .map(|t| t.to_lowercase())
            .collect();
        self
    }
}
