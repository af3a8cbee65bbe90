//! Site configuration.
//!
//! Everything the two flows need is carried here explicitly. The only place
//! ambient state is read is [`SiteConfig::from_env`], called once at service
//! startup; after that, configuration travels as plain parameters.

use crate::content::BundleOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the pressroom serving core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Scheme used when building the self-probe URL.
    #[serde(default = "default_probe_scheme")]
    pub probe_scheme: String,
    /// Address of the cache/store availability endpoint (host:port).
    #[serde(default = "default_cache_addr")]
    pub cache_addr: String,
    /// Directory root for resolving image assets during bundling.
    #[serde(default = "default_asset_root")]
    pub asset_root: PathBuf,
    /// Address the HTTP service binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Timeout applied to each probe, in seconds.
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_seconds: f64,
    /// User agent for outbound probe requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_probe_scheme() -> String {
    "https".to_string()
}

fn default_cache_addr() -> String {
    "127.0.0.1:6379".to_string()
}

fn default_asset_root() -> PathBuf {
    PathBuf::from("public")
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_probe_timeout() -> f64 {
    5.0
}

fn default_user_agent() -> String {
    "pressroom/0.1".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            probe_scheme: default_probe_scheme(),
            cache_addr: default_cache_addr(),
            asset_root: default_asset_root(),
            bind_addr: default_bind_addr(),
            probe_timeout_seconds: default_probe_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl SiteConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from `PRESSROOM_*` environment variables,
    /// falling back to defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(v) = std::env::var("PRESSROOM_PROBE_SCHEME") {
            config.probe_scheme = v;
        }
        if let Ok(v) = std::env::var("PRESSROOM_CACHE_ADDR") {
            config.cache_addr = v;
        }
        if let Ok(v) = std::env::var("PRESSROOM_ASSET_ROOT") {
            config.asset_root = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("PRESSROOM_BIND_ADDR") {
            config.bind_addr = v;
        }
        if let Ok(v) = std::env::var("PRESSROOM_PROBE_TIMEOUT_SECONDS") {
            if let Ok(seconds) = v.parse::<f64>() {
                config.probe_timeout_seconds = seconds;
            }
        }
        config
    }

    /// Sets the probe scheme.
    #[must_use]
    pub fn with_probe_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.probe_scheme = scheme.into();
        self
    }

    /// Sets the cache address.
    #[must_use]
    pub fn with_cache_addr(mut self, addr: impl Into<String>) -> Self {
        self.cache_addr = addr.into();
        self
    }

    /// Sets the asset root.
    #[must_use]
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    /// Sets the probe timeout.
    #[must_use]
    pub fn with_probe_timeout(mut self, seconds: f64) -> Self {
        self.probe_timeout_seconds = seconds;
        self
    }

    /// Gets the probe timeout as a Duration.
    #[must_use]
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.probe_timeout_seconds)
    }

    /// Builds bundling options from this configuration's asset root.
    #[must_use]
    pub fn bundle_options(&self) -> BundleOptions {
        BundleOptions::new().with_asset_root(self.asset_root.clone())
    }
}
