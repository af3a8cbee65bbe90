//! Health verdict and probe report types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The tri-state result of a health check invocation.
///
/// Exactly one verdict is produced per invocation, and each maps to a
/// fixed HTTP status/body pair suitable for automated polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthVerdict {
    /// Both probes settled and the dependency reported available.
    Healthy,
    /// Both probes settled but the dependency reported unavailable.
    Degraded,
    /// A probe rejected, or something unexpected failed.
    Error,
}

impl HealthVerdict {
    /// Returns the HTTP status code for this verdict.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Healthy => 200,
            Self::Degraded => 503,
            Self::Error => 500,
        }
    }

    /// Returns the fixed response body for this verdict.
    #[must_use]
    pub fn body(&self) -> &'static str {
        match self {
            Self::Healthy => "OK",
            Self::Degraded => "Redis NOT READY",
            Self::Error => "ERROR",
        }
    }

    /// Returns true if the verdict indicates full health.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }
}

impl fmt::Display for HealthVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Degraded => write!(f, "degraded"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// The settled outcome of a single probe.
///
/// Reports are owned by the invocation that produced them and are discarded
/// once the verdict is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "probe")]
pub enum ProbeReport {
    /// The cache/store availability probe settled.
    Cache {
        /// Whether the dependency reported itself available.
        ready: bool,
    },
    /// The self-referential HTTP probe settled with a success status.
    SelfEndpoint {
        /// The HTTP status returned by the root path (always 2xx here;
        /// non-success statuses reject the probe instead).
        status: u16,
    },
}

impl ProbeReport {
    /// Returns the cache readiness flag, if this is a cache report.
    #[must_use]
    pub fn cache_ready(&self) -> Option<bool> {
        match self {
            Self::Cache { ready } => Some(*ready),
            Self::SelfEndpoint { .. } => None,
        }
    }
}
