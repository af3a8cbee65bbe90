//! Health-check orchestrator.

use crate::health::join::ProbeGroup;
use crate::health::probes::{CacheProbe, SelfProbe};
use crate::health::verdict::{HealthVerdict, ProbeReport};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

/// Combines the cache probe and the self probe into a single verdict.
///
/// Both probes run concurrently through a fail-fast [`ProbeGroup`]; the
/// orchestrator waits for all to settle and produces exactly one
/// [`HealthVerdict`] per invocation. A single failed probe attempt is
/// terminal — the external poller re-invokes on its own schedule.
pub struct HealthCheck {
    cache: Arc<dyn CacheProbe>,
    self_probe: Arc<dyn SelfProbe>,
}

impl HealthCheck {
    /// Creates an orchestrator over the given probes.
    #[must_use]
    pub fn new(cache: Arc<dyn CacheProbe>, self_probe: Arc<dyn SelfProbe>) -> Self {
        Self { cache, self_probe }
    }

    /// Runs one health check against the given forwarded host.
    ///
    /// The error path is the only one that logs; the captured error is
    /// recorded with its invocation id before the verdict is returned.
    pub async fn run(&self, host: &str) -> HealthVerdict {
        let check_id = Uuid::new_v4();

        let mut group = ProbeGroup::new();

        let cache = self.cache.clone();
        group.spawn("cache", async move {
            cache
                .is_ready()
                .await
                .map(|ready| ProbeReport::Cache { ready })
        });

        let self_probe = self.self_probe.clone();
        let host = host.to_string();
        group.spawn("self", async move {
            self_probe
                .reach(&host)
                .await
                .map(|status| ProbeReport::SelfEndpoint { status })
        });

        match group.wait().await {
            Ok(reports) => {
                let cache_ready = reports
                    .iter()
                    .find_map(ProbeReport::cache_ready)
                    .unwrap_or(false);

                if cache_ready {
                    HealthVerdict::Healthy
                } else {
                    HealthVerdict::Degraded
                }
            }
            Err(err) => {
                error!(check_id = %check_id, error = %err, "health check failed");
                HealthVerdict::Error
            }
        }
    }
}

impl std::fmt::Debug for HealthCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthCheck").finish_non_exhaustive()
    }
}
