//! Fail-fast join for concurrent probes.

use crate::errors::PressroomError;
use crate::health::verdict::ProbeReport;
use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;
use tokio::task::{AbortHandle, JoinHandle};

/// A group of concurrently running probe tasks.
///
/// The group waits for all probes to settle, short-circuiting on the first
/// failure: the first `Err` aborts every remaining in-flight probe and
/// becomes the group result. A slower probe's eventual success is discarded
/// on the failure path — quick error reporting wins over complete
/// diagnostics.
pub struct ProbeGroup {
    /// Named handles to spawned probe tasks.
    handles: Vec<(String, JoinHandle<Result<ProbeReport, PressroomError>>)>,
}

impl ProbeGroup {
    /// Creates an empty probe group.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    /// Spawns a probe task in the group.
    pub fn spawn<F>(&mut self, name: impl Into<String>, probe: F)
    where
        F: Future<Output = Result<ProbeReport, PressroomError>> + Send + 'static,
    {
        let handle = tokio::spawn(probe);
        self.handles.push((name.into(), handle));
    }

    /// Returns the number of probes in the group.
    #[must_use]
    pub fn probe_count(&self) -> usize {
        self.handles.len()
    }

    /// Waits for all probes to settle, failing fast on the first rejection.
    ///
    /// Completions are observed in whatever order they arrive; no ordering
    /// is guaranteed between probes. On success the reports of every probe
    /// are returned (in completion order).
    pub async fn wait(self) -> Result<Vec<ProbeReport>, PressroomError> {
        let aborts: Vec<AbortHandle> = self
            .handles
            .iter()
            .map(|(_, handle)| handle.abort_handle())
            .collect();

        let mut pending: FuturesUnordered<_> = self
            .handles
            .into_iter()
            .map(|(name, handle)| async move { (name, handle.await) })
            .collect();

        let mut reports = Vec::with_capacity(pending.len());
        while let Some((name, joined)) = pending.next().await {
            match joined {
                Ok(Ok(report)) => reports.push(report),
                Ok(Err(err)) => {
                    abort_all(&aborts);
                    return Err(err);
                }
                Err(join_error) => {
                    abort_all(&aborts);
                    return Err(PressroomError::probe_aborted(name, join_error.to_string()));
                }
            }
        }

        Ok(reports)
    }
}

fn abort_all(aborts: &[AbortHandle]) {
    for abort in aborts {
        abort.abort();
    }
}

impl Default for ProbeGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProbeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeGroup")
            .field("probe_count", &self.probe_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_group_all_success() {
        let mut group = ProbeGroup::new();
        group.spawn("cache", async { Ok(ProbeReport::Cache { ready: true }) });
        group.spawn("self", async {
            Ok(ProbeReport::SelfEndpoint { status: 200 })
        });

        let reports = group.wait().await.unwrap();
        assert_eq!(reports.len(), 2);
    }

    #[tokio::test]
    async fn test_group_first_error_wins() {
        let mut group = ProbeGroup::new();
        group.spawn("cache", async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            Ok(ProbeReport::Cache { ready: true })
        });
        group.spawn("self", async {
            Err(PressroomError::self_probe_failed(503))
        });

        let err = group.wait().await.unwrap_err();
        assert!(matches!(err, PressroomError::SelfProbeFailed { status: 503 }));
    }

    #[tokio::test]
    async fn test_group_fails_before_slow_probe_settles() {
        let mut group = ProbeGroup::new();
        group.spawn("cache", async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Ok(ProbeReport::Cache { ready: true })
        });
        group.spawn("self", async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Err(PressroomError::self_probe_failed(500))
        });

        let start = Instant::now();
        let result = group.wait().await;
        let elapsed = start.elapsed();

        assert!(result.is_err());
        // The slow probe's 500ms success is not waited for.
        assert!(elapsed < Duration::from_millis(250));
    }

    #[tokio::test]
    async fn test_group_aborts_straggler_on_failure() {
        let completed = Arc::new(AtomicBool::new(false));
        let completed_clone = completed.clone();

        let mut group = ProbeGroup::new();
        group.spawn("slow", async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            completed_clone.store(true, Ordering::SeqCst);
            Ok(ProbeReport::Cache { ready: true })
        });
        group.spawn("fast", async {
            Err(PressroomError::dependency_unavailable("redis"))
        });

        let result = group.wait().await;
        assert!(result.is_err());

        // Give the aborted task time to have finished if it was still alive.
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(!completed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_group_panic_becomes_abort_error() {
        let mut group = ProbeGroup::new();
        group.spawn("panicky", async { panic!("probe blew up") });

        let err = group.wait().await.unwrap_err();
        assert!(matches!(err, PressroomError::ProbeAborted { .. }));
    }

    #[tokio::test]
    async fn test_empty_group_settles_empty() {
        let group = ProbeGroup::new();
        let reports = group.wait().await.unwrap();
        assert!(reports.is_empty());
    }
}
