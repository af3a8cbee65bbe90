//! Verdict-table and timing tests for the health orchestrator.

#[cfg(test)]
mod tests {
    use crate::health::{HealthCheck, HealthVerdict};
    use crate::testing::{CacheOutcome, MockCacheProbe, MockSelfProbe, SelfOutcome};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    fn orchestrator(cache: MockCacheProbe, self_probe: MockSelfProbe) -> HealthCheck {
        HealthCheck::new(Arc::new(cache), Arc::new(self_probe))
    }

    #[tokio::test]
    async fn test_both_probes_succeed_is_healthy() {
        let health = orchestrator(MockCacheProbe::ready(), MockSelfProbe::reachable());

        let verdict = health.run("example.com").await;

        assert_eq!(verdict, HealthVerdict::Healthy);
        assert_eq!(verdict.status_code(), 200);
        assert_eq!(verdict.body(), "OK");
    }

    #[tokio::test]
    async fn test_cache_not_ready_is_degraded() {
        let health = orchestrator(MockCacheProbe::not_ready(), MockSelfProbe::reachable());

        let verdict = health.run("example.com").await;

        assert_eq!(verdict, HealthVerdict::Degraded);
        assert_eq!(verdict.status_code(), 503);
        assert_eq!(verdict.body(), "Redis NOT READY");
    }

    #[tokio::test]
    async fn test_self_probe_rejection_is_error_even_when_cache_ready() {
        let health = orchestrator(
            MockCacheProbe::ready(),
            MockSelfProbe::new(SelfOutcome::RejectStatus(502)),
        );

        let verdict = health.run("example.com").await;

        assert_eq!(verdict, HealthVerdict::Error);
        assert_eq!(verdict.status_code(), 500);
        assert_eq!(verdict.body(), "ERROR");
    }

    #[tokio::test]
    async fn test_self_probe_rejection_is_error_when_cache_not_ready() {
        let health = orchestrator(
            MockCacheProbe::not_ready(),
            MockSelfProbe::new(SelfOutcome::RejectStatus(500)),
        );

        assert_eq!(health.run("example.com").await, HealthVerdict::Error);
    }

    #[tokio::test]
    async fn test_cache_probe_failure_is_error() {
        let health = orchestrator(
            MockCacheProbe::new(CacheOutcome::Fail("connection reset".to_string())),
            MockSelfProbe::reachable(),
        );

        assert_eq!(health.run("example.com").await, HealthVerdict::Error);
    }

    #[tokio::test]
    async fn test_transport_failure_is_error() {
        let health = orchestrator(
            MockCacheProbe::ready(),
            MockSelfProbe::new(SelfOutcome::Fail("dns lookup failed".to_string())),
        );

        assert_eq!(health.run("example.com").await, HealthVerdict::Error);
    }

    #[tokio::test]
    async fn test_repeated_invocations_are_independent() {
        let cache = MockCacheProbe::ready();
        let self_probe = MockSelfProbe::reachable();
        let health = HealthCheck::new(Arc::new(cache), Arc::new(self_probe));

        for _ in 0..3 {
            assert_eq!(health.run("example.com").await, HealthVerdict::Healthy);
        }
    }

    #[tokio::test]
    async fn test_probes_called_once_per_invocation() {
        let cache = Arc::new(MockCacheProbe::ready());
        let self_probe = Arc::new(MockSelfProbe::reachable());
        let health = HealthCheck::new(cache.clone(), self_probe.clone());

        health.run("example.com").await;
        health.run("example.com").await;

        assert_eq!(cache.call_count(), 2);
        assert_eq!(self_probe.call_count(), 2);
        assert_eq!(
            self_probe.recorded_hosts(),
            vec!["example.com", "example.com"]
        );
    }

    #[tokio::test]
    async fn test_verdict_waits_for_slower_success() {
        let health = orchestrator(
            MockCacheProbe::ready().with_delay(Duration::from_millis(50)),
            MockSelfProbe::reachable().with_delay(Duration::from_millis(10)),
        );

        let start = Instant::now();
        let verdict = health.run("example.com").await;
        let elapsed = start.elapsed();

        assert_eq!(verdict, HealthVerdict::Healthy);
        // Both probes are awaited; the slower one bounds the latency.
        assert!(elapsed >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_fast_failure_short_circuits_slow_success() {
        let health = orchestrator(
            MockCacheProbe::ready().with_delay(Duration::from_millis(500)),
            MockSelfProbe::new(SelfOutcome::RejectStatus(500))
                .with_delay(Duration::from_millis(5)),
        );

        let start = Instant::now();
        let verdict = health.run("example.com").await;
        let elapsed = start.elapsed();

        assert_eq!(verdict, HealthVerdict::Error);
        // The 500ms cache probe is abandoned, not awaited.
        assert!(elapsed < Duration::from_millis(250));
    }
}
