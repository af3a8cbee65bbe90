//! HTTP surface for the health check.

use crate::health::orchestrator::HealthCheck;
use crate::health::verdict::HealthVerdict;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tracing::error;

/// Shared state for the health routes.
#[derive(Clone)]
pub struct AppState {
    health: Arc<HealthCheck>,
}

impl AppState {
    /// Creates state around an orchestrator.
    #[must_use]
    pub fn new(health: Arc<HealthCheck>) -> Self {
        Self { health }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

/// Builds the health router.
///
/// `GET`/`HEAD /healthcheck` both resolve through the same handler.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", get(healthcheck))
        .with_state(state)
}

/// Resolves the probe host: `X-Forwarded-Host`, falling back to `Host`.
fn forwarded_host(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-host")
        .or_else(|| headers.get(header::HOST))
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

async fn healthcheck(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> (StatusCode, &'static str) {
    let verdict = match forwarded_host(&headers) {
        Some(host) => state.health.run(&host).await,
        None => {
            // No host means no self URL to probe.
            error!("health check request carried neither X-Forwarded-Host nor Host");
            HealthVerdict::Error
        }
    };

    let status = match verdict {
        HealthVerdict::Healthy => StatusCode::OK,
        HealthVerdict::Degraded => StatusCode::SERVICE_UNAVAILABLE,
        HealthVerdict::Error => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, verdict.body())
}
