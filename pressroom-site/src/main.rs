//! Service binary: wires concrete probes into the health router and serves.

use anyhow::Result;
use pressroom::config::SiteConfig;
use pressroom::health::{AppState, HealthCheck, HttpSelfProbe, TcpCachePing};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    pressroom::telemetry::init_tracing("info")?;

    // The only ambient read; everything downstream takes explicit config.
    let config = SiteConfig::from_env();

    let cache = Arc::new(TcpCachePing::new(
        config.cache_addr.clone(),
        config.probe_timeout(),
    ));
    let self_probe = Arc::new(HttpSelfProbe::new(&config)?);
    let health = Arc::new(HealthCheck::new(cache, self_probe));

    let app = pressroom::health::router(AppState::new(health));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "pressroom-site listening");
    axum::serve(listener, app).await?;

    Ok(())
}
