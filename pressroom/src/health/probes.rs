//! Dependency probes.
//!
//! Probes are injected capabilities: the orchestrator only sees the traits,
//! so tests can substitute fakes with scripted outcomes and latencies. The
//! concrete implementations here are deliberately thin — an availability
//! ping is not a store client, and a reachability check is not an HTTP
//! abstraction layer.

use crate::config::SiteConfig;
use crate::errors::PressroomError;
use async_trait::async_trait;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Availability probe for the cache/store dependency.
///
/// `Ok(true)` means the dependency reported itself ready, `Ok(false)` means
/// it is unreachable or not ready (a Degraded signal, not an error), and
/// `Err` means the check itself failed unexpectedly.
#[async_trait]
pub trait CacheProbe: Send + Sync {
    /// Checks whether the dependency is available.
    async fn is_ready(&self) -> Result<bool, PressroomError>;
}

/// Self-referential HTTP reachability probe.
///
/// Returns the success status code, or rejects: a non-2xx root response is
/// an error, not a value — this is what lets the combined wait fail fast.
#[async_trait]
pub trait SelfProbe: Send + Sync {
    /// Issues a reachability check against the service's own root path.
    async fn reach(&self, host: &str) -> Result<u16, PressroomError>;
}

/// TCP availability ping against the store endpoint.
///
/// Connects, sends an inline `PING`, and expects `+PONG`. Connection
/// refusal and timeout both read as "not ready"; a reply that is not a
/// `PONG` means something other than the store answered, which is an error.
#[derive(Debug, Clone)]
pub struct TcpCachePing {
    addr: String,
    timeout: Duration,
}

impl TcpCachePing {
    /// Creates a new ping probe for the given `host:port` address.
    #[must_use]
    pub fn new(addr: impl Into<String>, timeout: Duration) -> Self {
        Self {
            addr: addr.into(),
            timeout,
        }
    }

    async fn ping(&self) -> Result<bool, PressroomError> {
        let mut stream = match TcpStream::connect(&self.addr).await {
            Ok(stream) => stream,
            Err(_) => return Ok(false),
        };

        stream.write_all(b"PING\r\n").await?;

        let mut buf = [0u8; 32];
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            return Ok(false);
        }
        if buf[..n].starts_with(b"+PONG") {
            Ok(true)
        } else {
            Err(PressroomError::dependency_unavailable(format!(
                "unexpected ping reply from {}",
                self.addr
            )))
        }
    }
}

#[async_trait]
impl CacheProbe for TcpCachePing {
    async fn is_ready(&self) -> Result<bool, PressroomError> {
        match tokio::time::timeout(self.timeout, self.ping()).await {
            Ok(result) => result,
            // Timed out: unreachable counts as not ready, not as a failure.
            Err(_) => Ok(false),
        }
    }
}

/// HTTP HEAD reachability probe built on reqwest.
#[derive(Debug, Clone)]
pub struct HttpSelfProbe {
    client: reqwest::Client,
    scheme: String,
}

impl HttpSelfProbe {
    /// Creates a probe from the site configuration.
    pub fn new(config: &SiteConfig) -> Result<Self, PressroomError> {
        let client = reqwest::Client::builder()
            .timeout(config.probe_timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            scheme: config.probe_scheme.clone(),
        })
    }

    /// Returns the URL this probe would hit for a given host.
    #[must_use]
    pub fn probe_url(&self, host: &str) -> String {
        format!("{}://{}/", self.scheme, host)
    }
}

#[async_trait]
impl SelfProbe for HttpSelfProbe {
    async fn reach(&self, host: &str) -> Result<u16, PressroomError> {
        let response = self.client.head(self.probe_url(host)).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(status.as_u16())
        } else {
            Err(PressroomError::self_probe_failed(status.as_u16()))
        }
    }
}
