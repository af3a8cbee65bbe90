//! Mock probes and engines with scripted outcomes and call recording.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::time::Duration;

use crate::content::{BundleConfig, BundleEngine, CompiledBundle, ContentSource};
use crate::errors::PressroomError;
use crate::health::{CacheProbe, SelfProbe};

/// Scripted outcome for a mock cache probe.
#[derive(Debug, Clone)]
pub enum CacheOutcome {
    /// The dependency reports available.
    Ready,
    /// The dependency reports unavailable.
    NotReady,
    /// The probe fails with the given message.
    Fail(String),
}

/// A cache probe that returns a configurable outcome after an optional delay.
#[derive(Debug)]
pub struct MockCacheProbe {
    outcome: Mutex<CacheOutcome>,
    delay: Mutex<Option<Duration>>,
    call_count: Mutex<usize>,
}

impl MockCacheProbe {
    /// Creates a mock probe with the given outcome and no delay.
    #[must_use]
    pub fn new(outcome: CacheOutcome) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            delay: Mutex::new(None),
            call_count: Mutex::new(0),
        }
    }

    /// Creates a probe that reports ready.
    #[must_use]
    pub fn ready() -> Self {
        Self::new(CacheOutcome::Ready)
    }

    /// Creates a probe that reports not ready.
    #[must_use]
    pub fn not_ready() -> Self {
        Self::new(CacheOutcome::NotReady)
    }

    /// Sets the outcome to return.
    pub fn set_outcome(&self, outcome: CacheOutcome) {
        *self.outcome.lock() = outcome;
    }

    /// Sets an artificial latency before settling.
    #[must_use]
    pub fn with_delay(self, delay: Duration) -> Self {
        *self.delay.lock() = Some(delay);
        self
    }

    /// Returns the number of times the probe was invoked.
    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.call_count.lock()
    }
}

#[async_trait]
impl CacheProbe for MockCacheProbe {
    async fn is_ready(&self) -> Result<bool, PressroomError> {
        *self.call_count.lock() += 1;
        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match self.outcome.lock().clone() {
            CacheOutcome::Ready => Ok(true),
            CacheOutcome::NotReady => Ok(false),
            CacheOutcome::Fail(message) => Err(PressroomError::dependency_unavailable(message)),
        }
    }
}

/// Scripted outcome for a mock self probe.
#[derive(Debug, Clone)]
pub enum SelfOutcome {
    /// The root path answered with a success status.
    Reachable(u16),
    /// The root path answered with a non-success status; the probe rejects.
    RejectStatus(u16),
    /// The probe fails at the transport level.
    Fail(String),
}

/// A self probe that returns a configurable outcome after an optional delay.
#[derive(Debug)]
pub struct MockSelfProbe {
    outcome: Mutex<SelfOutcome>,
    delay: Mutex<Option<Duration>>,
    call_count: Mutex<usize>,
    hosts: Mutex<Vec<String>>,
}

impl MockSelfProbe {
    /// Creates a mock probe with the given outcome and no delay.
    #[must_use]
    pub fn new(outcome: SelfOutcome) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            delay: Mutex::new(None),
            call_count: Mutex::new(0),
            hosts: Mutex::new(Vec::new()),
        }
    }

    /// Creates a probe that answers 200.
    #[must_use]
    pub fn reachable() -> Self {
        Self::new(SelfOutcome::Reachable(200))
    }

    /// Sets the outcome to return.
    pub fn set_outcome(&self, outcome: SelfOutcome) {
        *self.outcome.lock() = outcome;
    }

    /// Sets an artificial latency before settling.
    #[must_use]
    pub fn with_delay(self, delay: Duration) -> Self {
        *self.delay.lock() = Some(delay);
        self
    }

    /// Returns the number of times the probe was invoked.
    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.call_count.lock()
    }

    /// Returns the hosts the probe was invoked with.
    #[must_use]
    pub fn recorded_hosts(&self) -> Vec<String> {
        self.hosts.lock().clone()
    }
}

#[async_trait]
impl SelfProbe for MockSelfProbe {
    async fn reach(&self, host: &str) -> Result<u16, PressroomError> {
        *self.call_count.lock() += 1;
        self.hosts.lock().push(host.to_string());
        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match self.outcome.lock().clone() {
            SelfOutcome::Reachable(status) => Ok(status),
            SelfOutcome::RejectStatus(status) => Err(PressroomError::self_probe_failed(status)),
            SelfOutcome::Fail(message) => Err(PressroomError::internal(message)),
        }
    }
}

/// Scripted result for a recording engine.
#[derive(Debug, Clone)]
pub enum EngineOutcome {
    /// Compilation succeeds with this bundle.
    Bundle(CompiledBundle),
    /// The named stage fails with the given message.
    StageFailure {
        /// The failing stage name.
        stage: String,
        /// The failure description.
        message: String,
    },
}

/// An engine that records every compile call and returns a canned result.
#[derive(Debug)]
pub struct RecordingEngine {
    defaults: BundleConfig,
    outcome: Mutex<EngineOutcome>,
    configs: Mutex<Vec<BundleConfig>>,
    sources: Mutex<Vec<String>>,
}

impl RecordingEngine {
    /// Creates an engine with empty defaults that returns the given bundle.
    #[must_use]
    pub fn new(bundle: CompiledBundle) -> Self {
        Self {
            defaults: BundleConfig::new(),
            outcome: Mutex::new(EngineOutcome::Bundle(bundle)),
            configs: Mutex::new(Vec::new()),
            sources: Mutex::new(Vec::new()),
        }
    }

    /// Sets the default configuration the engine reports.
    #[must_use]
    pub fn with_defaults(mut self, defaults: BundleConfig) -> Self {
        self.defaults = defaults;
        self
    }

    /// Scripts a stage failure.
    pub fn fail_stage(&self, stage: impl Into<String>, message: impl Into<String>) {
        *self.outcome.lock() = EngineOutcome::StageFailure {
            stage: stage.into(),
            message: message.into(),
        };
    }

    /// Returns the number of compile calls.
    #[must_use]
    pub fn compile_count(&self) -> usize {
        self.configs.lock().len()
    }

    /// Returns the configurations handed to each compile call.
    #[must_use]
    pub fn recorded_configs(&self) -> Vec<BundleConfig> {
        self.configs.lock().clone()
    }

    /// Returns the source texts handed to each compile call.
    #[must_use]
    pub fn recorded_sources(&self) -> Vec<String> {
        self.sources.lock().clone()
    }
}

#[async_trait]
impl BundleEngine for RecordingEngine {
    fn default_config(&self) -> BundleConfig {
        self.defaults.clone()
    }

    async fn compile(
        &self,
        source: &ContentSource,
        config: &BundleConfig,
    ) -> Result<CompiledBundle, PressroomError> {
        self.configs.lock().push(config.clone());
        self.sources.lock().push(source.source().to_string());
        match self.outcome.lock().clone() {
            EngineOutcome::Bundle(bundle) => Ok(bundle),
            EngineOutcome::StageFailure { stage, message } => {
                Err(PressroomError::stage(stage, message))
            }
        }
    }
}
