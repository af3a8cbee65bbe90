//! Error types for the pressroom core.
//!
//! One taxonomy covers both flows: probe failures surface through the
//! health orchestrator's Error verdict, pipeline failures propagate
//! unchanged to the content caller. There are no internal retries anywhere.

use thiserror::Error;

/// The main error type for pressroom operations.
#[derive(Debug, Error)]
pub enum PressroomError {
    /// A dependency probe could not complete its availability check.
    #[error("Dependency unavailable: {name}")]
    DependencyUnavailable {
        /// The dependency name (e.g. "redis").
        name: String,
    },

    /// The self-referential HTTP probe received a non-success status.
    #[error("Self probe failed: status {status}")]
    SelfProbeFailed {
        /// The HTTP status code returned by the root path.
        status: u16,
    },

    /// A probe task panicked or was torn down before settling.
    #[error("Probe '{probe}' aborted: {message}")]
    ProbeAborted {
        /// The probe name.
        probe: String,
        /// Description of the abort.
        message: String,
    },

    /// A content transformation stage failed during bundling.
    ///
    /// Stage failures are all-or-nothing per document; no partial bundle
    /// is ever produced.
    #[error("Stage '{stage}' failed: {message}")]
    PipelineStage {
        /// The stage name.
        stage: String,
        /// The failure description reported by the engine.
        message: String,
    },

    /// Invalid or unusable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP transport error from the self probe.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PressroomError {
    /// Creates a dependency-unavailable error.
    #[must_use]
    pub fn dependency_unavailable(name: impl Into<String>) -> Self {
        Self::DependencyUnavailable { name: name.into() }
    }

    /// Creates a self-probe failure for a non-success status.
    #[must_use]
    pub fn self_probe_failed(status: u16) -> Self {
        Self::SelfProbeFailed { status }
    }

    /// Creates a probe-aborted error.
    #[must_use]
    pub fn probe_aborted(probe: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProbeAborted {
            probe: probe.into(),
            message: message.into(),
        }
    }

    /// Creates a pipeline stage failure.
    #[must_use]
    pub fn stage(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PipelineStage {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if the error came from a probe rather than the pipeline.
    #[must_use]
    pub fn is_probe_error(&self) -> bool {
        matches!(
            self,
            Self::DependencyUnavailable { .. }
                | Self::SelfProbeFailed { .. }
                | Self::ProbeAborted { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_probe_failed_display() {
        let err = PressroomError::self_probe_failed(503);
        assert_eq!(err.to_string(), "Self probe failed: status 503");
    }

    #[test]
    fn test_stage_error_display() {
        let err = PressroomError::stage("image_size", "asset not found: hero.png");
        assert_eq!(
            err.to_string(),
            "Stage 'image_size' failed: asset not found: hero.png"
        );
    }

    #[test]
    fn test_probe_error_classification() {
        assert!(PressroomError::dependency_unavailable("redis").is_probe_error());
        assert!(PressroomError::self_probe_failed(500).is_probe_error());
        assert!(PressroomError::probe_aborted("self", "panicked").is_probe_error());
        assert!(!PressroomError::stage("highlight", "boom").is_probe_error());
        assert!(!PressroomError::internal("oops").is_probe_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err: PressroomError = io.into();
        assert!(matches!(err, PressroomError::Io(_)));
    }
}
