//! # Pressroom
//!
//! The serving core of a personal website: a health-check orchestrator and
//! a content-compilation front-end.
//!
//! Pressroom deliberately owns no rendering or storage logic. It provides:
//!
//! - **Health orchestration**: two concurrent dependency probes joined with
//!   fail-fast semantics, collapsed into a tri-state verdict with a fixed
//!   HTTP status/body mapping
//! - **Content bundling front-end**: deterministic assembly of a staged
//!   transformation configuration, handed to an opaque bundling engine
//! - **Injected capabilities**: probes and engines are traits, so every
//!   flow is testable with fakes
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pressroom::prelude::*;
//!
//! // Wire the health check from concrete probes
//! let health = HealthCheck::new(cache_probe, self_probe);
//! let verdict = health.run("example.com").await;
//!
//! // Compile a document through an engine
//! let bundle = compile_content(&engine, ContentSource::new(text)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod content;
pub mod errors;
pub mod health;
pub mod telemetry;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::SiteConfig;
    pub use crate::content::{
        compile_content, standard_stages, BundleConfig, BundleEngine, BundleOptions,
        CompiledBundle, ContentSource, StagePhase, StagePlugin,
    };
    pub use crate::errors::PressroomError;
    pub use crate::health::{
        AppState, CacheProbe, HealthCheck, HealthVerdict, HttpSelfProbe, ProbeGroup,
        ProbeReport, SelfProbe, TcpCachePing,
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        assert!(true);
    }
}
