//! Bundling engine capability.

use super::bundle::{CompiledBundle, ContentSource};
use super::config::BundleConfig;
use crate::errors::PressroomError;
use async_trait::async_trait;

/// An opaque bundling capability.
///
/// The engine owns parsing, transformation, and rendering; pressroom only
/// configures which stages it runs. Implementations supply their own
/// default stage lists, which the front-end extends by appending.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BundleEngine: Send + Sync {
    /// Returns the engine's default stage configuration.
    fn default_config(&self) -> BundleConfig;

    /// Compiles a source document under the given configuration.
    ///
    /// Any stage failure rejects the whole compilation; no partial bundle
    /// is produced.
    async fn compile(
        &self,
        source: &ContentSource,
        config: &BundleConfig,
    ) -> Result<CompiledBundle, PressroomError>;
}
