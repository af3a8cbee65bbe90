//! Content pipeline front-end.

use super::bundle::{CompiledBundle, ContentSource};
use super::config::standard_stages;
use super::engine::BundleEngine;
use crate::errors::PressroomError;

/// Compiles a source document through the engine with the standard stages.
///
/// The engine's default configuration is extended by appending the five
/// standard stages in their fixed order, then compilation is awaited once
/// and the bundle is returned unmodified. Every call re-runs the full
/// chain; nothing is memoized. Failures propagate unchanged — there is no
/// partial recovery.
pub async fn compile_content(
    engine: &dyn BundleEngine,
    source: ContentSource,
) -> Result<CompiledBundle, PressroomError> {
    let mut config = engine.default_config();
    for plugin in standard_stages(source.options().asset_root()) {
        config.append(plugin);
    }

    engine.compile(&source, &config).await
}
