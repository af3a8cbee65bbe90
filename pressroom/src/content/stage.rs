//! Stage plugin descriptors.
//!
//! A stage is one named transformation step the engine runs during
//! bundling. Pressroom only describes stages; it never executes them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The bundling phase a stage runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StagePhase {
    /// Pre-processing over the source syntax tree.
    Parse,
    /// Post-processing over the rendered output tree.
    Render,
}

impl fmt::Display for StagePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => write!(f, "parse"),
            Self::Render => write!(f, "render"),
        }
    }
}

/// A named stage descriptor with its phase and optional configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagePlugin {
    /// The stage name.
    pub name: String,
    /// The phase this stage runs in.
    pub phase: StagePhase,
    /// Stage-specific options handed through to the engine verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

impl StagePlugin {
    /// Creates a stage descriptor with no options.
    #[must_use]
    pub fn new(name: impl Into<String>, phase: StagePhase) -> Self {
        Self {
            name: name.into(),
            phase,
            options: None,
        }
    }

    /// Sets the stage options.
    #[must_use]
    pub fn with_options(mut self, options: serde_json::Value) -> Self {
        self.options = Some(options);
        self
    }

    /// Math-expression recognition over the source tree.
    #[must_use]
    pub fn math_syntax() -> Self {
        Self::new("math_syntax", StagePhase::Parse)
    }

    /// Math-expression rendering over the output tree.
    ///
    /// Must run before highlighting so the highlighter never sees raw
    /// math delimiter syntax.
    #[must_use]
    pub fn math_render() -> Self {
        Self::new("math_render", StagePhase::Render)
    }

    /// Table-syntax extension over the source tree.
    #[must_use]
    pub fn table_syntax() -> Self {
        Self::new("table_syntax", StagePhase::Parse)
    }

    /// Code-fence syntax highlighting over the output tree.
    #[must_use]
    pub fn syntax_highlight() -> Self {
        Self::new("syntax_highlight", StagePhase::Render)
    }

    /// Image-dimension annotation, resolving assets under the given root.
    #[must_use]
    pub fn image_size(asset_root: &Path) -> Self {
        Self::new("image_size", StagePhase::Render).with_options(serde_json::json!({
            "asset_root": asset_root.display().to_string(),
        }))
    }
}

impl fmt::Display for StagePlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.phase, self.name)
    }
}
