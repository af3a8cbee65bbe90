//! Content source and compiled bundle types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Options controlling a single bundling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleOptions {
    /// Directory root for resolving image assets.
    asset_root: PathBuf,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("public"),
        }
    }
}

impl BundleOptions {
    /// Creates options with the default asset root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the asset root.
    #[must_use]
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    /// Returns the asset root.
    #[must_use]
    pub fn asset_root(&self) -> &Path {
        &self.asset_root
    }
}

/// Raw markup-with-code source text plus bundling options.
///
/// Owned by the caller; the pipeline retains nothing after compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSource {
    source: String,
    options: BundleOptions,
}

impl ContentSource {
    /// Creates a source document with default options.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            options: BundleOptions::default(),
        }
    }

    /// Sets the bundling options.
    #[must_use]
    pub fn with_options(mut self, options: BundleOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the raw source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the bundling options.
    #[must_use]
    pub fn options(&self) -> &BundleOptions {
        &self.options
    }
}

/// The compiled, render-ready output of a bundling run.
///
/// Ownership transfers to the caller on return; the pipeline holds no
/// reference afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledBundle {
    /// The compiled render-ready code.
    pub code: String,

    /// Export metadata produced by the bundling run (e.g. frontmatter).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub exports: HashMap<String, serde_json::Value>,

    /// When the bundle was compiled.
    pub compiled_at: DateTime<Utc>,
}

impl CompiledBundle {
    /// Creates a bundle from compiled code with no exports.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            exports: HashMap::new(),
            compiled_at: Utc::now(),
        }
    }

    /// Adds an export entry.
    #[must_use]
    pub fn with_export(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.exports.insert(key.into(), value);
        self
    }

    /// Looks up an export by name.
    #[must_use]
    pub fn export(&self, key: &str) -> Option<&serde_json::Value> {
        self.exports.get(key)
    }
}
