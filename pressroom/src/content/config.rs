//! Bundle configuration assembly.

use super::stage::{StagePhase, StagePlugin};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ordered per-phase stage lists for one bundling run.
///
/// A config starts from whatever defaults the engine provides and grows by
/// APPENDING: appended stages always run after the pre-existing stages of
/// their phase, in append order. Assembly is deterministic regardless of
/// call site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BundleConfig {
    /// Stages applied during the parse phase, in execution order.
    parse_stages: Vec<StagePlugin>,
    /// Stages applied during the render phase, in execution order.
    render_stages: Vec<StagePlugin>,
}

impl BundleConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration pre-populated with engine defaults.
    #[must_use]
    pub fn with_defaults(parse_stages: Vec<StagePlugin>, render_stages: Vec<StagePlugin>) -> Self {
        Self {
            parse_stages,
            render_stages,
        }
    }

    /// Appends a stage to the end of its phase's list.
    pub fn append(&mut self, plugin: StagePlugin) {
        match plugin.phase {
            StagePhase::Parse => self.parse_stages.push(plugin),
            StagePhase::Render => self.render_stages.push(plugin),
        }
    }

    /// Appends a stage, builder style.
    #[must_use]
    pub fn appended(mut self, plugin: StagePlugin) -> Self {
        self.append(plugin);
        self
    }

    /// Returns the parse-phase stages in execution order.
    #[must_use]
    pub fn parse_stages(&self) -> &[StagePlugin] {
        &self.parse_stages
    }

    /// Returns the render-phase stages in execution order.
    #[must_use]
    pub fn render_stages(&self) -> &[StagePlugin] {
        &self.render_stages
    }

    /// Returns the stage names of a phase in execution order.
    #[must_use]
    pub fn stage_names(&self, phase: StagePhase) -> Vec<&str> {
        let stages = match phase {
            StagePhase::Parse => &self.parse_stages,
            StagePhase::Render => &self.render_stages,
        };
        stages.iter().map(|plugin| plugin.name.as_str()).collect()
    }

    /// Returns the total number of stages across both phases.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.parse_stages.len() + self.render_stages.len()
    }
}

/// The fixed sequence of standard stage appends, in order.
///
/// Math syntax before table syntax in the parse phase; math rendering
/// before highlighting before image sizing in the render phase. Later
/// stages assume the tree shape produced by earlier ones.
#[must_use]
pub fn standard_stages(asset_root: &Path) -> Vec<StagePlugin> {
    vec![
        StagePlugin::math_syntax(),
        StagePlugin::math_render(),
        StagePlugin::table_syntax(),
        StagePlugin::syntax_highlight(),
        StagePlugin::image_size(asset_root),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_append_routes_by_phase() {
        let mut config = BundleConfig::new();
        config.append(StagePlugin::math_syntax());
        config.append(StagePlugin::math_render());
        config.append(StagePlugin::table_syntax());

        assert_eq!(
            config.stage_names(StagePhase::Parse),
            vec!["math_syntax", "table_syntax"]
        );
        assert_eq!(config.stage_names(StagePhase::Render), vec!["math_render"]);
    }

    #[test]
    fn test_appended_stages_run_after_defaults() {
        let defaults = BundleConfig::with_defaults(
            vec![StagePlugin::new("frontmatter", StagePhase::Parse)],
            vec![
                StagePlugin::new("slug", StagePhase::Render),
                StagePlugin::new("minify", StagePhase::Render),
            ],
        );

        let mut config = defaults;
        for plugin in standard_stages(Path::new("public")) {
            config.append(plugin);
        }

        assert_eq!(
            config.stage_names(StagePhase::Parse),
            vec!["frontmatter", "math_syntax", "table_syntax"]
        );
        assert_eq!(
            config.stage_names(StagePhase::Render),
            vec!["slug", "minify", "math_render", "syntax_highlight", "image_size"]
        );
    }

    #[test]
    fn test_standard_stage_order_is_fixed() {
        let names: Vec<String> = standard_stages(Path::new("public"))
            .into_iter()
            .map(|plugin| plugin.name)
            .collect();

        assert_eq!(
            names,
            vec![
                "math_syntax",
                "math_render",
                "table_syntax",
                "syntax_highlight",
                "image_size",
            ]
        );
    }

    #[test]
    fn test_builder_flavor_matches_mutating_appends() {
        let built = BundleConfig::new()
            .appended(StagePlugin::math_syntax())
            .appended(StagePlugin::syntax_highlight());

        let mut mutated = BundleConfig::new();
        mutated.append(StagePlugin::math_syntax());
        mutated.append(StagePlugin::syntax_highlight());

        assert_eq!(built, mutated);
    }
}
