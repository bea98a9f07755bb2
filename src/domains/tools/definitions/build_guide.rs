//! Build guide tool definition.
//!
//! Renders every recommended build for a character, optionally filtered by
//! role: main stats per slot, artifact sets, weapons, and substat and talent
//! priorities.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::ToolDefinition;
use super::common::{comma_list, priority_list};
use crate::domains::knowledge::{Build, KnowledgeStore};
use crate::domains::tools::error::ToolError;

/// Arguments of `get_build_guide`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[schemars(
    title = "Build guide request",
    description = "The character to build, optionally narrowed to one role."
)]
pub struct BuildGuideParams {
    /// Character name; matched case-insensitively, whitespace ignored.
    #[schemars(description = "Name of the character")]
    pub character_name: String,

    /// Only return builds for this role.
    #[schemars(description = "Specific role (DPS, Support, etc.) - optional")]
    #[serde(default)]
    pub role: Option<String>,
}

/// Build guide tool - recommended builds for a character.
pub struct BuildGuideTool;

impl BuildGuideTool {
    /// Render one build.
    pub fn render_build(build: &Build) -> String {
        let main_stats = build
            .main_stats
            .iter()
            .map(|(slot, stat)| format!("{}: {}", slot.label(), stat))
            .collect::<Vec<_>>()
            .join(" | ");

        format!(
            "**{} Build:**\n\
             - Main Stats: {}\n\
             - Artifact Sets: {}\n\
             - Weapons: {}\n\
             - Substat Priority: {}\n\
             - Talent Priority: {}\n",
            build.role,
            main_stats,
            comma_list(&build.artifact_sets),
            comma_list(&build.weapons),
            priority_list(&build.substats_priority),
            priority_list(&build.talent_priority),
        )
    }

    /// Look up and render the builds for a character.
    ///
    /// Unknown characters, characters without builds and roles without a
    /// matching build are all `NotFound`, each with its own message.
    pub fn guide(
        name: &str,
        role: Option<&str>,
        store: &KnowledgeStore,
    ) -> Result<String, ToolError> {
        let character = store
            .character(name)
            .ok_or_else(|| ToolError::character_not_found(name))?;

        let builds = store.builds_for(name);
        if builds.is_empty() {
            return Err(ToolError::builds_not_found(name));
        }

        let role = role.map(str::trim).filter(|r| !r.is_empty());
        let selected: Vec<&Build> = builds
            .iter()
            .filter(|b| role.is_none_or(|r| b.role.eq_ignore_ascii_case(r)))
            .collect();

        if selected.is_empty() {
            let role = role.unwrap_or_default();
            return Err(ToolError::role_build_not_found(name, role));
        }

        let mut text = format!("**Build Guide for {}**\n", character.name);
        for build in selected {
            text.push('\n');
            text.push_str(&Self::render_build(build));
        }

        Ok(text)
    }
}

impl ToolDefinition for BuildGuideTool {
    const NAME: &'static str = "get_build_guide";
    const DESCRIPTION: &'static str = "Get recommended builds for a character: main stats per artifact slot, artifact sets, weapons, substat priority and talent priority. Optionally filter by role.";

    type Params = BuildGuideParams;

    #[instrument(skip_all, fields(character = %params.character_name, role = ?params.role))]
    fn execute(params: &BuildGuideParams, store: &KnowledgeStore) -> Result<String, ToolError> {
        info!("Build guide requested");
        Self::guide(&params.character_name, params.role.as_deref(), store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(name: &str, role: Option<&str>) -> BuildGuideParams {
        BuildGuideParams {
            character_name: name.to_string(),
            role: role.map(str::to_string),
        }
    }

    #[test]
    fn test_build_guide_lists_all_builds_in_order() {
        let store = KnowledgeStore::seeded().unwrap();
        let text = BuildGuideTool::execute(&params("Mavuika", None), &store).unwrap();

        let dps = text.find("**DPS Build:**").unwrap();
        let support = text.find("**Support Build:**").unwrap();
        assert!(dps < support);
        assert!(text.contains("Crimson Witch of Flames, Gilded Dreams"));
        assert!(text.contains("CRIT Rate > CRIT DMG > ATK% > Energy Recharge"));
    }

    #[test]
    fn test_main_stats_in_slot_order() {
        let store = KnowledgeStore::seeded().unwrap();
        let text = BuildGuideTool::execute(&params("neuvillette", None), &store).unwrap();
        assert!(text.contains("Sands: HP% | Goblet: Hydro DMG% | Circlet: CRIT Rate/DMG"));
    }

    #[test]
    fn test_role_filter_is_case_insensitive() {
        let store = KnowledgeStore::seeded().unwrap();
        let text = BuildGuideTool::execute(&params("mavuika", Some("support")), &store).unwrap();
        assert!(text.contains("**Support Build:**"));
        assert!(!text.contains("**DPS Build:**"));
    }

    #[test]
    fn test_blank_role_means_no_filter() {
        let store = KnowledgeStore::seeded().unwrap();
        let text = BuildGuideTool::execute(&params("mavuika", Some("  ")), &store).unwrap();
        assert!(text.contains("**DPS Build:**"));
        assert!(text.contains("**Support Build:**"));
    }

    #[test]
    fn test_role_without_build() {
        let store = KnowledgeStore::seeded().unwrap();
        let err = BuildGuideTool::execute(&params("kazuha", Some("Healer")), &store).unwrap_err();
        assert_eq!(err, ToolError::role_build_not_found("kazuha", "Healer"));
    }

    #[test]
    fn test_known_character_without_builds() {
        let store = KnowledgeStore::seeded().unwrap();
        let err = BuildGuideTool::execute(&params("Furina", None), &store).unwrap_err();
        assert_eq!(err, ToolError::builds_not_found("Furina"));
    }

    #[test]
    fn test_unknown_character() {
        let store = KnowledgeStore::seeded().unwrap();
        let err =
            BuildGuideTool::execute(&params("unknown_character_xyz", None), &store).unwrap_err();
        assert_eq!(err, ToolError::character_not_found("unknown_character_xyz"));
        assert!(err.to_string().contains("unknown_character_xyz"));
    }
}
