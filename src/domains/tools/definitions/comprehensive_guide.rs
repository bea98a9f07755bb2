//! Comprehensive guide tool definition.
//!
//! Combines the character profile, the build guide and the team
//! compositions into one document, always in that order. Each section is
//! the exact output of the corresponding single-purpose tool.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::ToolDefinition;
use super::build_guide::BuildGuideTool;
use super::character_info::CharacterInfoTool;
use super::team_compositions::TeamCompositionsTool;
use crate::domains::knowledge::KnowledgeStore;
use crate::domains::tools::error::ToolError;

/// Arguments of `get_comprehensive_guide`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[schemars(
    title = "Comprehensive guide request",
    description = "The character to cover, and whether to include team compositions."
)]
pub struct ComprehensiveGuideParams {
    /// Character name; matched case-insensitively, whitespace ignored.
    #[schemars(description = "Name of the character")]
    pub character_name: String,

    /// Whether to append team compositions.
    #[schemars(description = "Include team composition recommendations (default: true)")]
    #[serde(default = "default_include_teams")]
    pub include_teams: bool,
}

fn default_include_teams() -> bool {
    true
}

/// Comprehensive guide tool - profile, builds and teams in one response.
pub struct ComprehensiveGuideTool;

impl ComprehensiveGuideTool {
    /// Assemble the full guide.
    ///
    /// An unknown character fails once, before any section is built. A
    /// missing builds or teams section is replaced by its not-found message.
    pub fn assemble(
        name: &str,
        include_teams: bool,
        store: &KnowledgeStore,
    ) -> Result<String, ToolError> {
        let character = store
            .character(name)
            .ok_or_else(|| ToolError::character_not_found(name))?;

        let mut sections = vec![
            format!("# Complete Guide for {}\n", character.name),
            CharacterInfoTool::render(character),
            section_or_notice(BuildGuideTool::guide(name, None, store))?,
        ];

        if include_teams {
            sections.push(section_or_notice(TeamCompositionsTool::compositions(
                name, store,
            ))?);
        }

        Ok(sections.join("\n"))
    }
}

/// Keep a section, or swap a `NotFound` for its message.
fn section_or_notice(section: Result<String, ToolError>) -> Result<String, ToolError> {
    match section {
        Ok(text) => Ok(text),
        Err(ToolError::NotFound { message, .. }) => Ok(format!("_{}_\n", message)),
        Err(other) => Err(other),
    }
}

impl ToolDefinition for ComprehensiveGuideTool {
    const NAME: &'static str = "get_comprehensive_guide";
    const DESCRIPTION: &'static str = "Create a comprehensive guide for a character: profile, every recommended build and, unless disabled, team compositions.";

    type Params = ComprehensiveGuideParams;

    #[instrument(skip_all, fields(character = %params.character_name, include_teams = params.include_teams))]
    fn execute(
        params: &ComprehensiveGuideParams,
        store: &KnowledgeStore,
    ) -> Result<String, ToolError> {
        info!("Comprehensive guide requested");
        Self::assemble(&params.character_name, params.include_teams, store)
    }
}
