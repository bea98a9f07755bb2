//! Team compositions tool definition.

use tracing::{info, instrument};

use super::ToolDefinition;
use super::common::CharacterParams;
use crate::domains::knowledge::{KnowledgeStore, TeamComposition};
use crate::domains::tools::error::ToolError;

/// Team compositions tool - teams built around a character.
pub struct TeamCompositionsTool;

impl TeamCompositionsTool {
    /// Render one team: its lineup (centerpiece first) and synergy.
    pub fn render_team(team: &TeamComposition, store: &KnowledgeStore) -> String {
        let lineup = std::iter::once(&team.centerpiece)
            .chain(team.members.iter())
            .map(|key| store.display_name(key))
            .collect::<Vec<_>>()
            .join(" | ");

        format!(
            "**{}:**\n- {}\n- Synergy: {}\n",
            team.name, lineup, team.synergy
        )
    }

    /// Look up and render the teams for a character.
    pub fn compositions(name: &str, store: &KnowledgeStore) -> Result<String, ToolError> {
        let character = store
            .character(name)
            .ok_or_else(|| ToolError::character_not_found(name))?;

        let teams = store.teams_for(name);
        if teams.is_empty() {
            return Err(ToolError::teams_not_found(name));
        }

        let mut text = format!("**Team Compositions for {}**\n", character.name);
        for team in teams {
            text.push('\n');
            text.push_str(&Self::render_team(team, store));
        }

        Ok(text)
    }
}

impl ToolDefinition for TeamCompositionsTool {
    const NAME: &'static str = "get_team_compositions";
    const DESCRIPTION: &'static str = "Get recommended team compositions built around a character, with the lineup and how the team synergizes.";

    type Params = CharacterParams;

    #[instrument(skip_all, fields(character = %params.character_name))]
    fn execute(params: &CharacterParams, store: &KnowledgeStore) -> Result<String, ToolError> {
        info!("Team compositions requested");
        Self::compositions(&params.character_name, store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(name: &str) -> CharacterParams {
        CharacterParams {
            character_name: name.to_string(),
        }
    }

    #[test]
    fn test_team_compositions_kazuha() {
        let store = KnowledgeStore::seeded().unwrap();
        let text = TeamCompositionsTool::execute(&params("Kazuha"), &store).unwrap();

        assert!(text.starts_with("**Team Compositions for Kazuha**"));
        assert!(text.contains("- Kazuha | Xiangling | Xingqiu | Bennett"));
        assert!(text.contains("**Freeze Team:**"));
        let national = text.find("National Team").unwrap();
        let freeze = text.find("Freeze Team").unwrap();
        assert!(national < freeze);
    }

    #[test]
    fn test_team_lists_synergy() {
        let store = KnowledgeStore::seeded().unwrap();
        let text = TeamCompositionsTool::execute(&params("neuvillette"), &store).unwrap();
        assert!(text.contains("- Synergy: "));
        assert!(text.contains("Zhongli"));
    }

    #[test]
    fn test_known_character_without_teams() {
        let store = KnowledgeStore::seeded().unwrap();
        let err = TeamCompositionsTool::execute(&params("Nahida"), &store).unwrap_err();
        assert_eq!(err, ToolError::teams_not_found("Nahida"));
    }

    #[test]
    fn test_unknown_character() {
        let store = KnowledgeStore::seeded().unwrap();
        let err = TeamCompositionsTool::execute(&params("ghost"), &store).unwrap_err();
        assert_eq!(err, ToolError::character_not_found("ghost"));
    }
}
