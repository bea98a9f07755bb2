//! Character info tool definition.
//!
//! Renders the profile of a single character: element, weapon, rarity,
//! role and a short description.

use tracing::{info, instrument};

use super::ToolDefinition;
use super::common::CharacterParams;
use crate::domains::knowledge::{Character, KnowledgeStore};
use crate::domains::tools::error::ToolError;

/// Character info tool - looks up one character's profile.
pub struct CharacterInfoTool;

impl CharacterInfoTool {
    /// Render a character's profile block.
    pub fn render(character: &Character) -> String {
        format!(
            "**{}**\n\
             - Element: {}\n\
             - Weapon Type: {}\n\
             - Rarity: {}★\n\
             - Role: {}\n\
             - Description: {}\n",
            character.name,
            character.element,
            character.weapon_type,
            character.rarity,
            character.role,
            character.description,
        )
    }

    /// Look up a character by name and render it.
    pub fn lookup(name: &str, store: &KnowledgeStore) -> Result<String, ToolError> {
        let character = store
            .character(name)
            .ok_or_else(|| ToolError::character_not_found(name))?;
        Ok(Self::render(character))
    }
}

impl ToolDefinition for CharacterInfoTool {
    const NAME: &'static str = "get_character_info";
    const DESCRIPTION: &'static str = "Get detailed information about a specific Genshin Impact character: element, weapon type, rarity, role and description.";

    type Params = CharacterParams;

    #[instrument(skip_all, fields(character = %params.character_name))]
    fn execute(params: &CharacterParams, store: &KnowledgeStore) -> Result<String, ToolError> {
        info!("Character info requested");
        Self::lookup(&params.character_name, store)
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
    fn test_character_info_mavuika() {
        let store = KnowledgeStore::seeded().unwrap();
        let text = CharacterInfoTool::execute(&params("Mavuika"), &store).unwrap();
        assert!(text.contains("**Mavuika**"));
        assert!(text.contains("Pyro"));
        assert!(text.contains("Claymore"));
        assert!(text.contains("5★"));
    }

    #[test]
    fn test_character_info_four_star() {
        let store = KnowledgeStore::seeded().unwrap();
        let text = CharacterInfoTool::execute(&params("bennett"), &store).unwrap();
        assert!(text.contains("4★"));
    }

    #[test]
    fn test_character_info_normalizes_name() {
        let store = KnowledgeStore::seeded().unwrap();
        let a = CharacterInfoTool::execute(&params("kazuha"), &store).unwrap();
        let b = CharacterInfoTool::execute(&params("  KAZUHA\n"), &store).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_character_info_unknown() {
        let store = KnowledgeStore::seeded().unwrap();
        let err = CharacterInfoTool::execute(&params("Paimon"), &store).unwrap_err();
        match err {
            ToolError::NotFound { key, message } => {
                assert_eq!(key, "Paimon");
                assert!(message.contains("Paimon"));
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
