//! Parameters and formatting helpers shared across tools.

use schemars::JsonSchema;
use serde::Deserialize;

/// Arguments of the single-character lookups.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[schemars(
    title = "Character lookup",
    description = "The character to look up."
)]
pub struct CharacterParams {
    /// Character name; matched case-insensitively, whitespace ignored.
    #[schemars(description = "Name of the character (e.g., 'mavuika', 'neuvillette')")]
    pub character_name: String,
}

/// Join a list for a bullet line.
pub fn comma_list(items: &[String]) -> String {
    items.join(", ")
}

/// Join a priority list, most important first.
pub fn priority_list(items: &[String]) -> String {
    items.join(" > ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_params_require_name() {
        let result: Result<CharacterParams, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_list_formatting() {
        let items = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        assert_eq!(comma_list(&items), "A, B, C");
        assert_eq!(priority_list(&items), "A > B > C");
        assert_eq!(priority_list(&[]), "");
    }
}
