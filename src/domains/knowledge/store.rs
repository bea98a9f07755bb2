//! The immutable in-memory knowledge store.
//!
//! The store is built once at startup, validated for referential integrity,
//! and then only ever read. All lookups accept a free-form character name and
//! normalize it with [`slugify`] before matching.

use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info};

use super::error::KnowledgeError;
use super::seed;
use super::types::{Build, Character, TeamComposition};

/// Normalize a character name into its lookup key.
///
/// Lower-cases the input and strips every whitespace character, so
/// `" Kazuha "` and `"KAZUHA"` both resolve to `"kazuha"`.
pub fn slugify(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Read-only collection of characters, builds and team compositions.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeStore {
    characters: BTreeMap<String, Character>,
    builds: BTreeMap<String, Vec<Build>>,
    teams: BTreeMap<String, Vec<TeamComposition>>,
}

impl KnowledgeStore {
    /// Build a store from raw records, rejecting inconsistent data.
    ///
    /// Builds and teams keep the relative order in which they were given.
    pub fn new(
        characters: Vec<Character>,
        builds: Vec<Build>,
        teams: Vec<TeamComposition>,
    ) -> Result<Self, KnowledgeError> {
        let mut store = Self::default();

        for character in characters {
            if character.key.is_empty() || slugify(&character.key) != character.key {
                return Err(KnowledgeError::InvalidKey(character.key));
            }
            if !matches!(character.rarity, 4 | 5) {
                return Err(KnowledgeError::InvalidRarity {
                    key: character.key,
                    rarity: character.rarity,
                });
            }
            if store.characters.contains_key(&character.key) {
                return Err(KnowledgeError::DuplicateKey(character.key));
            }
            store.characters.insert(character.key.clone(), character);
        }

        for build in builds {
            if !store.characters.contains_key(&build.character) {
                return Err(KnowledgeError::UnknownBuildOwner {
                    character: build.character,
                    role: build.role,
                });
            }
            store
                .builds
                .entry(build.character.clone())
                .or_default()
                .push(build);
        }

        for team in teams {
            store.check_team(&team)?;
            store
                .teams
                .entry(team.centerpiece.clone())
                .or_default()
                .push(team);
        }

        debug!(
            characters = store.characters.len(),
            builds = store.builds.values().map(Vec::len).sum::<usize>(),
            teams = store.teams.values().map(Vec::len).sum::<usize>(),
            "Knowledge store loaded"
        );

        Ok(store)
    }

    /// Build the store from the compiled-in data set.
    pub fn seeded() -> Result<Self, KnowledgeError> {
        info!("Loading compiled-in knowledge base");
        Self::new(seed::characters(), seed::builds(), seed::teams())
    }

    fn check_team(&self, team: &TeamComposition) -> Result<(), KnowledgeError> {
        if !(1..=3).contains(&team.members.len()) {
            return Err(KnowledgeError::InvalidTeamSize {
                team: team.name.clone(),
                size: team.members.len(),
            });
        }

        let mut seen = HashSet::new();
        for key in std::iter::once(&team.centerpiece).chain(team.members.iter()) {
            if !self.characters.contains_key(key) {
                return Err(KnowledgeError::UnknownTeamMember {
                    team: team.name.clone(),
                    character: key.clone(),
                });
            }
            if !seen.insert(key) {
                return Err(KnowledgeError::RepeatedTeamMember {
                    team: team.name.clone(),
                    character: key.clone(),
                });
            }
        }

        Ok(())
    }

    /// Look up a character by (unnormalized) name.
    pub fn character(&self, name: &str) -> Option<&Character> {
        self.characters.get(&slugify(name))
    }

    /// Builds recorded for a character, in insertion order.
    ///
    /// Empty when the character is unknown or has no builds.
    pub fn builds_for(&self, name: &str) -> &[Build] {
        self.builds
            .get(&slugify(name))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Teams whose centerpiece is the given character, in insertion order.
    pub fn teams_for(&self, name: &str) -> &[TeamComposition] {
        self.teams
            .get(&slugify(name))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Display name for a character key, falling back to the key itself.
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.characters
            .get(key)
            .map(|c| c.name.as_str())
            .unwrap_or(key)
    }

    /// All characters keyed by slug.
    pub fn characters(&self) -> &BTreeMap<String, Character> {
        &self.characters
    }

    /// All builds keyed by owning character slug.
    pub fn builds(&self) -> &BTreeMap<String, Vec<Build>> {
        &self.builds
    }

    /// All team compositions keyed by centerpiece slug.
    pub fn teams(&self) -> &BTreeMap<String, Vec<TeamComposition>> {
        &self.teams
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::knowledge::types::{Element, WeaponType};

    fn character(key: &str, rarity: u8) -> Character {
        Character {
            key: key.to_string(),
            name: key.to_uppercase(),
            element: Element::Geo,
            weapon_type: WeaponType::Polearm,
            rarity,
            role: "Support".to_string(),
            description: "test".to_string(),
        }
    }

    fn team(name: &str, centerpiece: &str, members: &[&str]) -> TeamComposition {
        TeamComposition {
            name: name.to_string(),
            centerpiece: centerpiece.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
            synergy: "test".to_string(),
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Kazuha"), "kazuha");
        assert_eq!(slugify("  NAHIDA \t"), "nahida");
        assert_eq!(slugify("Raiden Shogun"), "raidenshogun");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_seeded_store_is_consistent() {
        let store = KnowledgeStore::seeded().unwrap();
        assert!(store.character("kazuha").is_some());
        assert!(store.character("Mavuika").is_some());
        assert_eq!(store.builds_for("mavuika").len(), 2);
        assert!(!store.teams_for("neuvillette").is_empty());
    }

    #[test]
    fn test_lookup_is_case_and_whitespace_insensitive() {
        let store = KnowledgeStore::seeded().unwrap();
        let a = store.character("kazuha").unwrap();
        let b = store.character(" KaZuHa ").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_character_lookups_are_empty() {
        let store = KnowledgeStore::seeded().unwrap();
        assert!(store.character("unknown_character_xyz").is_none());
        assert!(store.builds_for("unknown_character_xyz").is_empty());
        assert!(store.teams_for("unknown_character_xyz").is_empty());
    }

    #[test]
    fn test_rejects_duplicate_key() {
        let result = KnowledgeStore::new(
            vec![character("zhongli", 5), character("zhongli", 5)],
            vec![],
            vec![],
        );
        assert_eq!(
            result.unwrap_err(),
            KnowledgeError::DuplicateKey("zhongli".to_string())
        );
    }

    #[test]
    fn test_rejects_invalid_rarity() {
        let result = KnowledgeStore::new(vec![character("zhongli", 3)], vec![], vec![]);
        assert!(matches!(
            result,
            Err(KnowledgeError::InvalidRarity { rarity: 3, .. })
        ));
    }

    #[test]
    fn test_rejects_non_slug_key() {
        let result = KnowledgeStore::new(vec![character("Zhong Li", 5)], vec![], vec![]);
        assert!(matches!(result, Err(KnowledgeError::InvalidKey(_))));
    }

    #[test]
    fn test_rejects_build_for_unknown_character() {
        let build = Build {
            character: "ghost".to_string(),
            role: "DPS".to_string(),
            main_stats: BTreeMap::new(),
            artifact_sets: vec![],
            weapons: vec![],
            substats_priority: vec![],
            talent_priority: vec![],
        };
        let result = KnowledgeStore::new(vec![character("zhongli", 5)], vec![build], vec![]);
        assert!(matches!(
            result,
            Err(KnowledgeError::UnknownBuildOwner { .. })
        ));
    }

    #[test]
    fn test_rejects_team_with_unknown_member() {
        let result = KnowledgeStore::new(
            vec![character("zhongli", 5)],
            vec![],
            vec![team("Shield", "zhongli", &["ghost"])],
        );
        assert_eq!(
            result.unwrap_err(),
            KnowledgeError::UnknownTeamMember {
                team: "Shield".to_string(),
                character: "ghost".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_bad_team_sizes() {
        let chars = vec![
            character("a", 4),
            character("b", 4),
            character("c", 4),
            character("d", 4),
            character("e", 4),
        ];

        let empty = KnowledgeStore::new(chars.clone(), vec![], vec![team("Solo", "a", &[])]);
        assert!(matches!(
            empty,
            Err(KnowledgeError::InvalidTeamSize { size: 0, .. })
        ));

        let crowded = KnowledgeStore::new(
            chars,
            vec![],
            vec![team("Crowd", "a", &["b", "c", "d", "e"])],
        );
        assert!(matches!(
            crowded,
            Err(KnowledgeError::InvalidTeamSize { size: 4, .. })
        ));
    }

    #[test]
    fn test_rejects_centerpiece_listed_as_member() {
        let result = KnowledgeStore::new(
            vec![character("a", 4), character("b", 4)],
            vec![],
            vec![team("Echo", "a", &["b", "a"])],
        );
        assert!(matches!(
            result,
            Err(KnowledgeError::RepeatedTeamMember { .. })
        ));
    }

    #[test]
    fn test_display_name_falls_back_to_key() {
        let store = KnowledgeStore::seeded().unwrap();
        assert_eq!(store.display_name("kazuha"), "Kazuha");
        assert_eq!(store.display_name("nobody"), "nobody");
    }
}
