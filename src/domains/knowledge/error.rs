//! Knowledge store error types.

use thiserror::Error;

/// Inconsistencies detected while loading the static data.
#[derive(Debug, Error, PartialEq)]
pub enum KnowledgeError {
    /// A character key is empty or not in slug form.
    #[error("Invalid character key '{0}': keys must be non-empty lowercase slugs")]
    InvalidKey(String),

    /// Two characters share the same key.
    #[error("Duplicate character key: {0}")]
    DuplicateKey(String),

    /// Rarity outside of {4, 5}.
    #[error("Invalid rarity {rarity} for character '{key}' (expected 4 or 5)")]
    InvalidRarity { key: String, rarity: u8 },

    /// A build references a character that does not exist.
    #[error("Build '{role}' references unknown character '{character}'")]
    UnknownBuildOwner { character: String, role: String },

    /// A team references a character that does not exist.
    #[error("Team '{team}' references unknown character '{character}'")]
    UnknownTeamMember { team: String, character: String },

    /// A team has the wrong number of members besides its centerpiece.
    #[error("Team '{team}' has {size} members besides its centerpiece (expected 1 to 3)")]
    InvalidTeamSize { team: String, size: usize },

    /// A team lists its centerpiece or another member twice.
    #[error("Team '{team}' lists '{character}' more than once")]
    RepeatedTeamMember { team: String, character: String },
}
