//! Entity types held by the knowledge store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Elemental affinity of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Anemo,
    Cryo,
    Dendro,
    Electro,
    Geo,
    Hydro,
    Pyro,
}

impl Element {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anemo => "Anemo",
            Self::Cryo => "Cryo",
            Self::Dendro => "Dendro",
            Self::Electro => "Electro",
            Self::Geo => "Geo",
            Self::Hydro => "Hydro",
            Self::Pyro => "Pyro",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weapon class a character can wield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    Bow,
    Catalyst,
    Claymore,
    Polearm,
    Sword,
}

impl WeaponType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bow => "Bow",
            Self::Catalyst => "Catalyst",
            Self::Claymore => "Claymore",
            Self::Polearm => "Polearm",
            Self::Sword => "Sword",
        }
    }
}

impl fmt::Display for WeaponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Artifact slots whose main stat varies.
///
/// Declaration order is the display order (sands, goblet, circlet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentSlot {
    Sands,
    Goblet,
    Circlet,
}

impl EquipmentSlot {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sands => "Sands",
            Self::Goblet => "Goblet",
            Self::Circlet => "Circlet",
        }
    }
}

/// A playable character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Lowercase slug used as the lookup key.
    #[serde(skip)]
    pub key: String,
    pub name: String,
    pub element: Element,
    pub weapon_type: WeaponType,
    /// Either 4 or 5.
    pub rarity: u8,
    pub role: String,
    pub description: String,
}

/// A recommended equipment build for one character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Build {
    /// Key of the owning character.
    #[serde(skip)]
    pub character: String,
    pub role: String,
    pub main_stats: BTreeMap<EquipmentSlot, String>,
    pub artifact_sets: Vec<String>,
    pub weapons: Vec<String>,
    pub substats_priority: Vec<String>,
    pub talent_priority: Vec<String>,
}

/// A team built around a centerpiece character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamComposition {
    pub name: String,
    /// Key of the character the team is built around.
    pub centerpiece: String,
    /// Keys of the other members, in slot order.
    pub members: Vec<String>,
    pub synergy: String,
}
