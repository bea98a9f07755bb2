//! Compiled-in knowledge base.

use std::collections::BTreeMap;

use super::types::{Build, Character, Element, EquipmentSlot, TeamComposition, WeaponType};

fn character(
    name: &str,
    element: Element,
    weapon_type: WeaponType,
    rarity: u8,
    role: &str,
    description: &str,
) -> Character {
    Character {
        key: name.to_lowercase(),
        name: name.to_string(),
        element,
        weapon_type,
        rarity,
        role: role.to_string(),
        description: description.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn main_stats(sands: &str, goblet: &str, circlet: &str) -> BTreeMap<EquipmentSlot, String> {
    BTreeMap::from([
        (EquipmentSlot::Sands, sands.to_string()),
        (EquipmentSlot::Goblet, goblet.to_string()),
        (EquipmentSlot::Circlet, circlet.to_string()),
    ])
}

fn team(name: &str, centerpiece: &str, members: &[&str], synergy: &str) -> TeamComposition {
    TeamComposition {
        name: name.to_string(),
        centerpiece: centerpiece.to_string(),
        members: strings(members),
        synergy: synergy.to_string(),
    }
}

pub(super) fn characters() -> Vec<Character> {
    use Element::*;
    use WeaponType::*;

    vec![
        character(
            "Mavuika",
            Pyro,
            Claymore,
            5,
            "DPS/Support",
            "The Pyro Archon with powerful elemental abilities",
        ),
        character(
            "Neuvillette",
            Hydro,
            Catalyst,
            5,
            "DPS",
            "Hydro DPS with charge attack focus",
        ),
        character(
            "Kazuha",
            Anemo,
            Sword,
            5,
            "Support",
            "Anemo support with crowd control and elemental damage bonus",
        ),
        character(
            "Nahida",
            Dendro,
            Catalyst,
            5,
            "Support/DPS",
            "Dendro Archon with reaction-based abilities",
        ),
        character(
            "Furina",
            Hydro,
            Sword,
            5,
            "Support",
            "Hydro support with summoning abilities",
        ),
        character(
            "Zhongli",
            Geo,
            Polearm,
            5,
            "Support",
            "Geo Archon providing an unbreakable shield and universal resistance shred",
        ),
        character(
            "Ayaka",
            Cryo,
            Sword,
            5,
            "DPS",
            "Cryo swordswoman whose dash and burst excel in freeze teams",
        ),
        character(
            "Mona",
            Hydro,
            Catalyst,
            5,
            "Support",
            "Hydro astrologist who applies Omen for a large damage amplification",
        ),
        character(
            "Baizhu",
            Dendro,
            Catalyst,
            5,
            "Healer",
            "Dendro healer with a shield that boosts reaction damage",
        ),
        character(
            "Bennett",
            Pyro,
            Sword,
            4,
            "Support/Healer",
            "Pyro support granting a flat ATK buff and healing from his burst field",
        ),
        character(
            "Xingqiu",
            Hydro,
            Sword,
            4,
            "Sub-DPS",
            "Off-field Hydro applier whose rain swords enable vaporize and freeze",
        ),
        character(
            "Xiangling",
            Pyro,
            Polearm,
            4,
            "Sub-DPS",
            "Off-field Pyro damage dealer through Pyronado",
        ),
        character(
            "Rosaria",
            Cryo,
            Polearm,
            4,
            "Sub-DPS",
            "Cryo sub-DPS who shares CRIT Rate with the party",
        ),
        character(
            "Kaeya",
            Cryo,
            Sword,
            4,
            "Sub-DPS",
            "Cryo applier whose icicles enable melt and freeze",
        ),
        character(
            "Diona",
            Cryo,
            Bow,
            4,
            "Support/Healer",
            "Cryo shielder and healer with steady off-field Cryo",
        ),
    ]
}

pub(super) fn builds() -> Vec<Build> {
    vec![
        Build {
            character: "mavuika".to_string(),
            role: "DPS".to_string(),
            main_stats: main_stats("ATK%", "Pyro DMG%", "CRIT Rate/DMG"),
            artifact_sets: strings(&["Crimson Witch of Flames", "Gilded Dreams"]),
            weapons: strings(&["Wolf's Gravestone", "Serpent Spine", "Prototype Archaic"]),
            substats_priority: strings(&["CRIT Rate", "CRIT DMG", "ATK%", "Energy Recharge"]),
            talent_priority: strings(&["Elemental Skill", "Elemental Burst", "Normal Attack"]),
        },
        Build {
            character: "mavuika".to_string(),
            role: "Support".to_string(),
            main_stats: main_stats("Energy Recharge", "Pyro DMG%", "CRIT Rate"),
            artifact_sets: strings(&["Noblesse Oblige", "Emblem of Severed Fate"]),
            weapons: strings(&["Favonius Greatsword", "Sacrificial Greatsword"]),
            substats_priority: strings(&["Energy Recharge", "CRIT Rate", "ATK%", "CRIT DMG"]),
            talent_priority: strings(&["Elemental Burst", "Elemental Skill", "Normal Attack"]),
        },
        Build {
            character: "neuvillette".to_string(),
            role: "DPS".to_string(),
            main_stats: main_stats("HP%", "Hydro DMG%", "CRIT Rate/DMG"),
            artifact_sets: strings(&["Heart of Depth", "Marechaussee Hunter"]),
            weapons: strings(&[
                "Lost Prayer to the Sacred Winds",
                "The Widsith",
                "Prototype Amber",
            ]),
            substats_priority: strings(&["CRIT Rate", "CRIT DMG", "HP%", "Energy Recharge"]),
            talent_priority: strings(&["Normal Attack", "Elemental Skill", "Elemental Burst"]),
        },
        Build {
            character: "kazuha".to_string(),
            role: "Support".to_string(),
            main_stats: main_stats(
                "Energy Recharge/Elemental Mastery",
                "Elemental Mastery",
                "Elemental Mastery",
            ),
            artifact_sets: strings(&["Viridescent Venerer", "Instructor"]),
            weapons: strings(&["Freedom-Sworn", "Iron Sting", "Sacrificial Sword"]),
            substats_priority: strings(&[
                "Elemental Mastery",
                "Energy Recharge",
                "ATK%",
                "CRIT Rate",
            ]),
            talent_priority: strings(&["Elemental Burst", "Elemental Skill", "Normal Attack"]),
        },
    ]
}

pub(super) fn teams() -> Vec<TeamComposition> {
    vec![
        team(
            "Vape Team",
            "mavuika",
            &["xingqiu", "bennett", "kazuha"],
            "Xingqiu keeps Hydro on enemies for reverse vaporize while Bennett buffs ATK and Kazuha groups and shreds Pyro RES.",
        ),
        team(
            "Melt Team",
            "mavuika",
            &["rosaria", "kaeya", "bennett"],
            "Two Cryo appliers set up forward melt for Mavuika's Pyro hits; Rosaria adds party CRIT Rate.",
        ),
        team(
            "Mono Pyro",
            "mavuika",
            &["bennett", "xiangling", "kazuha"],
            "Pyro resonance stacks with Bennett's buff and Kazuha's Pyro DMG bonus for raw Pyro damage.",
        ),
        team(
            "Hydro Team",
            "neuvillette",
            &["furina", "kazuha", "baizhu"],
            "Furina's fanfare amplifies Neuvillette's charged attacks while Baizhu heals to feed fanfare stacks.",
        ),
        team(
            "Hypercarry",
            "neuvillette",
            &["zhongli", "kazuha", "bennett"],
            "Zhongli's shield lets Neuvillette channel uninterrupted; Kazuha and Bennett stack damage buffs.",
        ),
        team(
            "National Team",
            "kazuha",
            &["xiangling", "xingqiu", "bennett"],
            "Kazuha groups enemies and spreads Pyro and Hydro from off-field applicators for steady vaporize.",
        ),
        team(
            "Freeze Team",
            "kazuha",
            &["ayaka", "mona", "diona"],
            "Permanent freeze keeps enemies still while Kazuha swirls Cryo to shred RES and boost Ayaka's damage.",
        ),
    ]
}
