//! Values a filter UI offers for each dimension.
//!
//! These lists describe choices, not constraints: a [`SpellFilter`] may hold
//! any string, and matching stays exact. Note that the casting-time options
//! ("Action") are not the strings the bundled spells carry ("1 Action").
//!
//! [`SpellFilter`]: super::SpellFilter

use serde::{Deserialize, Serialize};

use crate::entities::{SpellLevel, SpellSchool};

/// Classes with a spell list.
pub const SPELLCASTING_CLASSES: [&str; 9] = [
    "Artificer",
    "Bard",
    "Cleric",
    "Druid",
    "Paladin",
    "Ranger",
    "Sorcerer",
    "Warlock",
    "Wizard",
];

pub const CASTING_TIMES: [&str; 6] = [
    "Action",
    "Bonus Action",
    "Reaction",
    "1 Minute",
    "10 Minutes",
    "1 Hour",
];

pub const SOURCES: [&str; 4] = ["PHB", "Xanathar's Guide", "Tasha's Cauldron", "Homebrew"];

/// Source label given to user-created spells.
pub const HOMEBREW_SOURCE: &str = "Homebrew";

/// A selectable spell level with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelOption {
    pub value: SpellLevel,
    pub label: String,
}

/// Everything a filter form needs to render its controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub classes: Vec<String>,
    pub schools: Vec<SpellSchool>,
    pub levels: Vec<LevelOption>,
    pub casting_times: Vec<String>,
    pub sources: Vec<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            classes: SPELLCASTING_CLASSES.iter().map(|c| c.to_string()).collect(),
            schools: SpellSchool::ALL.to_vec(),
            levels: SpellLevel::all()
                .map(|value| LevelOption {
                    value,
                    label: value.label(),
                })
                .collect(),
            casting_times: CASTING_TIMES.iter().map(|t| t.to_string()).collect(),
            sources: SOURCES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
