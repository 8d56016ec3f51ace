//! Spell entity for the spell catalog.
//!
//! A spell record is an immutable value. Only `level` and `school` are
//! structured; casting time, range, duration and components are kept as the
//! display strings the catalog shows, and filtering compares them verbatim.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;
use crate::error::DomainError;
use crate::value_objects::HOMEBREW_SOURCE;

/// A spell or magical ability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    /// Opaque identifier, stable for the record's lifetime
    pub id: String,
    /// Display name of the spell
    pub name: String,
    /// Spell level (cantrip = 0)
    pub level: SpellLevel,
    /// School of magic
    pub school: SpellSchool,
    /// How long it takes to cast, e.g. "1 Action"
    pub casting_time: String,
    /// Range of the spell, e.g. "150 feet"
    pub range: String,
    /// Component codes, e.g. ["V", "S", "M"]
    #[serde(default)]
    pub components: Vec<String>,
    /// How long the spell lasts
    pub duration: String,
    /// Full description of the spell's effects
    pub description: String,
    /// Classes that can learn this spell
    #[serde(default)]
    pub classes: Vec<String>,
    /// Provenance label, e.g. "PHB" or "Homebrew"
    pub source: String,
    #[serde(default)]
    pub is_homebrew: bool,
    #[serde(default)]
    pub is_ritual: bool,
    #[serde(default)]
    pub requires_concentration: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Id of the user who created a homebrew spell
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Spell {
    /// Check the invariants a record must hold before it enters a catalog.
    ///
    /// The level range is already guaranteed by [`SpellLevel`].
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::validation("Spell id cannot be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "Spell '{}' has an empty name",
                self.id
            )));
        }
        Ok(())
    }

    /// Whether `class` appears in this spell's class list (exact match).
    pub fn can_be_cast_by(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// A user-authored spell before the catalog assigns its identity.
///
/// Homebrew provenance (`source`, `is_homebrew`, creator and timestamp) is
/// not part of the draft; [`NewSpell::into_homebrew`] stamps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSpell {
    pub name: String,
    pub level: SpellLevel,
    pub school: SpellSchool,
    pub casting_time: String,
    pub range: String,
    #[serde(default)]
    pub components: Vec<String>,
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub is_ritual: bool,
    #[serde(default)]
    pub requires_concentration: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewSpell {
    /// Turn the draft into a homebrew catalog record.
    pub fn into_homebrew(
        self,
        id: impl Into<String>,
        created_by: &User,
        created_at: DateTime<Utc>,
    ) -> Result<Spell, DomainError> {
        let spell = Spell {
            id: id.into(),
            name: self.name.trim().to_string(),
            level: self.level,
            school: self.school,
            casting_time: self.casting_time,
            range: self.range,
            components: self.components,
            duration: self.duration,
            description: self.description,
            classes: self.classes,
            source: HOMEBREW_SOURCE.to_string(),
            is_homebrew: true,
            is_ritual: self.is_ritual,
            requires_concentration: self.requires_concentration,
            image_url: self.image_url,
            created_by: Some(created_by.id.clone()),
            created_at: Some(created_at),
        };
        spell.validate()?;
        Ok(spell)
    }
}

/// Spell level, 0 through 9.
///
/// Level 0 is the cantrip tier. Construction is the only place the range is
/// checked; everything downstream can rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SpellLevel(u8);

impl SpellLevel {
    /// Highest spell level.
    pub const MAX: u8 = 9;

    /// The cantrip tier.
    pub const CANTRIP: SpellLevel = SpellLevel(0);

    /// Create a level, rejecting anything above [`SpellLevel::MAX`].
    pub fn new(level: u8) -> Result<Self, DomainError> {
        if level > Self::MAX {
            return Err(DomainError::validation(format!(
                "Spell level must be between 0 and {}, got {}",
                Self::MAX,
                level
            )));
        }
        Ok(Self(level))
    }

    /// Convert to numeric level (cantrip = 0).
    pub fn as_number(&self) -> u8 {
        self.0
    }

    /// Check if this is a cantrip.
    pub fn is_cantrip(&self) -> bool {
        self.0 == 0
    }

    /// Display label: "Cantrip" or "Level N".
    pub fn label(&self) -> String {
        if self.is_cantrip() {
            "Cantrip".to_string()
        } else {
            format!("Level {}", self.0)
        }
    }

    /// Every level from cantrip to 9, ascending.
    pub fn all() -> impl Iterator<Item = SpellLevel> {
        (0..=Self::MAX).map(SpellLevel)
    }
}

impl TryFrom<u8> for SpellLevel {
    type Error = DomainError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<SpellLevel> for u8 {
    fn from(level: SpellLevel) -> Self {
        level.0
    }
}

impl fmt::Display for SpellLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The eight schools of magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellSchool {
    Abjuration,
    Conjuration,
    Divination,
    Enchantment,
    Evocation,
    Illusion,
    Necromancy,
    Transmutation,
}

impl SpellSchool {
    /// All schools in alphabetical order.
    pub const ALL: [SpellSchool; 8] = [
        SpellSchool::Abjuration,
        SpellSchool::Conjuration,
        SpellSchool::Divination,
        SpellSchool::Enchantment,
        SpellSchool::Evocation,
        SpellSchool::Illusion,
        SpellSchool::Necromancy,
        SpellSchool::Transmutation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SpellSchool::Abjuration => "Abjuration",
            SpellSchool::Conjuration => "Conjuration",
            SpellSchool::Divination => "Divination",
            SpellSchool::Enchantment => "Enchantment",
            SpellSchool::Evocation => "Evocation",
            SpellSchool::Illusion => "Illusion",
            SpellSchool::Necromancy => "Necromancy",
            SpellSchool::Transmutation => "Transmutation",
        }
    }
}

impl fmt::Display for SpellSchool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpellSchool {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|school| school.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::parse(format!("Unknown spell school: {}", s)))
    }
}
