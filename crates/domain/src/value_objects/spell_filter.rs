//! The user's current narrowing criteria over the spell catalog.
//!
//! Every dimension is either neutral (no constraint) or a concrete
//! constraint. Tri-state dimensions are `Option`s so that "require false"
//! and "level 0" stay distinct from "don't care".
//!
//! A filter is never edited in place: each `with_*` method consumes the
//! current value and returns the next one.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entities::{SpellLevel, SpellSchool};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellFilter {
    /// Case-insensitive substring of name or description; empty = neutral
    pub search: String,
    /// Matches when the spell shares at least one class; empty = neutral
    pub classes: BTreeSet<String>,
    pub level: Option<SpellLevel>,
    pub school: Option<SpellSchool>,
    /// Exact casting time string, e.g. "1 Bonus Action"
    pub casting_time: Option<String>,
    pub source: Option<String>,
    pub is_homebrew: Option<bool>,
    pub is_ritual: Option<bool>,
    pub requires_concentration: Option<bool>,
}

impl SpellFilter {
    /// The neutral filter: every dimension unconstrained.
    pub const CLEARED: SpellFilter = SpellFilter {
        search: String::new(),
        classes: BTreeSet::new(),
        level: None,
        school: None,
        casting_time: None,
        source: None,
        is_homebrew: None,
        is_ritual: None,
        requires_concentration: None,
    };

    pub fn cleared() -> Self {
        Self::CLEARED
    }

    /// True when no dimension is constrained.
    ///
    /// Drives the "clear filters" affordance.
    pub fn is_cleared(&self) -> bool {
        *self == Self::CLEARED
    }

    /// Number of constrained dimensions.
    pub fn active_dimensions(&self) -> usize {
        [
            !self.search.is_empty(),
            !self.classes.is_empty(),
            self.level.is_some(),
            self.school.is_some(),
            self.casting_time.is_some(),
            self.source.is_some(),
            self.is_homebrew.is_some(),
            self.is_ritual.is_some(),
            self.requires_concentration.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Replace the whole class set.
    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Toggle one class: add it if absent, remove it if present.
    pub fn with_class_toggled(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.remove(&class) {
            self.classes.insert(class);
        }
        self
    }

    pub fn with_level(mut self, level: Option<SpellLevel>) -> Self {
        self.level = level;
        self
    }

    pub fn with_school(mut self, school: Option<SpellSchool>) -> Self {
        self.school = school;
        self
    }

    pub fn with_casting_time(mut self, casting_time: Option<String>) -> Self {
        self.casting_time = casting_time;
        self
    }

    pub fn with_source(mut self, source: Option<String>) -> Self {
        self.source = source;
        self
    }

    pub fn with_homebrew(mut self, is_homebrew: Option<bool>) -> Self {
        self.is_homebrew = is_homebrew;
        self
    }

    pub fn with_ritual(mut self, is_ritual: Option<bool>) -> Self {
        self.is_ritual = is_ritual;
        self
    }

    pub fn with_concentration(mut self, requires_concentration: Option<bool>) -> Self {
        self.requires_concentration = requires_concentration;
        self
    }
}

impl Default for SpellFilter {
    fn default() -> Self {
        Self::CLEARED
    }
}
