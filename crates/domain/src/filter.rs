//! Spell filter engine.
//!
//! [`select`] narrows a spell sequence to the records that satisfy every
//! constrained dimension of a [`SpellFilter`]. Dimensions are ANDed; within
//! `classes` a spell needs only one class in common with the filter.
//!
//! Evaluation is pure and total. The output is a stable subsequence of the
//! input, and each record stops being evaluated at its first failing
//! dimension.

use crate::entities::Spell;
use crate::value_objects::SpellFilter;

impl SpellFilter {
    /// Check if a spell satisfies every constrained dimension.
    pub fn matches(&self, spell: &Spell) -> bool {
        Prepared::new(self).matches(spell)
    }
}

/// Return the spells that match `filter`, in input order.
///
/// A cleared filter returns a copy of the whole input.
pub fn select(spells: &[Spell], filter: &SpellFilter) -> Vec<Spell> {
    let prepared = Prepared::new(filter);
    spells
        .iter()
        .filter(|spell| prepared.matches(spell))
        .cloned()
        .collect()
}

/// Borrowing variant of [`select`].
pub fn select_refs<'a>(spells: &'a [Spell], filter: &SpellFilter) -> Vec<&'a Spell> {
    let prepared = Prepared::new(filter);
    spells
        .iter()
        .filter(|spell| prepared.matches(spell))
        .collect()
}

/// A filter with its search term lowercased once per evaluation pass.
struct Prepared<'f> {
    filter: &'f SpellFilter,
    needle: Option<String>,
}

impl<'f> Prepared<'f> {
    fn new(filter: &'f SpellFilter) -> Self {
        let needle = (!filter.search.is_empty()).then(|| filter.search.to_lowercase());
        Self { filter, needle }
    }

    fn matches(&self, spell: &Spell) -> bool {
        let filter = self.filter;

        // Search filter
        if let Some(ref needle) = self.needle {
            if !spell.name.to_lowercase().contains(needle)
                && !spell.description.to_lowercase().contains(needle)
            {
                return false;
            }
        }

        // Class filter
        if !filter.classes.is_empty()
            && !filter.classes.iter().any(|c| spell.can_be_cast_by(c))
        {
            return false;
        }

        if let Some(level) = filter.level {
            if spell.level != level {
                return false;
            }
        }

        if let Some(school) = filter.school {
            if spell.school != school {
                return false;
            }
        }

        // Casting time is compared verbatim: "Action" is not "1 Action"
        if let Some(ref casting_time) = filter.casting_time {
            if spell.casting_time != *casting_time {
                return false;
            }
        }

        if let Some(ref source) = filter.source {
            if spell.source != *source {
                return false;
            }
        }

        flag_matches(filter.is_homebrew, spell.is_homebrew)
            && flag_matches(filter.is_ritual, spell.is_ritual)
            && flag_matches(filter.requires_concentration, spell.requires_concentration)
    }
}

fn flag_matches(wanted: Option<bool>, actual: bool) -> bool {
    wanted.map_or(true, |wanted| wanted == actual)
}
