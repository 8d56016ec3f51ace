//! Bundled example spells.

use async_trait::async_trait;
use spellbook_domain::{fixtures, Spell};

use crate::infrastructure::ports::{SourceError, SpellSource};

/// Serves the five example spells shipped with the domain crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSpellSource;

impl FixtureSpellSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpellSource for FixtureSpellSource {
    async fn load_spells(&self) -> Result<Vec<Spell>, SourceError> {
        Ok(fixtures::example_spells())
    }

    fn describe(&self) -> String {
        "bundled examples".to_string()
    }
}
