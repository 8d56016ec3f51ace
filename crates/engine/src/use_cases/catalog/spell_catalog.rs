//! Spell catalog service.
//!
//! Holds the spell collection loaded from a [`SpellSource`] plus any
//! homebrew spells signed-in users have created, and answers filter queries
//! against the combined list.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use spellbook_domain::{
    select, DomainError, FilterOptions, NewSpell, Spell, SpellFilter, User,
};

use crate::infrastructure::ports::{ClockPort, SourceError, SpellSource};

/// Errors that can occur in the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
    #[error("Invalid spell: {0}")]
    InvalidSpell(#[from] DomainError),
    #[error("Spell not found: {0}")]
    NotFound(String),
    #[error("A spell named '{0}' already exists")]
    Duplicate(String),
}

/// Result of filtering the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredSpells {
    /// Matching spells, in catalog order.
    pub spells: Vec<Spell>,
    /// Size of the unfiltered catalog.
    pub total: usize,
    /// Whether the filter constrained any dimension.
    pub filters_active: bool,
}

impl FilteredSpells {
    pub fn shown(&self) -> usize {
        self.spells.len()
    }

    pub fn summary(&self) -> String {
        result_summary(self.shown())
    }
}

/// "Showing 1 spell" / "Showing N spells".
pub fn result_summary(count: usize) -> String {
    if count == 1 {
        "Showing 1 spell".to_string()
    } else {
        format!("Showing {} spells", count)
    }
}

/// Service for browsing and extending the spell catalog.
pub struct SpellCatalog {
    source: Arc<dyn SpellSource>,
    clock: Arc<dyn ClockPort>,
    /// Spells from the source, in source order.
    loaded: RwLock<Vec<Spell>>,
    /// User-created spells, in creation order.
    created: RwLock<Vec<Spell>>,
    options: FilterOptions,
}

impl SpellCatalog {
    /// Create an empty catalog. Call [`SpellCatalog::load`] to populate it.
    pub fn new(source: Arc<dyn SpellSource>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            source,
            clock,
            loaded: RwLock::new(Vec::new()),
            created: RwLock::new(Vec::new()),
            options: FilterOptions::default(),
        }
    }

    /// Pull the full collection from the source, replacing what was loaded
    /// before. User-created spells are kept.
    pub async fn load(&self) -> Result<usize, CatalogError> {
        let spells = self.source.load_spells().await?;
        for spell in &spells {
            spell.validate()?;
        }

        let count = spells.len();
        *self.loaded.write().await = spells;
        tracing::info!(count, source = %self.source.describe(), "Loaded spells");
        Ok(count)
    }

    /// Every spell: loaded ones first, then user-created ones.
    pub async fn all(&self) -> Vec<Spell> {
        let loaded = self.loaded.read().await;
        let created = self.created.read().await;
        loaded.iter().chain(created.iter()).cloned().collect()
    }

    /// Number of spells in the catalog.
    pub async fn count(&self) -> usize {
        self.loaded.read().await.len() + self.created.read().await.len()
    }

    /// Get spells matching a filter.
    ///
    /// Re-evaluates the whole catalog on every call.
    pub async fn filter(&self, filter: &SpellFilter) -> FilteredSpells {
        let all = self.all().await;
        let spells = select(&all, filter);
        tracing::debug!(
            total = all.len(),
            shown = spells.len(),
            active_dimensions = filter.active_dimensions(),
            "Filtered spells"
        );
        FilteredSpells {
            spells,
            total: all.len(),
            filters_active: !filter.is_cleared(),
        }
    }

    /// Get a spell by ID.
    pub async fn get(&self, id: &str) -> Result<Spell, CatalogError> {
        let loaded = self.loaded.read().await;
        let created = self.created.read().await;
        loaded
            .iter()
            .chain(created.iter())
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Spells a single class can cast.
    pub async fn spells_for_class(&self, class: &str) -> FilteredSpells {
        self.filter(&SpellFilter::cleared().with_classes([class]))
            .await
    }

    /// Add a homebrew spell authored by `author`.
    ///
    /// Names are unique across the catalog, ignoring case.
    pub async fn create_homebrew(
        &self,
        author: &User,
        draft: NewSpell,
    ) -> Result<Spell, CatalogError> {
        let spell = draft.into_homebrew(Uuid::new_v4().to_string(), author, self.clock.now())?;

        let loaded = self.loaded.read().await;
        let mut created = self.created.write().await;
        let wanted = spell.name.to_lowercase();
        if loaded
            .iter()
            .chain(created.iter())
            .any(|s| s.name.to_lowercase() == wanted)
        {
            return Err(CatalogError::Duplicate(spell.name));
        }

        created.push(spell.clone());
        tracing::info!(
            spell_id = %spell.id,
            name = %spell.name,
            created_by = %author.id,
            "Created homebrew spell"
        );
        Ok(spell)
    }

    /// Choices a filter form should offer.
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }
}
