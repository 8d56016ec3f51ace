//! Spell catalog use cases.

mod spell_catalog;

pub use spell_catalog::{result_summary, CatalogError, FilteredSpells, SpellCatalog};
