//! Spellbook domain: spell records, the filter specification and the
//! filter engine that evaluates one against the other.
//!
//! This crate does no I/O. Everything here is synchronous and pure.

pub mod entities;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod value_objects;

pub use entities::{AuthProvider, NewSpell, Spell, SpellLevel, SpellSchool, User};
pub use error::DomainError;
pub use filter::{select, select_refs};
pub use value_objects::{
    FilterOptions, LevelOption, SpellFilter, CASTING_TIMES, HOMEBREW_SOURCE, SOURCES,
    SPELLCASTING_CLASSES,
};
