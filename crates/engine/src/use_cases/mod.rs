//! Use cases - application orchestration on top of the domain.
//!
//! Each module owns one capability and talks to the outside world through
//! the ports in [`crate::infrastructure::ports`].

pub mod auth;
pub mod catalog;

pub use auth::{AuthError, MockAuth};
pub use catalog::{CatalogError, FilteredSpells, SpellCatalog};
