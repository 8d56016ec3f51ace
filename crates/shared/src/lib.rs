//! Spellbook Shared - Wire types for the catalog HTTP API
//!
//! - Query-string form of the spell filter
//! - Request body for creating a homebrew spell
//! - Response bodies for spell listings and the sign-in session
//!
//! # Design Principles
//!
//! 1. **No business logic** - parsing and conversion only
//! 2. **Lenient forms** - an empty form field means "no constraint"

pub mod requests;
pub mod responses;

pub use requests::{CreateSpellRequest, RequestError, SpellQuery};
pub use responses::{ErrorResponse, SessionResponse, SpellListResponse};
