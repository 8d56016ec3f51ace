//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Spell supply (bundled fixture, JSON file, could be a remote store)
//! - Key/value storage for the sign-in session (file, memory)
//! - Clock (for testing)

mod error;
mod external;
mod repos;

pub use error::{SourceError, StorageError};
pub use external::ClockPort;
pub use repos::{SpellSource, StoragePort};

#[cfg(test)]
pub use external::MockClockPort;
#[cfg(test)]
pub use repos::{MockSpellSource, MockStoragePort};
