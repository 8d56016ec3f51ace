//! Data access ports.

use async_trait::async_trait;
use spellbook_domain::Spell;

use super::{SourceError, StorageError};

/// Supplies the spell collection the catalog serves.
///
/// The catalog does not care whether the records come from a bundled list,
/// a file or a network store. Order is significant and is preserved all the
/// way to filtered results.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpellSource: Send + Sync {
    /// Load every spell, in catalog order.
    async fn load_spells(&self) -> Result<Vec<Spell>, SourceError>;

    /// Short description for logs, e.g. a file path.
    fn describe(&self) -> String;
}

/// String key/value storage (the browser `localStorage` equivalent).
#[cfg_attr(test, mockall::automock)]
pub trait StoragePort: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
