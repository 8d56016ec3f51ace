//! Spells read from a JSON file.
//!
//! The file holds a JSON array of spell objects in the same camelCase shape
//! the HTTP API returns.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use spellbook_domain::Spell;
use tokio::fs;

use crate::infrastructure::ports::{SourceError, SpellSource};

pub struct JsonFileSpellSource {
    path: PathBuf,
}

impl JsonFileSpellSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SpellSource for JsonFileSpellSource {
    async fn load_spells(&self) -> Result<Vec<Spell>, SourceError> {
        let location = self.path.display();
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::read(&location, e))?;
        serde_json::from_str(&content).map_err(|e| SourceError::parse(&location, e))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
