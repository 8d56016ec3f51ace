//! Application state and composition.

use std::sync::Arc;

use crate::use_cases::{MockAuth, SpellCatalog};

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub catalog: Arc<SpellCatalog>,
    pub auth: Arc<MockAuth>,
}

impl App {
    pub fn new(catalog: Arc<SpellCatalog>, auth: Arc<MockAuth>) -> Self {
        Self { catalog, auth }
    }
}
