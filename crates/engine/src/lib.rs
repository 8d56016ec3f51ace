//! Spellbook Engine library.
//!
//! Serves the spell catalog over HTTP.
//!
//! ## Structure
//!
//! - `use_cases/` - Catalog browsing and mock sign-in
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment configuration

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use config::AppConfig;
