//! Spell source implementations.
//!
//! Concrete types that satisfy the `SpellSource` port: the bundled example
//! list and a JSON file on disk.

pub mod fixture;
pub mod json_file;

pub use fixture::FixtureSpellSource;
pub use json_file::JsonFileSpellSource;
