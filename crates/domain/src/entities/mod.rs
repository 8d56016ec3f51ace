//! Domain entities - Core business objects with identity

mod spell;
mod user;

pub use spell::{NewSpell, Spell, SpellLevel, SpellSchool};
pub use user::{AuthProvider, User};
