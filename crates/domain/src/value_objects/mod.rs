//! Value objects - Immutable objects defined by their attributes

mod filter_options;
mod spell_filter;

pub use filter_options::{
    FilterOptions, LevelOption, CASTING_TIMES, HOMEBREW_SOURCE, SOURCES, SPELLCASTING_CLASSES,
};
pub use spell_filter::SpellFilter;
