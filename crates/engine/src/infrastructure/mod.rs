//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod content_sources;
pub mod ports;
pub mod storage;
