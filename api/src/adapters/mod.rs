//! Adapters layer
//!
//! Implementations of port traits.

pub mod catalog;

pub use catalog::StaticAntiPatternCatalog;
