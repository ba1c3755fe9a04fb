//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks keep the catalog port explicit: tests decide exactly which
//! entries are returned and whether the lookup fails.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
