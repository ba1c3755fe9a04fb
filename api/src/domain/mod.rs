//! Domain layer
//!
//! Value types and ports for transcript analysis.
//! - `entities`: ceremony, gate and detection types
//! - `ports`: traits for collaborators such as the anti-pattern catalog

pub mod entities;
pub mod ports;
