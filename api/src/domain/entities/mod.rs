//! Domain entities
//!
//! Plain value types produced by the analyzers. Nothing here is persisted.

pub mod analysis;
pub mod anti_pattern;
pub mod ceremony;
pub mod context;
pub mod detection;

pub use analysis::{AnalysisId, TranscriptAnalysis};
pub use anti_pattern::{AntiPattern, FlaggedAntiPattern, Severity};
pub use ceremony::CeremonyCategory;
pub use context::{DomainGateResult, LexicalLayer, Theme};
pub use detection::{CategoryScore, DetectionResult, MarkerId};
