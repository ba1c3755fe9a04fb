//! Application layer
//!
//! The two detectors, their lexicon tables, and the service that
//! orchestrates them with the anti-pattern catalog.

pub mod analysis_service;
pub mod anonymizer;
pub mod ceremony_lexicon;
pub mod context_lexicon;
pub mod markers;
pub mod matcher;
pub mod normalize;
pub mod out_of_context;
pub mod scoring_config;
pub mod workshop_detector;

pub use analysis_service::{AnalysisService, CeremonySummary};
pub use out_of_context::detect_out_of_context;
pub use workshop_detector::detect_workshop_type;
