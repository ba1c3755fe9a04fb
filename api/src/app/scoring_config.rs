//! Scoring constants
//!
//! Thresholds and confidence parameters shared by the domain gate and the
//! workshop detector.

/// Trimmed inputs shorter than this (in chars) are never judged
pub const MIN_TEXT_CHARS: usize = 20;

/// Confidence when the sports veto fires
pub const SPORTS_VETO_CONFIDENCE: u8 = 99;

/// Confidence when the entertainment veto fires
pub const ENTERTAINMENT_VETO_CONFIDENCE: u8 = 98;

/// Confidence when the personal-life veto fires
pub const PERSONAL_VETO_CONFIDENCE: u8 = 97;

/// Minimum number of lexical layers (of 5) with at least one hit
pub const MIN_FIELDS_WITH_TERMS: usize = 3;

/// Minimum total professional lexicon hits
pub const MIN_PROFESSIONAL_HITS: usize = 5;

/// L1 or L3 hits required for a project-management core
pub const MIN_CORE_LAYER_HITS: usize = 2;

/// Confidence of an out-of-context verdict when no professional term matched
pub const NO_PROFESSIONAL_TERMS_CONFIDENCE: u8 = 98;

/// Floor of the out-of-context confidence when some terms matched
pub const GENERAL_CONVERSATION_FLOOR: i64 = 85;

/// Composite points within which the verb channel may overturn the leader
pub const VERB_TIE_BREAK_MARGIN: u32 = 2;

/// Confidence base before the winning score contribution
pub const CONFIDENCE_BASE: f64 = 40.0;

/// Confidence gained per composite point, up to `CONFIDENCE_SCORE_CAP` points
pub const CONFIDENCE_PER_POINT: f64 = 6.0;

pub const CONFIDENCE_SCORE_CAP: u32 = 10;

/// Confidence lost as the runner-up closes in on the winner
pub const CONFIDENCE_TIE_PENALTY: f64 = 30.0;

/// Bounds for a detected (non-fallback) ceremony
pub const CONFIDENCE_MIN: u8 = 30;
pub const CONFIDENCE_MAX: u8 = 100;
