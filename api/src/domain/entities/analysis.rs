//! Transcript analysis entity
//!
//! Aggregate returned by the full analysis pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::{DetectionResult, DomainGateResult, FlaggedAntiPattern};

/// Deterministic identifier of an analyzed transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisId(pub Uuid);

impl AnalysisId {
    /// Derive the id from the transcript text (same text, same id)
    pub fn for_text(text: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        let result = hasher.finalize();
        // First 16 bytes of the digest
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&result[..16]);
        Self(Uuid::from_bytes(bytes))
    }
}

impl std::fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Full analysis of a transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptAnalysis {
    pub id: AnalysisId,
    pub analyzed_at: DateTime<Utc>,
    pub context: DomainGateResult,
    pub workshop: DetectionResult,
    /// Empty when the transcript is out of context
    pub anti_patterns: Vec<FlaggedAntiPattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymized_text: Option<String>,
}

impl TranscriptAnalysis {
    /// Anti-patterns with evidence in the transcript
    pub fn detected_anti_patterns(&self) -> impl Iterator<Item = &FlaggedAntiPattern> {
        self.anti_patterns.iter().filter(|a| a.detected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_id_is_deterministic() {
        let a = AnalysisId::for_text("Hier j'ai terminé la story");
        let b = AnalysisId::for_text("Hier j'ai terminé la story");
        let c = AnalysisId::for_text("Aujourd'hui je continue");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
