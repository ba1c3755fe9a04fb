//! Domain gate entities
//!
//! Verdict of the out-of-context detector: is a transcript about agile
//! project work at all, and if not, which off-topic theme it belongs to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Off-topic theme reported when a transcript is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[serde(rename = "Sport")]
    Sport,
    #[serde(rename = "Divertissement")]
    Entertainment,
    #[serde(rename = "Vie Personnelle")]
    PersonalLife,
    #[serde(rename = "Conversation Générale / Hors Périmètre PM")]
    GeneralConversation,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Sport => "Sport",
            Theme::Entertainment => "Divertissement",
            Theme::PersonalLife => "Vie Personnelle",
            Theme::GeneralConversation => "Conversation Générale / Hors Périmètre PM",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Professional lexicon layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexicalLayer {
    /// L1: project and management vocabulary
    ProjectManagement,
    /// L2: organizational roles
    Roles,
    /// L3: activity nouns
    Activities,
    /// L3 verbs: activity verbs
    ActivityVerbs,
    /// L4: problem and issue vocabulary
    Problems,
}

impl LexicalLayer {
    pub const ALL: [LexicalLayer; 5] = [
        LexicalLayer::ProjectManagement,
        LexicalLayer::Roles,
        LexicalLayer::Activities,
        LexicalLayer::ActivityVerbs,
        LexicalLayer::Problems,
    ];
}

/// Result of the domain gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainGateResult {
    pub is_out_of_context: bool,
    /// 0-100
    pub confidence: u8,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    pub professional_field_score: usize,
    pub layer_counts: BTreeMap<LexicalLayer, usize>,
    /// Terms that drove the verdict (veto terms or professional lexicon hits)
    pub detected_terms: Vec<String>,
}

impl DomainGateResult {
    /// Early return for fragments too short to judge
    pub fn insufficient_evidence() -> Self {
        Self {
            is_out_of_context: false,
            confidence: 0,
            reason: "text too short".to_string(),
            theme: None,
            professional_field_score: 0,
            layer_counts: BTreeMap::new(),
            detected_terms: Vec::new(),
        }
    }

    /// Count for one layer (0 when the layer was not scored)
    pub fn layer_count(&self, layer: LexicalLayer) -> usize {
        self.layer_counts.get(&layer).copied().unwrap_or(0)
    }
}
