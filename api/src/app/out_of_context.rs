//! Domain gate
//!
//! Decides whether a transcript is about agile project work. Off-topic
//! themes are vetoed first (sports, entertainment, personal life), then the
//! text must show breadth across the professional lexicon layers.

use std::collections::BTreeMap;

use super::context_lexicon::{VetoHit, PROFESSIONAL_LAYERS, VETO_RULES};
use super::normalize::{normalize_text, trimmed_len};
use super::scoring_config::{
    GENERAL_CONVERSATION_FLOOR, MIN_CORE_LAYER_HITS, MIN_FIELDS_WITH_TERMS,
    MIN_PROFESSIONAL_HITS, MIN_TEXT_CHARS, NO_PROFESSIONAL_TERMS_CONFIDENCE,
};
use crate::domain::entities::{DomainGateResult, LexicalLayer, Theme};

/// Classify a transcript as in or out of the project-management domain.
///
/// Total: every input yields a result. Inputs shorter than
/// `MIN_TEXT_CHARS` after trimming are never vetoed.
pub fn detect_out_of_context(text: &str) -> DomainGateResult {
    if trimmed_len(text) < MIN_TEXT_CHARS {
        return DomainGateResult::insufficient_evidence();
    }

    let normalized = normalize_text(text);

    // First matching veto wins
    if let Some(hit) = VETO_RULES.iter().find_map(|rule| rule.evaluate(&normalized)) {
        tracing::debug!(theme = %hit.theme, confidence = hit.confidence, "veto fired");
        return vetoed(hit);
    }

    score_professional_field(&normalized)
}

fn vetoed(hit: VetoHit) -> DomainGateResult {
    let reason = match hit.theme {
        Theme::Sport => format!(
            "Contenu sportif détecté ({} nom(s) propre(s), {} terme(s) du lexique sportif)",
            hit.proper_noun_hits, hit.lexicon_hits
        ),
        Theme::Entertainment => format!(
            "Contenu de divertissement détecté ({} terme(s))",
            hit.lexicon_hits
        ),
        Theme::PersonalLife => format!(
            "Conversation d'ordre personnel détectée ({} terme(s))",
            hit.lexicon_hits
        ),
        Theme::GeneralConversation => "Conversation générale".to_string(),
    };

    DomainGateResult {
        is_out_of_context: true,
        confidence: hit.confidence,
        reason,
        theme: Some(hit.theme),
        professional_field_score: 0,
        layer_counts: BTreeMap::new(),
        detected_terms: hit.terms,
    }
}

fn score_professional_field(normalized: &str) -> DomainGateResult {
    let mut layer_counts = BTreeMap::new();
    let mut detected_terms: Vec<String> = Vec::new();

    for (layer, matcher) in PROFESSIONAL_LAYERS.iter() {
        let hits = matcher.matches(normalized);
        layer_counts.insert(*layer, hits.len());
        for term in hits {
            if !detected_terms.iter().any(|t| t == term) {
                detected_terms.push(term.to_string());
            }
        }
    }

    let count = |layer: LexicalLayer| layer_counts.get(&layer).copied().unwrap_or(0);
    let l1 = count(LexicalLayer::ProjectManagement);
    let l2 = count(LexicalLayer::Roles);
    let l3 = count(LexicalLayer::Activities);
    let l3_verbs = count(LexicalLayer::ActivityVerbs);
    let l4 = count(LexicalLayer::Problems);

    let total = l1 + l2 + l3 + l3_verbs + l4;
    let fields_with_terms = layer_counts.values().filter(|&&c| c > 0).count();
    let has_core = l1 >= MIN_CORE_LAYER_HITS || l3 >= MIN_CORE_LAYER_HITS;
    let has_professional_context = fields_with_terms >= MIN_FIELDS_WITH_TERMS
        && total >= MIN_PROFESSIONAL_HITS
        && has_core
        && (l1 + l2 >= 2 || l3 + l3_verbs + l4 >= 3);

    tracing::debug!(
        total,
        fields_with_terms,
        has_core,
        has_professional_context,
        "professional field scored"
    );

    if !has_professional_context {
        return DomainGateResult {
            is_out_of_context: true,
            confidence: general_conversation_confidence(total),
            reason: format!(
                "Vocabulaire projet insuffisant ({} couche(s) sur 5, {} terme(s))",
                fields_with_terms, total
            ),
            theme: Some(Theme::GeneralConversation),
            professional_field_score: total,
            layer_counts,
            detected_terms,
        };
    }

    DomainGateResult {
        is_out_of_context: false,
        confidence: 100,
        reason: format!(
            "Contexte projet confirmé ({} couche(s) sur 5, {} terme(s))",
            fields_with_terms, total
        ),
        theme: None,
        professional_field_score: total,
        layer_counts,
        detected_terms,
    }
}

/// 98 with no professional term at all, else `max(85, 95 - 2 * total)`
fn general_conversation_confidence(total: usize) -> u8 {
    if total == 0 {
        return NO_PROFESSIONAL_TERMS_CONFIDENCE;
    }
    let raw = 95 - 2 * total.min(50) as i64;
    raw.max(GENERAL_CONVERSATION_FLOOR) as u8
}
