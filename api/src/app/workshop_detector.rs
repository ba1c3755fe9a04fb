//! Workshop type detector
//!
//! Scores every ceremony profile against a transcript, picks a winner with a
//! verb-based tie-break and derives a deterministic confidence.

use std::collections::BTreeSet;

use super::ceremony_lexicon::{CeremonyProfile, PROFILES};
use super::markers::marker_holds;
use super::normalize::normalize_text;
use super::scoring_config::{
    CONFIDENCE_BASE, CONFIDENCE_MAX, CONFIDENCE_MIN, CONFIDENCE_PER_POINT,
    CONFIDENCE_SCORE_CAP, CONFIDENCE_TIE_PENALTY, VERB_TIE_BREAK_MARGIN,
};
use crate::domain::entities::{CategoryScore, CeremonyCategory, DetectionResult, MarkerId};

const AMBIGUOUS_TAG: &str = "classification-ambigue";

/// Classify a transcript into one of the agile ceremonies.
///
/// Total and deterministic. When no category gathers any evidence the
/// result is `CeremonyCategory::None` with confidence 0.
pub fn detect_workshop_type(text: &str) -> DetectionResult {
    let normalized = normalize_text(text);

    let scores: Vec<CategoryScore> = PROFILES
        .iter()
        .map(|profile| score_category(profile, &normalized))
        .collect();

    let Some(winner) = select_winner(&scores).cloned() else {
        return no_ceremony(scores);
    };

    let runner_up = scores
        .iter()
        .filter(|s| s.category != winner.category)
        .map(|s| s.composite_score)
        .max()
        .unwrap_or(0);
    let confidence = confidence(winner.composite_score, runner_up);

    tracing::debug!(
        category = %winner.category,
        composite = winner.composite_score,
        runner_up,
        confidence,
        "ceremony detected"
    );

    let mut tags: BTreeSet<String> = winner
        .matched_markers
        .iter()
        .filter_map(MarkerId::tag)
        .map(str::to_string)
        .collect();
    if let Some(tag) = winner.category.tag() {
        tags.insert(tag.to_string());
    }
    if runner_up >= winner.composite_score {
        tags.insert(AMBIGUOUS_TAG.to_string());
    }

    let subtype = detect_subtype(winner.category, &normalized);

    DetectionResult {
        category: winner.category,
        justifications: justify(&winner, subtype),
        subtype: subtype.map(str::to_string),
        confidence,
        tags,
        all_scores: sorted(scores),
    }
}

/// Collect all evidence channels for one ceremony
fn score_category(profile: &CeremonyProfile, normalized: &str) -> CategoryScore {
    let mut score = CategoryScore::empty(profile.category);
    score.keyword_hits = profile.keywords.count(normalized) as u32;
    score.pattern_hits = profile.patterns.occurrences(normalized) as u32;
    score.verb_hits = profile.verbs.occurrences(normalized) as u32;

    let (exclusions, positives): (Vec<MarkerId>, Vec<MarkerId>) =
        profile.markers.iter().copied().partition(MarkerId::is_exclusion);

    for marker in positives {
        if marker_holds(marker, normalized) {
            score.marker_hits_positive += 1;
            score.matched_markers.push(marker);
        }
    }

    // Absence of competing signals is only evidence once something points here
    if score.has_positive_evidence() {
        for marker in exclusions {
            if marker_holds(marker, normalized) {
                score.marker_hits_negative += 1;
                score.matched_markers.push(marker);
            }
        }
    }

    score.composite_score = score.keyword_hits
        + score.pattern_hits
        + score.marker_hits_positive
        + score.marker_hits_negative;
    score
}

/// Best composite wins unless a close contender has more ceremony verbs.
/// Exact ties fall back to declaration order.
fn select_winner(scores: &[CategoryScore]) -> Option<&CategoryScore> {
    let best = scores.iter().map(|s| s.composite_score).max()?;
    if best == 0 {
        return None;
    }

    scores
        .iter()
        .filter(|s| s.composite_score + VERB_TIE_BREAK_MARGIN >= best)
        .max_by(|a, b| {
            a.verb_hits
                .cmp(&b.verb_hits)
                .then(a.composite_score.cmp(&b.composite_score))
                .then(b.category.cmp(&a.category))
        })
}

/// `clamp(round(40 + 6 * min(w, 10) - 30 * (1 - margin)), 30, 100)`
/// where `margin = clamp((w - r) / w, 0, 1)`. Zero when nothing won.
///
/// A runner-up level with (or above) the winner is an ambiguous
/// classification and always scores `CONFIDENCE_MIN`.
pub fn confidence(winner: u32, runner_up: u32) -> u8 {
    if winner == 0 {
        return 0;
    }
    if runner_up >= winner {
        return CONFIDENCE_MIN;
    }
    let w = f64::from(winner);
    let margin_ratio = ((w - f64::from(runner_up)) / w).clamp(0.0, 1.0);
    let base = CONFIDENCE_BASE + CONFIDENCE_PER_POINT * f64::from(winner.min(CONFIDENCE_SCORE_CAP));
    let penalty = CONFIDENCE_TIE_PENALTY * (1.0 - margin_ratio);
    (base - penalty)
        .round()
        .clamp(f64::from(CONFIDENCE_MIN), f64::from(CONFIDENCE_MAX)) as u8
}

fn detect_subtype(category: CeremonyCategory, normalized: &str) -> Option<&'static str> {
    let inspect_and_adapt =
        || normalized.contains("inspect and adapt") || normalized.contains("inspect & adapt");

    match category {
        CeremonyCategory::SprintPlanning | CeremonyCategory::Safe
            if marker_holds(MarkerId::PiPlanningEvent, normalized) =>
        {
            Some("PI Planning")
        }
        CeremonyCategory::SprintReview | CeremonyCategory::Safe
            if normalized.contains("system demo") =>
        {
            Some("System Demo")
        }
        CeremonyCategory::Retrospective | CeremonyCategory::Safe if inspect_and_adapt() => {
            Some("Inspect & Adapt")
        }
        CeremonyCategory::DailyScrum
            if [
                MarkerId::WipLimits,
                MarkerId::FlowMetrics,
                MarkerId::BoardColumns,
            ]
            .into_iter()
            .any(|m| marker_holds(m, normalized)) =>
        {
            Some("Daily Kanban")
        }
        _ => None,
    }
}

fn justify(winner: &CategoryScore, subtype: Option<&str>) -> Vec<String> {
    let mut justifications: Vec<String> = winner
        .matched_markers
        .iter()
        .filter(|m| !m.is_exclusion())
        .map(|m| m.justification().to_string())
        .collect();

    if winner.keyword_hits > 0 {
        justifications.push(format!(
            "{} mot(s)-clé(s) caractéristique(s) du {}",
            winner.keyword_hits, winner.category
        ));
    }
    if winner.verb_hits > 0 {
        justifications.push(format!(
            "{} verbe(s) d'action typique(s) détecté(s)",
            winner.verb_hits
        ));
    }
    if let Some(subtype) = subtype {
        justifications.push(format!("Variante identifiée : {}", subtype));
    }
    justifications
}

fn no_ceremony(scores: Vec<CategoryScore>) -> DetectionResult {
    DetectionResult {
        category: CeremonyCategory::None,
        subtype: None,
        confidence: 0,
        justifications: vec!["Aucun signal caractéristique d'une cérémonie".to_string()],
        tags: BTreeSet::new(),
        all_scores: sorted(scores),
    }
}

/// Highest composite first; the stable sort keeps declaration order on ties
fn sorted(mut scores: Vec<CategoryScore>) -> Vec<CategoryScore> {
    scores.sort_by(|a, b| b.composite_score.cmp(&a.composite_score));
    scores
}
