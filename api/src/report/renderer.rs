//! Report renderer
//!
//! Renders analysis results to LLM-readable markdown.

use crate::app::CeremonySummary;
use crate::domain::entities::{
    AntiPattern, CeremonyCategory, DetectionResult, DomainGateResult, FlaggedAntiPattern,
    LexicalLayer, TranscriptAnalysis,
};

const EXCERPT_CHARS: usize = 400;

/// Render a domain gate verdict
pub fn render_gate(gate: &DomainGateResult) -> String {
    let mut buf = String::new();

    buf.push_str("# Contexte\n\n");
    let verdict = if gate.is_out_of_context {
        "HORS CONTEXTE"
    } else {
        "DANS LE CONTEXTE"
    };
    buf.push_str(&format!(
        "- **Verdict:** {} ({}%)\n",
        verdict, gate.confidence
    ));
    buf.push_str(&format!("- **Raison:** {}\n", gate.reason));
    if let Some(theme) = gate.theme {
        buf.push_str(&format!("- **Thème:** {}\n", theme));
    }

    if !gate.layer_counts.is_empty() {
        buf.push_str(&format!(
            "- **Score professionnel:** {}\n",
            gate.professional_field_score
        ));
        let layers: Vec<String> = LexicalLayer::ALL
            .iter()
            .map(|layer| format!("{} {}", layer_name(*layer), gate.layer_count(*layer)))
            .collect();
        buf.push_str(&format!("- **Couches:** {}\n", layers.join(" | ")));
    }

    if !gate.detected_terms.is_empty() {
        buf.push_str(&format!(
            "- **Termes:** {}\n",
            gate.detected_terms.join(", ")
        ));
    }

    buf
}

/// Render a workshop detection
pub fn render_detection(detection: &DetectionResult) -> String {
    let mut buf = String::new();

    buf.push_str("# Cérémonie\n\n");
    let label = match &detection.subtype {
        Some(subtype) => format!("{} ({})", detection.category, subtype),
        None => detection.category.to_string(),
    };
    buf.push_str(&format!(
        "- **Type:** {} ({}%)\n",
        label, detection.confidence
    ));
    if !detection.tags.is_empty() {
        let tags: Vec<&str> = detection.tags.iter().map(String::as_str).collect();
        buf.push_str(&format!("- **Tags:** {}\n", tags.join(", ")));
    }

    if !detection.justifications.is_empty() {
        buf.push_str("\n## Justifications\n\n");
        for justification in &detection.justifications {
            buf.push_str(&format!("- {}\n", justification));
        }
    }

    buf.push_str("\n## Scores\n\n");
    buf.push_str("| Cérémonie | Score | Mots-clés | Motifs | Marqueurs | Verbes |\n");
    buf.push_str("|-----------|-------|-----------|--------|-----------|--------|\n");
    for score in &detection.all_scores {
        buf.push_str(&format!(
            "| {} | {} | {} | {} | {}+{} | {} |\n",
            score.category,
            score.composite_score,
            score.keyword_hits,
            score.pattern_hits,
            score.marker_hits_positive,
            score.marker_hits_negative,
            score.verb_hits
        ));
    }

    buf
}

/// Render a full transcript analysis
pub fn render_analysis(analysis: &TranscriptAnalysis) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("# Analyse {}\n\n", analysis.id));
    buf.push_str(&format!(
        "_Analysée le {}_\n\n",
        analysis.analyzed_at.format("%Y-%m-%d %H:%M UTC")
    ));

    buf.push_str(&demote(&render_gate(&analysis.context)));
    buf.push('\n');
    buf.push_str(&demote(&render_detection(&analysis.workshop)));
    buf.push('\n');

    buf.push_str("## Anti-patterns\n\n");
    if analysis.context.is_out_of_context {
        buf.push_str("_Transcription hors contexte, aucun anti-pattern recherché._\n\n");
    } else if analysis.anti_patterns.is_empty() {
        buf.push_str("_Aucun anti-pattern référencé pour cette cérémonie._\n\n");
    } else {
        for flagged in &analysis.anti_patterns {
            buf.push_str(&render_flagged(flagged));
        }
        buf.push('\n');
    }

    if let Some(text) = &analysis.anonymized_text {
        buf.push_str("## Transcription anonymisée\n\n");
        buf.push_str(&format!("> {}\n", truncate(text, EXCERPT_CHARS)));
    }

    buf
}

/// Render the catalog entries of one ceremony
pub fn render_anti_patterns(category: CeremonyCategory, anti_patterns: &[AntiPattern]) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("# Anti-patterns: {}\n\n", category));

    if anti_patterns.is_empty() {
        buf.push_str("_Aucun anti-pattern référencé._\n");
        return buf;
    }

    for anti_pattern in anti_patterns {
        buf.push_str(&format!(
            "- **{}** [{}]\n  {}\n",
            anti_pattern.name, anti_pattern.severity, anti_pattern.suggestion
        ));
    }

    buf
}

/// Render the ceremony list
pub fn render_ceremonies(ceremonies: &[CeremonySummary]) -> String {
    let mut buf = String::new();

    buf.push_str("# Cérémonies\n\n");
    buf.push_str("| Id | Libellé | Anti-patterns |\n");
    buf.push_str("|----|---------|---------------|\n");
    for ceremony in ceremonies {
        buf.push_str(&format!(
            "| {} | {} | {} |\n",
            ceremony.id, ceremony.label, ceremony.anti_patterns
        ));
    }

    buf
}

fn render_flagged(flagged: &FlaggedAntiPattern) -> String {
    let status = if flagged.detected { "[DÉTECTÉ]" } else { "[ ]" };
    let mut line = format!(
        "{} **{}** ({}) - {}\n",
        status,
        flagged.anti_pattern.name,
        flagged.anti_pattern.severity,
        flagged.anti_pattern.suggestion
    );
    if !flagged.matched_signals.is_empty() {
        line.push_str(&format!(
            "    Signaux: {}\n",
            flagged.matched_signals.join(", ")
        ));
    }
    line
}

fn layer_name(layer: LexicalLayer) -> &'static str {
    match layer {
        LexicalLayer::ProjectManagement => "L1 projet",
        LexicalLayer::Roles => "L2 rôles",
        LexicalLayer::Activities => "L3 activités",
        LexicalLayer::ActivityVerbs => "L3 verbes",
        LexicalLayer::Problems => "L4 problèmes",
    }
}

/// Nest a rendered section one heading level deeper
fn demote(section: &str) -> String {
    section
        .lines()
        .map(|line| {
            if line.starts_with('#') {
                format!("#{}\n", line)
            } else {
                format!("{}\n", line)
            }
        })
        .collect()
}

/// Truncate on a char boundary with ellipsis
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
