//! Analysis service
//!
//! Orchestrates the domain gate, the workshop detector and the anti-pattern
//! catalog for one transcript.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use super::anonymizer::anonymize_speakers;
use super::normalize::normalize_text;
use super::out_of_context::detect_out_of_context;
use super::workshop_detector::detect_workshop_type;
use crate::domain::entities::{
    AnalysisId, AntiPattern, CeremonyCategory, DetectionResult, DomainGateResult,
    FlaggedAntiPattern, TranscriptAnalysis,
};
use crate::domain::ports::AntiPatternCatalog;
use crate::error::AppError;

/// Ceremony entry listed by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CeremonySummary {
    pub id: &'static str,
    pub label: &'static str,
    pub anti_patterns: usize,
}

/// Service running the transcript analysis pipeline
pub struct AnalysisService<C>
where
    C: AntiPatternCatalog,
{
    catalog: Arc<C>,
    max_transcript_chars: usize,
    anonymize: bool,
}

impl<C> AnalysisService<C>
where
    C: AntiPatternCatalog,
{
    pub fn new(catalog: Arc<C>, max_transcript_chars: usize, anonymize: bool) -> Self {
        Self {
            catalog,
            max_transcript_chars,
            anonymize,
        }
    }

    /// Missing text is analyzed as the empty string; oversized text is refused
    fn accept<'a>(&self, text: Option<&'a str>) -> Result<&'a str, AppError> {
        let text = text.unwrap_or_default();
        let chars = text.chars().count();
        if chars > self.max_transcript_chars {
            return Err(AppError::PayloadTooLarge {
                actual: chars,
                max: self.max_transcript_chars,
            });
        }
        Ok(text)
    }

    /// Run the domain gate only
    pub fn gate(&self, text: Option<&str>) -> Result<DomainGateResult, AppError> {
        let text = self.accept(text)?;
        Ok(detect_out_of_context(text))
    }

    /// Run the workshop detector only
    pub fn classify(&self, text: Option<&str>) -> Result<DetectionResult, AppError> {
        let text = self.accept(text)?;
        Ok(detect_workshop_type(text))
    }

    /// Full pipeline: gate, detector, anti-pattern lookup, anonymization
    ///
    /// The detector always runs. The catalog is only consulted for
    /// transcripts that passed the gate.
    pub async fn analyze(&self, text: Option<&str>) -> Result<TranscriptAnalysis, AppError> {
        let text = self.accept(text)?;

        let context = detect_out_of_context(text);
        let workshop = detect_workshop_type(text);

        let anti_patterns = if context.is_out_of_context {
            Vec::new()
        } else {
            let catalog = self.catalog.for_ceremony(workshop.category).await?;
            flag_anti_patterns(catalog, &normalize_text(text))
        };

        let anonymized_text = self.anonymize.then(|| {
            let anonymized = anonymize_speakers(text);
            tracing::debug!(speakers = anonymized.aliases.len(), "Speakers anonymized");
            anonymized.text
        });

        let analysis = TranscriptAnalysis {
            id: AnalysisId::for_text(text),
            analyzed_at: Utc::now(),
            context,
            workshop,
            anti_patterns,
            anonymized_text,
        };

        tracing::info!(
            analysis_id = %analysis.id,
            out_of_context = analysis.context.is_out_of_context,
            ceremony = %analysis.workshop.category,
            confidence = analysis.workshop.confidence,
            detected_anti_patterns = analysis.detected_anti_patterns().count(),
            "Transcript analyzed"
        );

        Ok(analysis)
    }

    /// Catalog entries for one ceremony
    pub async fn anti_patterns(
        &self,
        category: CeremonyCategory,
    ) -> Result<Vec<AntiPattern>, AppError> {
        Ok(self.catalog.for_ceremony(category).await?)
    }

    /// Every ceremony label with its catalog size
    pub async fn ceremonies(&self) -> Result<Vec<CeremonySummary>, AppError> {
        let catalog = self.catalog.all().await?;
        Ok(CeremonyCategory::ALL
            .iter()
            .map(|category| CeremonySummary {
                id: category.id(),
                label: category.label(),
                anti_patterns: catalog
                    .iter()
                    .find(|(c, _)| c == category)
                    .map(|(_, entries)| entries.len())
                    .unwrap_or(0),
            })
            .collect())
    }
}

/// Mark each entry whose signal phrases appear in the normalized transcript
fn flag_anti_patterns(catalog: Vec<AntiPattern>, normalized: &str) -> Vec<FlaggedAntiPattern> {
    catalog
        .into_iter()
        .map(|anti_pattern| {
            let matched_signals: Vec<String> = anti_pattern
                .signals
                .iter()
                .filter(|signal| normalized.contains(&normalize_text(signal)))
                .cloned()
                .collect();
            FlaggedAntiPattern {
                detected: !matched_signals.is_empty(),
                matched_signals,
                anti_pattern,
            }
        })
        .collect()
}
