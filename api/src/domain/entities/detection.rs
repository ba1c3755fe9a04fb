//! Ceremony detection entities
//!
//! Scores and final verdict produced by the workshop type detector.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::CeremonyCategory;

/// Whether a marker supports a category by presence or by absence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerPolarity {
    Positive,
    /// `no_*` markers: true when a competing ceremony's signal is absent
    Exclusion,
}

/// Named boolean evidence predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerId {
    // Daily Scrum
    YesterdayTodayStructure,
    BlockerMention,
    IndividualUpdates,
    // Sprint Planning
    SprintGoalDefinition,
    EstimationVocabulary,
    BacklogSelection,
    CapacityDiscussion,
    // Sprint Review
    DemoVocabulary,
    StakeholderPresence,
    IncrementShowcase,
    FeedbackCollection,
    // Retrospective
    WentWellQuestion,
    ImprovementFocus,
    ActionItems,
    TeamReflection,
    // Kanban
    WipLimits,
    FlowMetrics,
    BoardColumns,
    // SAFe
    PiPlanningEvent,
    TrainCoordination,
    PortfolioAlignment,
    // Exclusions
    NoEstimation,
    NoDemo,
    NoRetrospective,
    NoDailyStatus,
    NoSprintCadence,
}

impl MarkerId {
    pub fn polarity(&self) -> MarkerPolarity {
        match self {
            MarkerId::NoEstimation
            | MarkerId::NoDemo
            | MarkerId::NoRetrospective
            | MarkerId::NoDailyStatus
            | MarkerId::NoSprintCadence => MarkerPolarity::Exclusion,
            _ => MarkerPolarity::Positive,
        }
    }

    pub fn is_exclusion(&self) -> bool {
        self.polarity() == MarkerPolarity::Exclusion
    }

    /// Human-readable justification shown when the marker fires
    pub fn justification(&self) -> &'static str {
        match self {
            MarkerId::YesterdayTodayStructure => "Structure hier / aujourd'hui détectée",
            MarkerId::BlockerMention => "Blocages ou besoins d'aide mentionnés",
            MarkerId::IndividualUpdates => "Points d'avancement individuels",
            MarkerId::SprintGoalDefinition => "Sprint goal mentionné",
            MarkerId::EstimationVocabulary => "Vocabulaire d'estimation détecté",
            MarkerId::BacklogSelection => "Sélection d'éléments du backlog",
            MarkerId::CapacityDiscussion => "Discussion sur la capacité de l'équipe",
            MarkerId::DemoVocabulary => "Vocabulaire de démonstration détecté",
            MarkerId::StakeholderPresence => "Parties prenantes impliquées",
            MarkerId::IncrementShowcase => "Présentation de l'incrément livré",
            MarkerId::FeedbackCollection => "Collecte de feedback",
            MarkerId::WentWellQuestion => "Question sur ce qui a bien fonctionné",
            MarkerId::ImprovementFocus => "Axes d'amélioration discutés",
            MarkerId::ActionItems => "Actions d'amélioration définies",
            MarkerId::TeamReflection => "Réflexion collective de l'équipe",
            MarkerId::WipLimits => "Limites de WIP évoquées",
            MarkerId::FlowMetrics => "Métriques de flux mentionnées",
            MarkerId::BoardColumns => "Organisation du tableau en colonnes",
            MarkerId::PiPlanningEvent => "Événement PI Planning identifié",
            MarkerId::TrainCoordination => "Coordination du train (ART)",
            MarkerId::PortfolioAlignment => "Alignement portfolio (WSJF, epics)",
            MarkerId::NoEstimation => "Aucune estimation évoquée",
            MarkerId::NoDemo => "Aucune démonstration évoquée",
            MarkerId::NoRetrospective => "Aucune rétrospective évoquée",
            MarkerId::NoDailyStatus => "Aucun point quotidien évoqué",
            MarkerId::NoSprintCadence => "Aucune cadence de sprint évoquée",
        }
    }

    /// Short UI label, positive markers only
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            MarkerId::YesterdayTodayStructure => Some("hier-aujourd-hui"),
            MarkerId::BlockerMention => Some("blocages"),
            MarkerId::IndividualUpdates => Some("tour-de-table"),
            MarkerId::SprintGoalDefinition => Some("sprint-goal"),
            MarkerId::EstimationVocabulary => Some("estimation"),
            MarkerId::BacklogSelection => Some("backlog"),
            MarkerId::CapacityDiscussion => Some("capacite"),
            MarkerId::DemoVocabulary => Some("demo"),
            MarkerId::StakeholderPresence => Some("parties-prenantes"),
            MarkerId::IncrementShowcase => Some("increment"),
            MarkerId::FeedbackCollection => Some("feedback"),
            MarkerId::WentWellQuestion => Some("ce-qui-a-marche"),
            MarkerId::ImprovementFocus => Some("amelioration-continue"),
            MarkerId::ActionItems => Some("actions"),
            MarkerId::TeamReflection => Some("reflexion-equipe"),
            MarkerId::WipLimits => Some("wip"),
            MarkerId::FlowMetrics => Some("flux"),
            MarkerId::BoardColumns => Some("tableau"),
            MarkerId::PiPlanningEvent => Some("pi-planning"),
            MarkerId::TrainCoordination => Some("art"),
            MarkerId::PortfolioAlignment => Some("portfolio"),
            MarkerId::NoEstimation
            | MarkerId::NoDemo
            | MarkerId::NoRetrospective
            | MarkerId::NoDailyStatus
            | MarkerId::NoSprintCadence => None,
        }
    }
}

/// Evidence collected for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: CeremonyCategory,
    pub keyword_hits: u32,
    pub pattern_hits: u32,
    pub marker_hits_positive: u32,
    /// Exclusion markers satisfied
    pub marker_hits_negative: u32,
    /// Secondary channel, used only to break near ties
    pub verb_hits: u32,
    pub composite_score: u32,
    pub matched_markers: Vec<MarkerId>,
}

impl CategoryScore {
    pub fn empty(category: CeremonyCategory) -> Self {
        Self {
            category,
            keyword_hits: 0,
            pattern_hits: 0,
            marker_hits_positive: 0,
            marker_hits_negative: 0,
            verb_hits: 0,
            composite_score: 0,
            matched_markers: Vec::new(),
        }
    }

    /// True when at least one direct (non-exclusion) signal fired
    pub fn has_positive_evidence(&self) -> bool {
        self.keyword_hits + self.pattern_hits + self.marker_hits_positive > 0
    }
}

/// Final verdict of the workshop type detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    #[serde(rename = "type")]
    pub category: CeremonyCategory,
    pub subtype: Option<String>,
    /// 0-100
    pub confidence: u8,
    pub justifications: Vec<String>,
    pub tags: BTreeSet<String>,
    /// Every scored category, highest composite first
    pub all_scores: Vec<CategoryScore>,
}

#[cfg(test)]
impl DetectionResult {
    pub fn score_for(&self, category: CeremonyCategory) -> Option<&CategoryScore> {
        self.all_scores.iter().find(|s| s.category == category)
    }

    pub fn composite_for(&self, category: CeremonyCategory) -> u32 {
        self.score_for(category)
            .map(|s| s.composite_score)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusion_markers_have_no_tag() {
        for marker in [
            MarkerId::NoEstimation,
            MarkerId::NoDemo,
            MarkerId::NoRetrospective,
            MarkerId::NoDailyStatus,
            MarkerId::NoSprintCadence,
        ] {
            assert!(marker.is_exclusion());
            assert!(marker.tag().is_none());
        }
        assert!(!MarkerId::DemoVocabulary.is_exclusion());
    }

    #[test]
    fn test_marker_serializes_snake_case() {
        let json = serde_json::to_string(&MarkerId::SprintGoalDefinition).unwrap();
        assert_eq!(json, r#""sprint_goal_definition""#);
        let json = serde_json::to_string(&MarkerId::NoDemo).unwrap();
        assert_eq!(json, r#""no_demo""#);
    }

    #[test]
    fn test_detection_serializes_category_as_type() {
        let result = DetectionResult {
            category: CeremonyCategory::DailyScrum,
            subtype: None,
            confidence: 70,
            justifications: vec![],
            tags: BTreeSet::new(),
            all_scores: vec![CategoryScore::empty(CeremonyCategory::DailyScrum)],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "Daily Scrum");
        assert_eq!(result.composite_for(CeremonyCategory::Kanban), 0);
    }
}
