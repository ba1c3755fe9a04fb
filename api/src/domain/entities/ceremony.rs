//! Ceremony domain entity
//!
//! The agile meeting types a transcript can be classified as. The display
//! labels are the keys of the anti-pattern catalog and must not drift.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A ceremony category recognized by the workshop detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CeremonyCategory {
    #[serde(rename = "Daily Scrum")]
    DailyScrum,
    #[serde(rename = "Sprint Planning")]
    SprintPlanning,
    #[serde(rename = "Sprint Review")]
    SprintReview,
    #[serde(rename = "Retrospective")]
    Retrospective,
    #[serde(rename = "Kanban")]
    Kanban,
    #[serde(rename = "SAFe")]
    Safe,
    /// No ceremony could be identified
    #[serde(rename = "Autre")]
    None,
}

impl CeremonyCategory {
    /// Categories that are scored, in tie-break order
    pub const SCORED: [CeremonyCategory; 6] = [
        CeremonyCategory::DailyScrum,
        CeremonyCategory::SprintPlanning,
        CeremonyCategory::SprintReview,
        CeremonyCategory::Retrospective,
        CeremonyCategory::Kanban,
        CeremonyCategory::Safe,
    ];

    /// Every category including the fallback
    pub const ALL: [CeremonyCategory; 7] = [
        CeremonyCategory::DailyScrum,
        CeremonyCategory::SprintPlanning,
        CeremonyCategory::SprintReview,
        CeremonyCategory::Retrospective,
        CeremonyCategory::Kanban,
        CeremonyCategory::Safe,
        CeremonyCategory::None,
    ];

    /// Label shown to users and used as catalog key
    pub fn label(&self) -> &'static str {
        match self {
            CeremonyCategory::DailyScrum => "Daily Scrum",
            CeremonyCategory::SprintPlanning => "Sprint Planning",
            CeremonyCategory::SprintReview => "Sprint Review",
            CeremonyCategory::Retrospective => "Retrospective",
            CeremonyCategory::Kanban => "Kanban",
            CeremonyCategory::Safe => "SAFe",
            CeremonyCategory::None => "Autre",
        }
    }

    /// Stable snake_case identifier
    pub fn id(&self) -> &'static str {
        match self {
            CeremonyCategory::DailyScrum => "daily_scrum",
            CeremonyCategory::SprintPlanning => "sprint_planning",
            CeremonyCategory::SprintReview => "sprint_review",
            CeremonyCategory::Retrospective => "retrospective",
            CeremonyCategory::Kanban => "kanban",
            CeremonyCategory::Safe => "safe",
            CeremonyCategory::None => "none",
        }
    }

    /// Tag attached to a detection of this category
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            CeremonyCategory::DailyScrum => Some("daily"),
            CeremonyCategory::SprintPlanning => Some("planning"),
            CeremonyCategory::SprintReview => Some("review"),
            CeremonyCategory::Retrospective => Some("retro"),
            CeremonyCategory::Kanban => Some("kanban"),
            CeremonyCategory::Safe => Some("safe"),
            CeremonyCategory::None => None,
        }
    }
}

impl std::fmt::Display for CeremonyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for CeremonyCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' '], "_");
        match key.as_str() {
            "daily_scrum" | "daily" | "stand_up" | "standup" => Ok(CeremonyCategory::DailyScrum),
            "sprint_planning" | "planning" => Ok(CeremonyCategory::SprintPlanning),
            "sprint_review" | "review" => Ok(CeremonyCategory::SprintReview),
            "retrospective" | "retro" | "retrospective_de_sprint" => {
                Ok(CeremonyCategory::Retrospective)
            }
            "kanban" => Ok(CeremonyCategory::Kanban),
            "safe" => Ok(CeremonyCategory::Safe),
            "autre" | "none" | "other" => Ok(CeremonyCategory::None),
            _ => Err(ParseError::UnknownCeremony(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_catalog_keys() {
        assert_eq!(CeremonyCategory::DailyScrum.label(), "Daily Scrum");
        assert_eq!(CeremonyCategory::SprintPlanning.label(), "Sprint Planning");
        assert_eq!(CeremonyCategory::SprintReview.label(), "Sprint Review");
        assert_eq!(CeremonyCategory::Retrospective.label(), "Retrospective");
        assert_eq!(CeremonyCategory::None.label(), "Autre");
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&CeremonyCategory::SprintReview).unwrap();
        assert_eq!(json, r#""Sprint Review""#);
        let parsed: CeremonyCategory = serde_json::from_str(r#""Autre""#).unwrap();
        assert_eq!(parsed, CeremonyCategory::None);
    }

    #[test]
    fn test_from_str_accepts_labels_and_ids() {
        for category in CeremonyCategory::ALL {
            assert_eq!(category.label().parse::<CeremonyCategory>().unwrap(), category);
            assert_eq!(category.id().parse::<CeremonyCategory>().unwrap(), category);
        }
        assert_eq!(
            "stand-up".parse::<CeremonyCategory>().unwrap(),
            CeremonyCategory::DailyScrum
        );
        assert!("pi-party".parse::<CeremonyCategory>().is_err());
    }
}
