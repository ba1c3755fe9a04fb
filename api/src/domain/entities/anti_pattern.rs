//! Anti-pattern domain entity
//!
//! Coaching suggestions attached to a ceremony. Each anti-pattern carries a
//! few signal phrases whose presence in a transcript flags it as observed.

use serde::{Deserialize, Serialize};

/// How harmful an anti-pattern is for the team
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" | "faible" => Ok(Severity::Low),
            "medium" | "moyenne" => Ok(Severity::Medium),
            "high" | "haute" | "elevee" => Ok(Severity::High),
            "critical" | "critique" => Ok(Severity::Critical),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// A named anti-pattern with its coaching suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntiPattern {
    pub name: String,
    pub severity: Severity,
    pub suggestion: String,
    /// Phrases (normalized form) that reveal the anti-pattern in a transcript
    #[serde(default)]
    pub signals: Vec<String>,
}

impl AntiPattern {
    pub fn new(name: &str, severity: Severity, suggestion: &str, signals: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            severity,
            suggestion: suggestion.to_string(),
            signals: signals.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Catalog entry annotated against a specific transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedAntiPattern {
    #[serde(flatten)]
    pub anti_pattern: AntiPattern,
    pub detected: bool,
    pub matched_signals: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_severity_round_trip_text() {
        assert_eq!("critique".parse::<Severity>().unwrap(), Severity::Critical);
        assert_eq!(Severity::High.to_string(), "high");
        assert!("urgent".parse::<Severity>().is_err());
    }

    #[test]
    fn test_flagged_flattens_anti_pattern() {
        let flagged = FlaggedAntiPattern {
            anti_pattern: AntiPattern::new("Daily trop long", Severity::Medium, "Timeboxer", &[]),
            detected: false,
            matched_signals: vec![],
        };
        let json = serde_json::to_value(&flagged).unwrap();
        assert_eq!(json["name"], "Daily trop long");
        assert_eq!(json["severity"], "medium");
        assert_eq!(json["detected"], false);
    }
}
