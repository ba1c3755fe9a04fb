//! Speaker anonymization
//!
//! Replaces known first names with stable `Participant N` aliases before a
//! transcript is echoed back in a report.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// First names recognized as speakers. Matching is whole-word; only
/// capitalized occurrences count, so "claire" or "pierre" in prose stay.
const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "David", "Emma", "Julie", "Marie", "Sophie", "Camille", "Léa",
    "Chloé", "Manon", "Sarah", "Laura", "Claire", "Nathalie", "Isabelle", "Céline", "Hélène",
    "Zoé", "Inès", "Thomas", "Nicolas", "Julien", "Pierre", "Paul", "Antoine", "Maxime",
    "Alexandre", "Lucas", "Hugo", "Louis", "Mathieu", "Olivier", "Sébastien", "Stéphane",
    "François", "Laurent", "Vincent", "Karim", "Mehdi", "Yann", "Benoît", "Jérôme", "Fatima",
    "Aïcha", "Kevin", "Romain", "Guillaume", "Quentin",
];

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = FIRST_NAMES
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
        .expect("escaped first-name list must compile")
});

/// Anonymized transcript with the alias table in order of first appearance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anonymized {
    pub text: String,
    /// `(name, alias)` pairs; names use their canonical spelling
    pub aliases: Vec<(String, String)>,
}

impl Anonymized {
    #[cfg(test)]
    pub fn alias_for(&self, name: &str) -> Option<&str> {
        self.aliases
            .iter()
            .find(|(n, _)| n.to_lowercase() == name.to_lowercase())
            .map(|(_, alias)| alias.as_str())
    }
}

/// Replace every capitalized known first name with `Participant N`
pub fn anonymize_speakers(text: &str) -> Anonymized {
    let mut aliases: Vec<(String, String)> = Vec::new();

    let replaced = NAME_PATTERN.replace_all(text, |caps: &Captures| {
        if !caps[0].starts_with(char::is_uppercase) {
            return caps[0].to_string();
        }
        let found = caps[0].to_lowercase();
        let canonical = FIRST_NAMES
            .iter()
            .find(|name| name.to_lowercase() == found)
            .map(|name| name.to_string())
            .unwrap_or_else(|| caps[0].to_string());

        if let Some((_, alias)) = aliases.iter().find(|(name, _)| *name == canonical) {
            return alias.clone();
        }
        let alias = format!("Participant {}", aliases.len() + 1);
        aliases.push((canonical, alias.clone()));
        alias
    });

    Anonymized {
        text: replaced.into_owned(),
        aliases,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_by_first_appearance() {
        let result = anonymize_speakers("Alice: salut Bob. Bob: salut Alice, Thomas arrive.");
        assert_eq!(
            result.text,
            "Participant 1: salut Participant 2. Participant 2: salut Participant 1, Participant 3 arrive."
        );
        assert_eq!(result.aliases.len(), 3);
        assert_eq!(result.alias_for("thomas"), Some("Participant 3"));
    }

    #[test]
    fn test_capitalized_and_accented() {
        let result = anonymize_speakers("HÉLÈNE puis Hélène");
        assert_eq!(result.text, "Participant 1 puis Participant 1");
        assert_eq!(result.aliases, vec![("Hélène".to_string(), "Participant 1".to_string())]);
    }

    #[test]
    fn test_common_words_in_prose_are_kept() {
        let text = "La vision produit est claire et le mur est en pierre.";
        let result = anonymize_speakers(text);
        assert_eq!(result.text, text);
        assert!(result.aliases.is_empty());
    }

    #[test]
    fn test_speaker_named_like_a_word() {
        let result = anonymize_speakers("Claire: la priorité est claire. Pierre: d'accord.");
        assert_eq!(
            result.text,
            "Participant 1: la priorité est claire. Participant 2: d'accord."
        );
        assert_eq!(result.alias_for("pierre"), Some("Participant 2"));
    }

    #[test]
    fn test_whole_words_only() {
        let result = anonymize_speakers("Le paulownia et les bobines restent.");
        assert_eq!(result.text, "Le paulownia et les bobines restent.");
        assert!(result.aliases.is_empty());
    }

    #[test]
    fn test_text_without_names_is_unchanged() {
        let text = "Hier j'ai terminé la story de paiement.";
        assert_eq!(anonymize_speakers(text).text, text);
    }
}
