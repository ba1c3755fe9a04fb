//! Text normalization shared by both detectors
//!
//! Lowercase, NFD-decompose and drop combining marks (U+0300..=U+036F) so
//! that "bloqué" and "bloque" match the same lexicon entry.

use unicode_normalization::UnicodeNormalization;

const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Normalize text for lexicon matching.
///
/// Typographic apostrophes are folded to `'` as transcripts pasted from
/// office tools rarely use the ASCII form.
pub fn normalize_text(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .map(|c| match c {
            '\u{2019}' | '\u{2018}' | '\u{02BC}' => '\'',
            other => other,
        })
        .collect()
}

/// Character count of the trimmed input (not bytes)
pub fn trimmed_len(s: &str) -> usize {
    s.trim().chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_diacritics_and_lowercases() {
        assert_eq!(normalize_text("Bloqué"), "bloque");
        assert_eq!(normalize_text("ÉQUIPE Améliorer"), "equipe ameliorer");
        assert_eq!(normalize_text("Démo à Noël"), "demo a noel");
    }

    #[test]
    fn test_folds_typographic_apostrophes() {
        assert_eq!(normalize_text("Qu’est-ce qui"), "qu'est-ce qui");
        assert_eq!(normalize_text("aujourd'hui"), "aujourd'hui");
    }

    #[test]
    fn test_keeps_non_latin_letters() {
        assert_eq!(normalize_text("Ça va"), "ca va");
        assert_eq!(normalize_text("sprint #12"), "sprint #12");
    }

    #[test]
    fn test_trimmed_len_counts_chars() {
        assert_eq!(trimmed_len("  été  "), 3);
        assert_eq!(trimmed_len(""), 0);
    }
}
