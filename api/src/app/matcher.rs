//! Compiled matchers for lexicon tables
//!
//! - `TermMatcher`: literal term list compiled into a single `RegexSet`,
//!   presence semantics (each term counts at most once)
//! - `PatternList`: regex list, occurrence semantics (every match counts)
//!
//! Both expect normalized text (see `normalize::normalize_text`).

use regex::{Regex, RegexSet};

use super::normalize::normalize_text;

/// Presence matcher over a fixed list of literal terms
#[derive(Debug, Clone)]
pub struct TermMatcher {
    terms: Vec<String>,
    set: RegexSet,
}

impl TermMatcher {
    /// Build from raw terms. Terms are normalized so tables may be written
    /// with accents.
    pub fn new(terms: &[&str]) -> Result<Self, regex::Error> {
        let terms: Vec<String> = terms.iter().map(|t| normalize_text(t)).collect();
        let set = RegexSet::new(terms.iter().map(|t| regex::escape(t)))?;
        Ok(Self { terms, set })
    }

    /// Build from a static table known to be valid
    pub fn from_static(terms: &[&str]) -> Self {
        Self::new(terms).expect("escaped literal terms always compile")
    }

    /// Terms present in the text, in table order
    pub fn matches<'a>(&'a self, text: &str) -> Vec<&'a str> {
        self.set
            .matches(text)
            .into_iter()
            .map(|i| self.terms[i].as_str())
            .collect()
    }

    /// Number of distinct terms present
    pub fn count(&self, text: &str) -> usize {
        self.set.matches(text).iter().count()
    }

    pub fn any(&self, text: &str) -> bool {
        self.set.is_match(text)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Occurrence counter over a list of regex patterns
#[derive(Debug, Clone)]
pub struct PatternList {
    patterns: Vec<Regex>,
}

impl PatternList {
    pub fn new(patterns: &[&str]) -> Result<Self, regex::Error> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Build from a static table known to be valid
    pub fn from_static(patterns: &[&str]) -> Self {
        Self::new(patterns).expect("static ceremony patterns must compile")
    }

    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Sum of match counts across all patterns
    pub fn occurrences(&self, text: &str) -> usize {
        self.patterns
            .iter()
            .map(|re| re.find_iter(text).count())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
