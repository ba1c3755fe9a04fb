//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;

use crate::domain::entities::{AntiPattern, CeremonyCategory};
use crate::domain::ports::AntiPatternCatalog;
use crate::error::DomainError;

// ============================================================================
// In-Memory Anti-Pattern Catalog
// ============================================================================

#[derive(Default)]
pub struct InMemoryAntiPatternCatalog {
    entries: Vec<(CeremonyCategory, AntiPattern)>,
    fail: bool,
}

impl InMemoryAntiPatternCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an anti-pattern for a ceremony
    pub fn with(mut self, category: CeremonyCategory, anti_pattern: AntiPattern) -> Self {
        self.entries.push((category, anti_pattern));
        self
    }

    /// Every lookup returns `DomainError::Unavailable`
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::Unavailable("mock catalog offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl AntiPatternCatalog for InMemoryAntiPatternCatalog {
    async fn for_ceremony(
        &self,
        category: CeremonyCategory,
    ) -> Result<Vec<AntiPattern>, DomainError> {
        self.check()?;
        Ok(self
            .entries
            .iter()
            .filter(|(c, _)| *c == category)
            .map(|(_, a)| a.clone())
            .collect())
    }

    async fn all(&self) -> Result<Vec<(CeremonyCategory, Vec<AntiPattern>)>, DomainError> {
        self.check()?;
        let mut grouped = Vec::new();
        for category in CeremonyCategory::ALL {
            grouped.push((category, self.for_ceremony(category).await?));
        }
        Ok(grouped)
    }
}
