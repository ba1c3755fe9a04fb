//! Anti-pattern catalog port
//!
//! Source of the coaching suggestions attached to each ceremony.
//! The default adapter is a static table; a database-backed catalog can
//! implement the same trait.

use async_trait::async_trait;

use crate::domain::entities::{AntiPattern, CeremonyCategory};
use crate::error::DomainError;

/// Lookup of anti-patterns by ceremony
#[async_trait]
pub trait AntiPatternCatalog: Send + Sync {
    /// Anti-patterns for one ceremony (empty when none are registered)
    async fn for_ceremony(
        &self,
        category: CeremonyCategory,
    ) -> Result<Vec<AntiPattern>, DomainError>;

    /// Whole catalog, in ceremony declaration order
    async fn all(&self) -> Result<Vec<(CeremonyCategory, Vec<AntiPattern>)>, DomainError>;
}
