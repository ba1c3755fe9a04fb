//! Test fixtures
//!
//! Reference transcripts and factory functions shared by unit and router
//! tests.

use std::sync::Arc;

use crate::adapters::StaticAntiPatternCatalog;
use crate::app::AnalysisService;
use crate::config::Config;
use crate::domain::entities::{AntiPattern, Severity};
use crate::AppState;

/// Stand-up with the yesterday / today / blocker structure
pub const DAILY_TRANSCRIPT: &str = "Alice: Hier j'ai corrigé le bug #123. Aujourd'hui je continue \
    sur le login. Bob: Je suis bloqué sur l'API de paiement, j'ai besoin d'aide.";

/// Planning: estimation, sprint goal, backlog selection
pub const PLANNING_TRANSCRIPT: &str = "Nous allons estimer les user stories du backlog et définir \
    le sprint goal pour les deux prochaines semaines. Qui peut prendre la story de paiement ?";

/// Retrospective with an explicit action item
pub const RETRO_TRANSCRIPT: &str = "Qu'est-ce qui a bien fonctionné ce sprint et qu'est-ce \
    qu'on pourrait améliorer ? Action: Bob va automatiser les tests avant le prochain sprint.";

/// Football small talk
pub const SPORTS_TRANSCRIPT: &str =
    "Real Madrid a gagné le match hier, Cristiano a marqué deux buts en première mi-temps.";

/// Create a test anti-pattern with one signal phrase
pub fn test_anti_pattern() -> AntiPattern {
    AntiPattern::new(
        "Tour de table interminable",
        Severity::Medium,
        "Timeboxer chaque intervention à deux minutes",
        &["on en reparlera"],
    )
}

/// Create a test config with a small transcript limit
pub fn test_config() -> Config {
    Config {
        max_transcript_chars: 2_000,
        ..Config::default()
    }
}

/// Create an application state backed by the static catalog
pub fn test_state() -> AppState {
    let config = test_config();
    AppState {
        analysis_service: Arc::new(AnalysisService::new(
            Arc::new(StaticAntiPatternCatalog::new()),
            config.max_transcript_chars,
            config.anonymize_transcripts,
        )),
        config,
    }
}
