//! Marker predicates
//!
//! Each `MarkerId` maps to one predicate over normalized text. Exclusion
//! markers are the negation of a competing ceremony's signal.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::entities::MarkerId;

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static marker pattern must compile")
}

static YESTERDAY: Lazy<Regex> = Lazy::new(|| re(r"\bhier\b|\byesterday\b"));
static TODAY: Lazy<Regex> = Lazy::new(|| re(r"aujourd'hui|\btoday\b"));
static BLOCKER: Lazy<Regex> =
    Lazy::new(|| re(r"bloque|blocage|blocker|impediment|besoin d'aide"));
static FIRST_PERSON: Lazy<Regex> = Lazy::new(|| re(r"\bje\b|\bj'"));

static SPRINT_GOAL: Lazy<Regex> = Lazy::new(|| re(r"sprint goal|objectif d[ue] sprint"));
static ESTIMATION: Lazy<Regex> =
    Lazy::new(|| re(r"estim|story points?|points? d'effort|planning poker|t-shirt"));
static BACKLOG: Lazy<Regex> = Lazy::new(|| re(r"backlog"));
static BACKLOG_PICK: Lazy<Regex> =
    Lazy::new(|| re(r"\bstor(?:y|ies)\b|selection|\bprendre\b|embarquer"));
static CAPACITY: Lazy<Regex> = Lazy::new(|| re(r"capacite|velocite|disponibilit"));

static DEMO: Lazy<Regex> = Lazy::new(|| re(r"\bdemo|demonstr"));
static STAKEHOLDERS: Lazy<Regex> = Lazy::new(|| {
    re(r"parties? prenantes?|stakeholders?|\bclients?\b|sponsor|utilisateurs? finaux")
});
static INCREMENT: Lazy<Regex> = Lazy::new(|| {
    re(r"increment|fonctionnalites? (?:livrees?|terminees?)|mise en production|(?:on a|nous avons) livre")
});
static FEEDBACK: Lazy<Regex> =
    Lazy::new(|| re(r"feedback|retours? (?:client|des utilisateurs|utilisateurs?)|\bavis\b"));

static WENT_WELL: Lazy<Regex> =
    Lazy::new(|| re(r"bien (?:fonctionne|marche|passe)|ce qui a (?:bien )?marche|went well"));
static IMPROVEMENT: Lazy<Regex> =
    Lazy::new(|| re(r"amelior|a changer|n'a pas (?:bien )?(?:fonctionne|marche)"));
static ACTION_ITEMS: Lazy<Regex> = Lazy::new(|| {
    re(r"\baction\s*:|plan d'action|\b(?:va|vont|allons) (?:automatiser|mettre en place|documenter|ameliorer|tester|changer)\b")
});
static REFLECTION: Lazy<Regex> = Lazy::new(|| {
    re(r"ressenti|humeur|on a appris|lecons? apprises?|mad sad glad|start stop continue|keep drop")
});
// Narrower than IMPROVEMENT so a stray "j'ai amélioré" in a daily does not count
static RETROSPECTIVE: Lazy<Regex> = Lazy::new(|| {
    re(r"retrospective|\bretro\b|bien (?:fonctionne|marche)|(?:a|pourrait|peut|doit) ameliorer|axes? d'amelioration|lecons? apprises?")
});

static WIP: Lazy<Regex> =
    Lazy::new(|| re(r"\bwip\b|work in progress|travail en cours|limite de wip"));
static FLOW: Lazy<Regex> =
    Lazy::new(|| re(r"lead time|cycle time|throughput|\bdebit\b|cumulative flow|temps de cycle"));
static BOARD: Lazy<Regex> = Lazy::new(|| re(r"\bcolonnes?\b|tableau kanban|\bboard\b"));
static SPRINT: Lazy<Regex> = Lazy::new(|| re(r"\bsprints?\b"));

static PI_PLANNING: Lazy<Regex> =
    Lazy::new(|| re(r"pi planning|program increment|objectifs de pi|pi objectives"));
static TRAIN: Lazy<Regex> =
    Lazy::new(|| re(r"release train|\bart\b|scrum of scrums|\brte\b|art sync"));
static PORTFOLIO: Lazy<Regex> = Lazy::new(|| re(r"wsjf|lean portfolio|epic owner|portfolio"));

fn has_daily_status(text: &str) -> bool {
    YESTERDAY.is_match(text) && TODAY.is_match(text)
}

/// Evaluate a marker against normalized text
pub fn marker_holds(marker: MarkerId, text: &str) -> bool {
    match marker {
        MarkerId::YesterdayTodayStructure => has_daily_status(text),
        MarkerId::BlockerMention => BLOCKER.is_match(text),
        MarkerId::IndividualUpdates => FIRST_PERSON.find_iter(text).count() >= 2,

        MarkerId::SprintGoalDefinition => SPRINT_GOAL.is_match(text),
        MarkerId::EstimationVocabulary => ESTIMATION.is_match(text),
        MarkerId::BacklogSelection => BACKLOG.is_match(text) && BACKLOG_PICK.is_match(text),
        MarkerId::CapacityDiscussion => CAPACITY.is_match(text),

        MarkerId::DemoVocabulary => DEMO.is_match(text),
        MarkerId::StakeholderPresence => STAKEHOLDERS.is_match(text),
        MarkerId::IncrementShowcase => INCREMENT.is_match(text),
        MarkerId::FeedbackCollection => FEEDBACK.is_match(text),

        MarkerId::WentWellQuestion => WENT_WELL.is_match(text),
        MarkerId::ImprovementFocus => IMPROVEMENT.is_match(text),
        MarkerId::ActionItems => ACTION_ITEMS.is_match(text),
        MarkerId::TeamReflection => REFLECTION.is_match(text),

        MarkerId::WipLimits => WIP.is_match(text),
        MarkerId::FlowMetrics => FLOW.is_match(text),
        MarkerId::BoardColumns => BOARD.is_match(text),

        MarkerId::PiPlanningEvent => PI_PLANNING.is_match(text),
        MarkerId::TrainCoordination => TRAIN.is_match(text),
        MarkerId::PortfolioAlignment => PORTFOLIO.is_match(text),

        MarkerId::NoEstimation => !ESTIMATION.is_match(text),
        MarkerId::NoDemo => !DEMO.is_match(text),
        MarkerId::NoRetrospective => !RETROSPECTIVE.is_match(text),
        MarkerId::NoDailyStatus => !has_daily_status(text),
        MarkerId::NoSprintCadence => !SPRINT.is_match(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::normalize::normalize_text;

    fn holds(marker: MarkerId, text: &str) -> bool {
        marker_holds(marker, &normalize_text(text))
    }

    #[test]
    fn test_daily_markers() {
        let text = "Hier j'ai fini la page. Aujourd'hui je fais les tests. Je suis bloqué.";
        assert!(holds(MarkerId::YesterdayTodayStructure, text));
        assert!(holds(MarkerId::BlockerMention, text));
        assert!(holds(MarkerId::IndividualUpdates, text));
        assert!(!holds(MarkerId::NoDailyStatus, text));
    }

    #[test]
    fn test_individual_updates_needs_two_statements() {
        assert!(!holds(MarkerId::IndividualUpdates, "Je regarde ça."));
        assert!(holds(MarkerId::IndividualUpdates, "Je regarde ça et j'ai fini."));
    }

    #[test]
    fn test_exclusion_markers_negate_signals() {
        assert!(holds(MarkerId::NoEstimation, "On a livré la page de paiement."));
        assert!(!holds(MarkerId::NoEstimation, "On doit estimer la story."));
        assert!(!holds(MarkerId::NoDemo, "Petite démo de la recherche."));
        assert!(!holds(
            MarkerId::NoRetrospective,
            "Qu'est-ce qui a bien fonctionné ce sprint ?"
        ));
        assert!(holds(MarkerId::NoRetrospective, "J'ai amélioré le cache."));
        assert!(!holds(MarkerId::NoSprintCadence, "Fin du sprint vendredi."));
    }

    #[test]
    fn test_backlog_selection_needs_both_parts() {
        assert!(!holds(MarkerId::BacklogSelection, "Le backlog est long."));
        assert!(holds(
            MarkerId::BacklogSelection,
            "Qui veut prendre une story du backlog ?"
        ));
    }

    #[test]
    fn test_planning_and_review_markers() {
        assert!(holds(MarkerId::SprintGoalDefinition, "L'objectif du sprint est clair."));
        assert!(holds(MarkerId::CapacityDiscussion, "Notre vélocité baisse."));
        assert!(holds(MarkerId::StakeholderPresence, "Le client est présent."));
        assert!(holds(
            MarkerId::IncrementShowcase,
            "Voici les fonctionnalités livrées."
        ));
        assert!(holds(MarkerId::FeedbackCollection, "Quel est votre avis ?"));
    }

    #[test]
    fn test_kanban_and_safe_markers() {
        assert!(holds(MarkerId::WipLimits, "On dépasse la limite de WIP."));
        assert!(holds(MarkerId::FlowMetrics, "Le lead time a doublé."));
        assert!(holds(MarkerId::BoardColumns, "La colonne review déborde."));
        assert!(holds(MarkerId::PiPlanningEvent, "Préparation du PI Planning."));
        assert!(holds(MarkerId::TrainCoordination, "Le RTE anime la synchro."));
        assert!(holds(MarkerId::PortfolioAlignment, "Priorisation WSJF des epics."));
    }
}
