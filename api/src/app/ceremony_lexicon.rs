//! Per-ceremony lexicon profiles
//!
//! Every scored ceremony carries four evidence channels: literal keywords
//! (presence), regex patterns (occurrences), boolean markers and verb
//! patterns (occurrences, tie-break only). Patterns are written against
//! normalized text: lowercase, no diacritics, straight apostrophes.

use once_cell::sync::Lazy;

use super::matcher::{PatternList, TermMatcher};
use crate::domain::entities::{CeremonyCategory, MarkerId};

#[derive(Debug)]
pub struct CeremonyProfile {
    pub category: CeremonyCategory,
    pub keywords: TermMatcher,
    pub patterns: PatternList,
    pub markers: &'static [MarkerId],
    pub verbs: PatternList,
}

const DAILY_KEYWORDS: &[&str] = &[
    "daily",
    "stand-up",
    "standup",
    "mêlée quotidienne",
    "point quotidien",
    "hier",
    "aujourd'hui",
    "bloqué",
    "blocage",
    "besoin d'aide",
    "je continue",
    "je travaille sur",
    "yesterday",
    "today",
    "blocker",
];

const DAILY_PATTERNS: &[&str] = &[
    r"\bhier\b[^.?!]*\b(?:j'ai|on a|nous avons|je)\b",
    r"aujourd'hui[^.?!]*\b(?:je|j'|on|nous)\b",
    r"\b(?:je suis|on est|nous sommes|il est|elle est)\s+bloque",
    r"\bbesoin d'aide\b",
    r"\bj'ai (?:termine|fini|corrige|livre|avance|commence)",
    r"\bje (?:continue|travaille|reprends|commence)\b",
];

const DAILY_MARKERS: &[MarkerId] = &[
    MarkerId::YesterdayTodayStructure,
    MarkerId::BlockerMention,
    MarkerId::IndividualUpdates,
    MarkerId::NoEstimation,
    MarkerId::NoRetrospective,
    MarkerId::NoDemo,
];

const DAILY_VERBS: &[&str] = &[
    r"\bj'ai (?:termine|fini|corrige|avance|commence)",
    r"\bje (?:continue|travaille|commence|reprends)\b",
    r"\b(?:suis|sommes|est) bloque",
    r"\bdebloqu\w*",
];

const PLANNING_KEYWORDS: &[&str] = &[
    "sprint planning",
    "planification",
    "backlog",
    "user story",
    "user stories",
    "story points",
    "estimer",
    "estimation",
    "sprint goal",
    "objectif du sprint",
    "objectif de sprint",
    "capacité",
    "vélocité",
    "prioriser",
    "priorisation",
    "planning poker",
    "découpage",
    "engagement de l'équipe",
];

const PLANNING_PATTERNS: &[&str] = &[
    r"\bestim\w*",
    r"\bstory points?\b|\bpoints? d'effort\b",
    r"\bsprint goal\b|\bobjectif d[ue] sprint\b",
    r"\bqui (?:peut|va|veut) prendre\b",
    r"\bprioris\w*",
    r"\b(?:\d+|une|deux|trois|quatre) (?:prochaines? )?semaines?\b",
];

const PLANNING_MARKERS: &[MarkerId] = &[
    MarkerId::SprintGoalDefinition,
    MarkerId::EstimationVocabulary,
    MarkerId::BacklogSelection,
    MarkerId::CapacityDiscussion,
    MarkerId::NoDemo,
    MarkerId::NoRetrospective,
    MarkerId::NoDailyStatus,
];

const PLANNING_VERBS: &[&str] = &[
    r"\bestim\w*",
    r"\bprioris\w*",
    r"\bplanifi\w*",
    r"\bdecoup\w*",
    r"\bs'engag\w*",
    r"\bprendre\b",
    r"\bselectionn\w*",
];

const REVIEW_KEYWORDS: &[&str] = &[
    "sprint review",
    "revue de sprint",
    "démo",
    "démonstration",
    "incrément",
    "parties prenantes",
    "stakeholder",
    "feedback",
    "retour client",
    "retours utilisateurs",
    "fonctionnalités livrées",
    "présentation",
];

const REVIEW_PATTERNS: &[&str] = &[
    r"\bdemo\w*",
    r"\bpresent\w*",
    r"\b(?:parties prenantes|stakeholders?)\b",
    r"\b(?:feedback|retours?) (?:client|des utilisateurs|utilisateurs?)\b",
    r"\bincrement\b",
    r"\b(?:fonctionnalites?|features?) (?:livrees?|terminees?)\b",
];

const REVIEW_MARKERS: &[MarkerId] = &[
    MarkerId::DemoVocabulary,
    MarkerId::StakeholderPresence,
    MarkerId::IncrementShowcase,
    MarkerId::FeedbackCollection,
    MarkerId::NoEstimation,
    MarkerId::NoDailyStatus,
    MarkerId::NoRetrospective,
];

const REVIEW_VERBS: &[&str] = &[
    r"\bdemontr\w*",
    r"\bpresent\w*",
    r"\bmontr\w*",
    r"\bvalid\w*",
    r"\blivr\w*",
];

const RETRO_KEYWORDS: &[&str] = &[
    "rétrospective",
    "rétro",
    "bien fonctionné",
    "bien marché",
    "améliorer",
    "amélioration",
    "leçons apprises",
    "plan d'action",
    "start stop continue",
    "mad sad glad",
    "ressenti",
];

const RETRO_PATTERNS: &[&str] = &[
    r"qu'est-ce qui a (?:bien )?(?:fonctionne|marche)",
    r"qu'est-ce qu'on (?:pourrait|peut|doit) (?:ameliorer|changer)",
    r"\bamelior\w*",
    r"\baction\s*:",
    r"\b(?:va|vont|allons) (?:automatiser|mettre en place|documenter|ameliorer|tester|changer)\b",
    r"\bce qui (?:a|n'a pas) (?:bien )?(?:marche|fonctionne)",
];

const RETRO_MARKERS: &[MarkerId] = &[
    MarkerId::WentWellQuestion,
    MarkerId::ImprovementFocus,
    MarkerId::ActionItems,
    MarkerId::TeamReflection,
    MarkerId::NoEstimation,
    MarkerId::NoDemo,
    MarkerId::NoDailyStatus,
];

const RETRO_VERBS: &[&str] = &[
    r"\bamelior\w*",
    r"\bfonctionn\w*",
    r"\bautomatis\w*",
    r"\b(?:apprendre|appris)\b",
    r"\bchanger\b",
    r"\breflechi\w*",
];

const KANBAN_KEYWORDS: &[&str] = &[
    "kanban",
    "wip",
    "work in progress",
    "lead time",
    "cycle time",
    "colonne",
    "goulot d'étranglement",
    "flux",
    "cumulative flow",
    "throughput",
    "limite de wip",
];

const KANBAN_PATTERNS: &[&str] = &[
    r"\bwip\b",
    r"\b(?:lead|cycle) time\b",
    r"\bgoulots? d'etranglement\b",
    r"\bcolonnes?\b",
    r"\bflux\b",
];

const KANBAN_MARKERS: &[MarkerId] = &[
    MarkerId::WipLimits,
    MarkerId::FlowMetrics,
    MarkerId::BoardColumns,
    MarkerId::NoSprintCadence,
];

const SAFE_KEYWORDS: &[&str] = &[
    "safe",
    "pi planning",
    "program increment",
    "agile release train",
    "release train engineer",
    "solution train",
    "inspect and adapt",
    "inspect & adapt",
    "system demo",
    "lean portfolio",
    "wsjf",
];

const SAFE_PATTERNS: &[&str] = &[
    r"\bpi planning\b",
    r"\bprogram increment\b",
    r"\bart\b",
    r"\brte\b",
    r"\bwsjf\b",
];

const SAFE_MARKERS: &[MarkerId] = &[
    MarkerId::PiPlanningEvent,
    MarkerId::TrainCoordination,
    MarkerId::PortfolioAlignment,
];

/// Profiles in declaration (tie-break) order
pub static PROFILES: Lazy<Vec<CeremonyProfile>> = Lazy::new(|| {
    vec![
        CeremonyProfile {
            category: CeremonyCategory::DailyScrum,
            keywords: TermMatcher::from_static(DAILY_KEYWORDS),
            patterns: PatternList::from_static(DAILY_PATTERNS),
            markers: DAILY_MARKERS,
            verbs: PatternList::from_static(DAILY_VERBS),
        },
        CeremonyProfile {
            category: CeremonyCategory::SprintPlanning,
            keywords: TermMatcher::from_static(PLANNING_KEYWORDS),
            patterns: PatternList::from_static(PLANNING_PATTERNS),
            markers: PLANNING_MARKERS,
            verbs: PatternList::from_static(PLANNING_VERBS),
        },
        CeremonyProfile {
            category: CeremonyCategory::SprintReview,
            keywords: TermMatcher::from_static(REVIEW_KEYWORDS),
            patterns: PatternList::from_static(REVIEW_PATTERNS),
            markers: REVIEW_MARKERS,
            verbs: PatternList::from_static(REVIEW_VERBS),
        },
        CeremonyProfile {
            category: CeremonyCategory::Retrospective,
            keywords: TermMatcher::from_static(RETRO_KEYWORDS),
            patterns: PatternList::from_static(RETRO_PATTERNS),
            markers: RETRO_MARKERS,
            verbs: PatternList::from_static(RETRO_VERBS),
        },
        // Kanban and SAFe have no verb channel
        CeremonyProfile {
            category: CeremonyCategory::Kanban,
            keywords: TermMatcher::from_static(KANBAN_KEYWORDS),
            patterns: PatternList::from_static(KANBAN_PATTERNS),
            markers: KANBAN_MARKERS,
            verbs: PatternList::empty(),
        },
        CeremonyProfile {
            category: CeremonyCategory::Safe,
            keywords: TermMatcher::from_static(SAFE_KEYWORDS),
            patterns: PatternList::from_static(SAFE_PATTERNS),
            markers: SAFE_MARKERS,
            verbs: PatternList::empty(),
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_follow_declaration_order() {
        let order: Vec<CeremonyCategory> = PROFILES.iter().map(|p| p.category).collect();
        assert_eq!(order, CeremonyCategory::SCORED.to_vec());
    }

    #[test]
    fn test_every_profile_has_keywords_patterns_and_markers() {
        for profile in PROFILES.iter() {
            assert!(!profile.keywords.is_empty(), "{}", profile.category);
            assert!(!profile.patterns.is_empty(), "{}", profile.category);
            assert!(
                profile.markers.iter().any(|m| !m.is_exclusion()),
                "{}",
                profile.category
            );
        }
    }

    #[test]
    fn test_verb_channel_only_for_scrum_events() {
        for profile in PROFILES.iter() {
            let has_verbs = !profile.verbs.is_empty();
            let expected = !matches!(
                profile.category,
                CeremonyCategory::Kanban | CeremonyCategory::Safe
            );
            assert_eq!(has_verbs, expected, "{}", profile.category);
        }
    }

    #[test]
    fn test_planning_patterns_ignore_next_sprint_mentions() {
        let planning = &PROFILES[1];
        assert_eq!(planning.patterns.occurrences("on verra au prochain sprint"), 0);
        assert_eq!(planning.patterns.occurrences("sur les deux prochaines semaines"), 1);
    }
}
