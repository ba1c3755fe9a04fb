//! Lexicon tables for the domain gate
//!
//! Veto rules for off-topic themes and the four professional layers.
//! Tables are compiled once on first use and never mutated.

use once_cell::sync::Lazy;

use super::matcher::TermMatcher;
use super::scoring_config::{
    ENTERTAINMENT_VETO_CONFIDENCE, PERSONAL_VETO_CONFIDENCE, SPORTS_VETO_CONFIDENCE,
};
use crate::domain::entities::{LexicalLayer, Theme};

/// An early rejection rule for an off-topic theme
#[derive(Debug)]
pub struct VetoRule {
    pub id: &'static str,
    pub theme: Theme,
    pub proper_nouns: TermMatcher,
    pub lexicon: TermMatcher,
    /// Any hit here cancels the veto
    pub exclusions: TermMatcher,
    pub min_proper_noun_hits: usize,
    pub min_lexicon_hits: usize,
    pub confidence: u8,
}

/// Evidence gathered when a veto fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VetoHit {
    pub theme: Theme,
    pub confidence: u8,
    pub proper_noun_hits: usize,
    pub lexicon_hits: usize,
    pub terms: Vec<String>,
}

impl VetoRule {
    /// Returns the hit when every threshold is met and no exclusion applies
    pub fn evaluate(&self, normalized: &str) -> Option<VetoHit> {
        let nouns = self.proper_nouns.matches(normalized);
        if nouns.len() < self.min_proper_noun_hits {
            return None;
        }
        let lexicon = self.lexicon.matches(normalized);
        if lexicon.len() < self.min_lexicon_hits {
            return None;
        }
        if self.exclusions.any(normalized) {
            tracing::debug!(rule = self.id, "veto cancelled by exclusion phrase");
            return None;
        }

        Some(VetoHit {
            theme: self.theme,
            confidence: self.confidence,
            proper_noun_hits: nouns.len(),
            lexicon_hits: lexicon.len(),
            terms: nouns
                .into_iter()
                .chain(lexicon)
                .map(str::to_string)
                .collect(),
        })
    }
}

const SPORTS_PROPER_NOUNS: &[&str] = &[
    // Clubs
    "real madrid",
    "fc barcelone",
    "barça",
    "psg",
    "paris saint-germain",
    "olympique de marseille",
    "olympique lyonnais",
    "manchester united",
    "manchester city",
    "liverpool",
    "juventus",
    "bayern",
    "chelsea",
    "stade toulousain",
    "lakers",
    // Players
    "cristiano",
    "ronaldo",
    "messi",
    "mbappé",
    "neymar",
    "benzema",
    "zidane",
    "griezmann",
    "haaland",
    "lebron",
    "federer",
    "nadal",
    "djokovic",
    "wembanyama",
];

const SPORTS_LEXICON: &[&str] = &[
    "match",
    "terrain",
    "arbitre",
    "mi-temps",
    "penalty",
    "carton rouge",
    "carton jaune",
    "hors-jeu",
    "a marqué",
    "marquer un but",
    "coup franc",
    "championnat",
    "ligue des champions",
    "coupe du monde",
    "supporters",
    "stade",
    "gardien",
    "attaquant",
    "tir au but",
    "score final",
    "transfert",
];

const TEAM_BUILDING_EXCLUSIONS: &[&str] = &[
    "team building",
    "team-building",
    "teambuilding",
    "séminaire d'équipe",
    "activité de cohésion",
    "sortie d'équipe",
];

const ENTERTAINMENT_TERMS: &[&str] = &[
    "film",
    "netflix",
    "cinéma",
    "épisode",
    "une série",
    "la série",
    "ma série",
    "série télé",
    "acteur principal",
    "actrice",
    "réalisateur",
    "spoiler",
    "bande-annonce",
    "un concert",
    "en concert",
    "jeu vidéo",
    "jeux vidéo",
    "playstation",
    "disney",
    "spotify",
    "youtubeur",
];

const PRODUCTION_EXCLUSIONS: &[&str] = &[
    "production vidéo",
    "post-production",
    "tournage client",
    "agence de production",
    "projet audiovisuel",
    "studio de production",
    "plateforme de streaming",
];

const PERSONAL_TERMS: &[&str] = &[
    "vacances",
    "famille",
    "restaurant",
    "anniversaire",
    "mariage",
    "mes enfants",
    "ma femme",
    "mon mari",
    "ma copine",
    "mon copain",
    "apéro",
    "barbecue",
    "shopping",
    "recette de cuisine",
    "à la plage",
    "ma mère",
    "mon père",
];

const HR_EXCLUSIONS: &[&str] = &[
    "ressources humaines",
    "congés payés",
    "planning des congés",
    "capacité de l'équipe",
    "disponibilité de l'équipe",
    "jours off",
    "absence",
];

/// Veto rules in priority order
pub static VETO_RULES: Lazy<Vec<VetoRule>> = Lazy::new(|| {
    vec![
        VetoRule {
            id: "sports",
            theme: Theme::Sport,
            proper_nouns: TermMatcher::from_static(SPORTS_PROPER_NOUNS),
            lexicon: TermMatcher::from_static(SPORTS_LEXICON),
            exclusions: TermMatcher::from_static(TEAM_BUILDING_EXCLUSIONS),
            min_proper_noun_hits: 1,
            min_lexicon_hits: 2,
            confidence: SPORTS_VETO_CONFIDENCE,
        },
        VetoRule {
            id: "entertainment",
            theme: Theme::Entertainment,
            proper_nouns: TermMatcher::from_static(&[]),
            lexicon: TermMatcher::from_static(ENTERTAINMENT_TERMS),
            exclusions: TermMatcher::from_static(PRODUCTION_EXCLUSIONS),
            min_proper_noun_hits: 0,
            min_lexicon_hits: 2,
            confidence: ENTERTAINMENT_VETO_CONFIDENCE,
        },
        VetoRule {
            id: "personal_life",
            theme: Theme::PersonalLife,
            proper_nouns: TermMatcher::from_static(&[]),
            lexicon: TermMatcher::from_static(PERSONAL_TERMS),
            exclusions: TermMatcher::from_static(HR_EXCLUSIONS),
            min_proper_noun_hits: 0,
            min_lexicon_hits: 2,
            confidence: PERSONAL_VETO_CONFIDENCE,
        },
    ]
});

const PROJECT_MANAGEMENT_TERMS: &[&str] = &[
    "projet",
    "sprint",
    "backlog",
    "roadmap",
    "livrable",
    "jalon",
    "deadline",
    "échéance",
    "scrum",
    "kanban",
    "agile",
    "itération",
    "release",
    "story",
    "stories",
    "epic",
    "vélocité",
    "burndown",
    "périmètre",
    "objectif",
    "mvp",
    "kpi",
    "rétrospective",
    "daily",
    "stand-up",
    "planning",
    "incrément",
    "definition of done",
    "ticket",
    "jira",
    // Review, Kanban and SAFe ceremonies
    "review",
    "wip",
    "lead time",
    "cycle time",
    "pi planning",
    "release train",
    "program increment",
    "wsjf",
];

const ROLE_TERMS: &[&str] = &[
    "product owner",
    "scrum master",
    "développeur",
    "développeuse",
    "équipe",
    "team",
    "manager",
    "chef de projet",
    "client",
    "stakeholder",
    "partie prenante",
    "parties prenantes",
    "utilisateur",
    "testeur",
    "designer",
    "architecte",
    "coach",
    "tech lead",
    "lead dev",
    "sponsor",
];

const ACTIVITY_TERMS: &[&str] = &[
    "estimation",
    "priorité",
    "réunion",
    "livraison",
    "déploiement",
    "développement",
    "test",
    "revue",
    "validation",
    "spécification",
    "intégration",
    "recette",
    "maquette",
    "prototype",
    "documentation",
    "tâche",
    "avancement",
    "bug",
    "correctif",
    "fonctionnalité",
    "feature",
    "l'api",
    "code",
    "pull request",
    "mise en production",
    "refactoring",
    "architecture",
    "démonstration",
    "amélioration",
    "démo",
    "présentation",
    "feedback",
    "capacité",
    "colonne",
    "goulot",
    "flux",
    "synchronisation",
];

// Stems, so infinitive and participle forms share one entry
const ACTIVITY_VERB_STEMS: &[&str] = &[
    "développ",
    "livr",
    "déploy",
    "estim",
    "prioris",
    "planifi",
    "valid",
    "corrig",
    "implément",
    "intégr",
    "termin",
    "débloqu",
    "finalis",
    "présent",
    "démontr",
    "amélior",
    "automatis",
    "refactor",
    "merg",
    "travaill",
    "montr",
    "synchronis",
    "align",
];

const PROBLEM_TERMS: &[&str] = &[
    "problème",
    "bloqué",
    "blocage",
    "risque",
    "retard",
    "dette technique",
    "régression",
    "incident",
    "difficulté",
    "obstacle",
    "impediment",
    "conflit",
    "urgence",
    "critique",
    "escalade",
    "dépassement",
    "surcharge",
    "dépendance",
    "besoin d'aide",
];

/// Professional lexicon, one matcher per layer
pub static PROFESSIONAL_LAYERS: Lazy<Vec<(LexicalLayer, TermMatcher)>> = Lazy::new(|| {
    vec![
        (
            LexicalLayer::ProjectManagement,
            TermMatcher::from_static(PROJECT_MANAGEMENT_TERMS),
        ),
        (LexicalLayer::Roles, TermMatcher::from_static(ROLE_TERMS)),
        (
            LexicalLayer::Activities,
            TermMatcher::from_static(ACTIVITY_TERMS),
        ),
        (
            LexicalLayer::ActivityVerbs,
            TermMatcher::from_static(ACTIVITY_VERB_STEMS),
        ),
        (
            LexicalLayer::Problems,
            TermMatcher::from_static(PROBLEM_TERMS),
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::normalize::normalize_text;

    fn rule(id: &str) -> &'static VetoRule {
        VETO_RULES.iter().find(|r| r.id == id).unwrap()
    }

    #[test]
    fn test_veto_rules_are_in_priority_order() {
        let themes: Vec<Theme> = VETO_RULES.iter().map(|r| r.theme).collect();
        assert_eq!(
            themes,
            vec![Theme::Sport, Theme::Entertainment, Theme::PersonalLife]
        );
    }

    #[test]
    fn test_sports_rule_requires_proper_noun() {
        let text = normalize_text("Le match était serré, l'arbitre a sifflé la mi-temps.");
        assert!(rule("sports").evaluate(&text).is_none());

        let text = normalize_text("Mbappé: le match était serré, l'arbitre a sifflé la mi-temps.");
        let hit = rule("sports").evaluate(&text).unwrap();
        assert_eq!(hit.proper_noun_hits, 1);
        assert_eq!(hit.lexicon_hits, 3);
        assert!(hit.terms.contains(&"mbappe".to_string()));
    }

    #[test]
    fn test_sports_rule_cancelled_by_team_building() {
        let text = normalize_text(
            "Pour le team building on regarde le match du PSG au stade avec l'arbitre.",
        );
        assert!(rule("sports").evaluate(&text).is_none());
    }

    #[test]
    fn test_entertainment_rule_cancelled_by_production_context() {
        let text = normalize_text("Le film et l'épisode pilote sont en post-production pour le client.");
        assert!(rule("entertainment").evaluate(&text).is_none());
        let text = normalize_text("Le film et l'épisode pilote étaient géniaux.");
        assert!(rule("entertainment").evaluate(&text).is_some());
    }

    #[test]
    fn test_layers_cover_every_lexical_layer() {
        let layers: Vec<LexicalLayer> = PROFESSIONAL_LAYERS.iter().map(|(l, _)| *l).collect();
        assert_eq!(layers, LexicalLayer::ALL.to_vec());
        assert!(PROFESSIONAL_LAYERS.iter().all(|(_, m)| !m.is_empty()));
    }
}
