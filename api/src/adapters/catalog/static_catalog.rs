//! Static in-memory implementation of AntiPatternCatalog
//!
//! The curated coaching catalog, keyed by ceremony label. Signal phrases
//! are matched against the normalized transcript by the analysis service.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::entities::{AntiPattern, CeremonyCategory, Severity};
use crate::domain::ports::AntiPatternCatalog;
use crate::error::DomainError;

/// Built-in anti-pattern catalog
pub struct StaticAntiPatternCatalog {
    by_label: HashMap<&'static str, Vec<AntiPattern>>,
}

impl StaticAntiPatternCatalog {
    pub fn new() -> Self {
        let by_label = CeremonyCategory::ALL
            .iter()
            .map(|category| (category.label(), entries_for(*category)))
            .collect();
        Self { by_label }
    }
}

impl Default for StaticAntiPatternCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AntiPatternCatalog for StaticAntiPatternCatalog {
    async fn for_ceremony(
        &self,
        category: CeremonyCategory,
    ) -> Result<Vec<AntiPattern>, DomainError> {
        Ok(self
            .by_label
            .get(category.label())
            .cloned()
            .unwrap_or_default())
    }

    async fn all(&self) -> Result<Vec<(CeremonyCategory, Vec<AntiPattern>)>, DomainError> {
        Ok(CeremonyCategory::ALL
            .iter()
            .map(|category| {
                let entries = self.by_label.get(category.label()).cloned().unwrap_or_default();
                (*category, entries)
            })
            .collect())
    }
}

fn entries_for(category: CeremonyCategory) -> Vec<AntiPattern> {
    match category {
        CeremonyCategory::DailyScrum => vec![
            AntiPattern::new(
                "Daily transformé en réunion de résolution",
                Severity::High,
                "Noter les sujets techniques et les traiter après le daily avec les seules personnes concernées",
                &["on regarde ensemble maintenant", "on peut en parler tout de suite", "je partage mon écran"],
            ),
            AntiPattern::new(
                "Reporting au manager",
                Severity::High,
                "Les développeurs se parlent entre eux; le Scrum Master reste en retrait",
                &["je te fais un point", "pour ton reporting", "comme tu m'as demandé"],
            ),
            AntiPattern::new(
                "Blocages non traités",
                Severity::Critical,
                "Chaque blocage remonté repart avec un responsable et un délai",
                &["toujours bloqué", "encore bloqué", "depuis trois jours", "depuis plusieurs jours"],
            ),
            AntiPattern::new(
                "Dépassement du timebox",
                Severity::Medium,
                "Tenir les 15 minutes, utiliser un minuteur visible",
                &["on déborde", "ça a duré", "on a dépassé"],
            ),
        ],
        CeremonyCategory::SprintPlanning => vec![
            AntiPattern::new(
                "Absence de sprint goal",
                Severity::High,
                "Formuler un objectif unique qui donne du sens à la sélection",
                &["pas d'objectif", "pas de sprint goal", "on prend tout"],
            ),
            AntiPattern::new(
                "Engagement au-delà de la capacité",
                Severity::High,
                "S'appuyer sur la vélocité observée et les absences connues",
                &["on rajoute encore", "on devrait y arriver en forçant", "on fera des heures sup"],
            ),
            AntiPattern::new(
                "Stories non prêtes",
                Severity::Medium,
                "Affiner le backlog en amont avec une definition of ready partagée",
                &["on ne sait pas encore", "critères d'acceptation manquants", "à préciser plus tard"],
            ),
            AntiPattern::new(
                "Estimation imposée",
                Severity::Medium,
                "Laisser les développeurs estimer, par exemple en planning poker",
                &["le chef a dit", "ça doit tenir en", "c'est déjà estimé par"],
            ),
        ],
        CeremonyCategory::SprintReview => vec![
            AntiPattern::new(
                "Démo sans parties prenantes",
                Severity::High,
                "Inviter utilisateurs et sponsors, la review sert à collecter du feedback",
                &["personne du métier", "le client n'est pas là", "pas de client"],
            ),
            AntiPattern::new(
                "Présentation PowerPoint",
                Severity::Medium,
                "Montrer le produit fonctionnel plutôt que des slides",
                &["powerpoint", "slides", "captures d'écran"],
            ),
            AntiPattern::new(
                "Travail non terminé présenté",
                Severity::Medium,
                "Ne démontrer que ce qui respecte la definition of done",
                &["presque fini", "pas encore terminé", "il reste quelques bugs"],
            ),
        ],
        CeremonyCategory::Retrospective => vec![
            AntiPattern::new(
                "Aucune action concrète",
                Severity::High,
                "Terminer par une ou deux actions avec responsable et échéance",
                &["on verra", "rien à changer", "comme d'habitude"],
            ),
            AntiPattern::new(
                "Recherche de coupable",
                Severity::Critical,
                "Rappeler la directive première et se concentrer sur le système",
                &["c'est de ta faute", "c'est la faute de", "à cause de lui", "à cause d'elle"],
            ),
            AntiPattern::new(
                "Actions précédentes non suivies",
                Severity::Medium,
                "Ouvrir la rétrospective par la revue des actions du sprint précédent",
                &["comme la dernière fois", "on l'avait déjà dit", "toujours pas fait"],
            ),
            AntiPattern::new(
                "Format répétitif",
                Severity::Low,
                "Varier les formats d'animation (starfish, speed boat, 4L)",
                &["toujours le même format", "encore le même exercice"],
            ),
        ],
        CeremonyCategory::Kanban => vec![
            AntiPattern::new(
                "Limites de WIP ignorées",
                Severity::High,
                "Arrêter de commencer, commencer à finir",
                &["on dépasse la limite", "on ignore la limite", "trop de tickets en cours"],
            ),
            AntiPattern::new(
                "Flux non mesuré",
                Severity::Medium,
                "Suivre lead time et cycle time pour piloter les améliorations",
                &["on ne mesure pas", "aucune métrique", "pas de métriques"],
            ),
            AntiPattern::new(
                "Tickets bloqués sans visibilité",
                Severity::Medium,
                "Signaler les blocages sur le tableau et les traiter en priorité",
                &["bloqué depuis", "personne ne s'en occupe"],
            ),
        ],
        CeremonyCategory::Safe => vec![
            AntiPattern::new(
                "PI Planning sans business owners",
                Severity::High,
                "Faire valider les objectifs de PI par les business owners",
                &["pas de business owner", "sans le métier"],
            ),
            AntiPattern::new(
                "Dépendances non identifiées",
                Severity::High,
                "Maintenir le program board à jour pendant le PI Planning",
                &["dépendance découverte", "on ne savait pas", "pas vu la dépendance"],
            ),
            AntiPattern::new(
                "Inspect & Adapt escamoté",
                Severity::Medium,
                "Réserver un vrai temps de résolution de problèmes en fin de PI",
                &["on saute l'inspect", "pas le temps pour l'inspect"],
            ),
        ],
        CeremonyCategory::None => vec![
            AntiPattern::new(
                "Réunion sans objectif clair",
                Severity::Medium,
                "Annoncer l'objectif et le résultat attendu en début de réunion",
                &["pourquoi on est là", "c'est quoi le but"],
            ),
            AntiPattern::new(
                "Participation déséquilibrée",
                Severity::Low,
                "Faciliter pour que chacun puisse s'exprimer",
                &["laisse-moi finir", "tu me coupes"],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn every_label_has_entries() {
        let catalog = StaticAntiPatternCatalog::new();
        for category in CeremonyCategory::ALL {
            let entries = block_on(catalog.for_ceremony(category)).unwrap();
            assert!(!entries.is_empty(), "{}", category);
        }
    }

    #[test]
    fn keys_are_ceremony_labels() {
        let catalog = StaticAntiPatternCatalog::new();
        let mut keys: Vec<&str> = catalog.by_label.keys().copied().collect();
        keys.sort_unstable();
        let mut labels: Vec<&str> = CeremonyCategory::ALL.iter().map(|c| c.label()).collect();
        labels.sort_unstable();
        assert_eq!(keys, labels);
    }

    #[test]
    fn all_follows_declaration_order() {
        let catalog = StaticAntiPatternCatalog::new();
        let all = block_on(catalog.all()).unwrap();
        let order: Vec<CeremonyCategory> = all.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, CeremonyCategory::ALL.to_vec());
    }

    #[test]
    fn every_entry_has_signals() {
        let catalog = StaticAntiPatternCatalog::new();
        let all = block_on(catalog.all()).unwrap();
        assert!(all
            .iter()
            .flat_map(|(_, entries)| entries)
            .all(|a| !a.signals.is_empty() && !a.suggestion.is_empty()));
    }
}
