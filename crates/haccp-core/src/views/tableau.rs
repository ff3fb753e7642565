//! Indicadores del tableau de bord y alertas DLC.

use chrono::NaiveDate;
use haccp_domain::{Controle, Formation, Nettoyage, Produit, StatutControle};
use serde::Serialize;

/// Ventana de alerta DLC, en días.
pub const DLC_ALERTE_JOURS: i64 = 3;

/// Compteurs du jour pour l'écran d'accueil.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsTableau {
    pub controles_jour: usize,
    pub produits_recus: usize,
    pub nettoyages_jour: usize,
    pub formations: usize,
    pub non_conformites: usize,
}

/// Cuenta la actividad del día y las non-conformités pendientes
/// (contrôles non conformes + produits recibidos no conformes).
pub fn stats_tableau(controles: &[Controle],
                     produits: &[Produit],
                     nettoyages: &[Nettoyage],
                     formations: &[Formation],
                     aujourdhui: NaiveDate)
                     -> StatsTableau {
    StatsTableau { controles_jour: controles.iter().filter(|c| c.date == aujourdhui).count(),
                   produits_recus: produits.iter().filter(|p| p.date_reception == aujourdhui).count(),
                   nettoyages_jour: nettoyages.iter().filter(|n| n.date == aujourdhui).count(),
                   formations: formations.len(),
                   non_conformites: controles.iter()
                                             .filter(|c| c.statut == StatutControle::NonConforme)
                                             .count()
                                    + produits.iter().filter(|p| !p.conforme).count() }
}

/// DLC dentro de la ventana de alerta (de hoy a 3 días vista).
pub fn dlc_proche(dlc: NaiveDate, aujourdhui: NaiveDate) -> bool {
    (0..=DLC_ALERTE_JOURS).contains(&(dlc - aujourdhui).num_days())
}

/// DLC estrictamente anterior a hoy.
pub fn dlc_depassee(dlc: NaiveDate, aujourdhui: NaiveDate) -> bool {
    dlc < aujourdhui
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use haccp_domain::{ControleDraft, FormationDraft, NettoyageDraft, ProduitDraft, Record, RecordId, TypeControle};

    fn aujourdhui() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn controle(date: &str, statut: StatutControle) -> Controle {
        Controle::assemble(ControleDraft { date: date.parse().unwrap(),
                                           type_: TypeControle::Temperature,
                                           valeur: "4.0".to_string(),
                                           statut,
                                           action: None,
                                           commentaire: None },
                           RecordId::generate(),
                           Utc::now())
    }

    fn produit(date_reception: &str, conforme: bool) -> Produit {
        Produit::assemble(ProduitDraft { nom: "Poulet".to_string(),
                                         fournisseur: "Metro".to_string(),
                                         date_reception: date_reception.parse().unwrap(),
                                         dlc: "2024-06-04".parse().unwrap(),
                                         temperature_reception: None,
                                         conforme,
                                         allergenes: vec![] },
                          RecordId::generate(),
                          Utc::now())
    }

    #[test]
    fn counts_today_only_and_sums_non_conformities() {
        let controles = vec![controle("2024-06-01", StatutControle::Conforme),
                             controle("2024-06-01", StatutControle::NonConforme),
                             controle("2024-05-31", StatutControle::NonConforme)];
        let produits = vec![produit("2024-06-01", true), produit("2024-05-30", false)];
        let nettoyages = vec![Nettoyage::assemble(NettoyageDraft { date: aujourdhui(),
                                                                   zone: "plonge".to_string(),
                                                                   produit_utilise: "dégraissant".to_string(),
                                                                   realise: true,
                                                                   controle_visuel: true },
                                                  RecordId::generate(),
                                                  Utc::now())];
        let formations = vec![Formation::assemble(FormationDraft { date: "2024-03-12".parse().unwrap(),
                                                                   sujet: "Hygiène".to_string(),
                                                                   personne_formee: "A. Martin".to_string(),
                                                                   duree: 2.0 },
                                                  RecordId::generate(),
                                                  Utc::now())];
        let stats = stats_tableau(&controles, &produits, &nettoyages, &formations, aujourdhui());
        assert_eq!(stats,
                   StatsTableau { controles_jour: 2,
                                  produits_recus: 1,
                                  nettoyages_jour: 1,
                                  formations: 1,
                                  non_conformites: 3 });
    }

    #[test]
    fn dlc_window_runs_from_today_to_three_days_out() {
        let today = aujourdhui();
        assert!(dlc_proche("2024-06-01".parse().unwrap(), today));
        assert!(dlc_proche("2024-06-04".parse().unwrap(), today));
        assert!(!dlc_proche("2024-06-05".parse().unwrap(), today));
        assert!(!dlc_proche("2024-05-31".parse().unwrap(), today), "a past DLC is depassee, not proche");
        assert!(dlc_depassee("2024-05-31".parse().unwrap(), today));
        assert!(!dlc_depassee("2024-06-01".parse().unwrap(), today));
    }
}
