//! Estadísticas derivadas de facturas.

use chrono::{Datelike, NaiveDate};
use haccp_domain::{CategorieFacture, Facture};
use indexmap::IndexMap;
use serde::Serialize;

/// Totales globales y subconjunto del mes en curso.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsFactures {
    pub total_factures: usize,
    pub montant_total_ht: f64,
    pub montant_total_ttc: f64,
    pub factures_ce_mois: usize,
    pub montant_ce_mois: f64,
}

/// Calcula los totales sobre el snapshot completo.
///
/// "Ce mois" = mismo año y mes calendario que `aujourdhui`. Colección vacía:
/// todo a cero. Acumulación f64 nativa (el TTC almacenado nunca se re-deriva).
pub fn stats_factures(factures: &[Facture], aujourdhui: NaiveDate) -> StatsFactures {
    let ce_mois: Vec<&Facture> = factures.iter()
                                         .filter(|f| f.date.year() == aujourdhui.year()
                                                     && f.date.month() == aujourdhui.month())
                                         .collect();
    StatsFactures { total_factures: factures.len(),
                    montant_total_ht: factures.iter().map(|f| f.montant_ht).sum(),
                    montant_total_ttc: factures.iter().map(|f| f.montant_ttc).sum(),
                    factures_ce_mois: ce_mois.len(),
                    montant_ce_mois: ce_mois.iter().map(|f| f.montant_ttc).sum() }
}

/// Agrupa por categoría, preservando el orden de primera aparición y el orden
/// de entrada dentro de cada grupo.
pub fn factures_par_categorie(factures: &[Facture]) -> IndexMap<CategorieFacture, Vec<&Facture>> {
    let mut grouped: IndexMap<CategorieFacture, Vec<&Facture>> = IndexMap::new();
    for facture in factures {
        grouped.entry(facture.categorie).or_default().push(facture);
    }
    grouped
}
