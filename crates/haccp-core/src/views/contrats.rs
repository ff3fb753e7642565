//! Rappels de contrats: jours restants, urgence, expirés.
//!
//! Recomputación sin estado en cada lectura: un contrato pasa a urgente por
//! el mero paso de los días. Todas las comparaciones son a medianoche
//! (granularidad de día).

use chrono::NaiveDate;
use haccp_domain::ContratIntervenant;
use serde::Serialize;

/// Horizonte de visibilidad de los rappels, en días. Solo el futuro lejano
/// (> 60 días) queda fuera; los contratos ya expirados siempre aparecen.
pub const HORIZON_RAPPEL_JOURS: i64 = 60;

/// Umbral de urgencia, en días.
pub const SEUIL_URGENT_JOURS: i64 = 30;

/// Días hasta `date_fin`, con signo (negativo = ya expirado).
pub fn jours_restants(date_fin: NaiveDate, aujourdhui: NaiveDate) -> i64 {
    (date_fin - aujourdhui).num_days()
}

/// Un contrato proyectado sobre la fecha actual.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RappelContrat<'a> {
    pub contrat: &'a ContratIntervenant,
    pub jours_restants: i64,
    pub est_urgent: bool,
}

/// Lista de rappels: contratos con `jours_restants <= 60`, del más vencido al
/// menos urgente (orden estable: los empates conservan el orden de entrada).
pub fn rappels<'a>(contrats: &'a [ContratIntervenant], aujourdhui: NaiveDate) -> Vec<RappelContrat<'a>> {
    let mut rappels: Vec<RappelContrat<'a>> =
        contrats.iter()
                .map(|contrat| {
                    let jours = jours_restants(contrat.date_fin, aujourdhui);
                    RappelContrat { contrat,
                                    jours_restants: jours,
                                    est_urgent: (0..=SEUIL_URGENT_JOURS).contains(&jours) }
                })
                .filter(|r| r.jours_restants <= HORIZON_RAPPEL_JOURS)
                .collect();
    rappels.sort_by_key(|r| r.jours_restants);
    rappels
}

/// Contratos con `date_fin` estrictamente anterior a hoy (sin tope de 60 días).
pub fn contrats_expires<'a>(contrats: &'a [ContratIntervenant],
                            aujourdhui: NaiveDate)
                            -> Vec<&'a ContratIntervenant> {
    contrats.iter().filter(|c| c.date_fin < aujourdhui).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsContrats {
    pub total_contrats: usize,
    pub expires: usize,
    pub expire_bientot: usize,
    pub actifs: usize,
}

pub fn stats_contrats(contrats: &[ContratIntervenant], aujourdhui: NaiveDate) -> StatsContrats {
    let expires = contrats.iter().filter(|c| c.date_fin < aujourdhui).count();
    let expire_bientot = contrats.iter()
                                 .filter(|c| {
                                     let jours = jours_restants(c.date_fin, aujourdhui);
                                     (0..=SEUIL_URGENT_JOURS).contains(&jours)
                                 })
                                 .count();
    StatsContrats { total_contrats: contrats.len(),
                    expires,
                    expire_bientot,
                    actifs: contrats.len() - expires }
}
