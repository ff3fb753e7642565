//! Formations du personnel (sujet, personne formée, durée en heures).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordId};
use crate::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formation {
    id: RecordId,
    pub date: NaiveDate,
    pub sujet: String,
    pub personne_formee: String,
    /// Durée en heures, estrictamente positiva.
    pub duree: f64,
}

/// Borrador de formation (sin `id`).
#[derive(Debug, Clone)]
pub struct FormationDraft {
    pub date: NaiveDate,
    pub sujet: String,
    pub personne_formee: String,
    pub duree: f64,
}

impl FormationDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.sujet.trim().is_empty() {
            return Err(DomainError::ValidationError("sujet is required".to_string()));
        }
        if self.personne_formee.trim().is_empty() {
            return Err(DomainError::ValidationError("personneFormee is required".to_string()));
        }
        if !(self.duree > 0.0) {
            return Err(DomainError::ValidationError("duree must be > 0 hours".to_string()));
        }
        Ok(())
    }
}

impl Record for Formation {
    type Draft = FormationDraft;
    const STORAGE_KEY: &'static str = "haccp_formations";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn assemble(draft: FormationDraft, id: RecordId, _creado: DateTime<Utc>) -> Self {
        Self { id,
               date: draft.date,
               sujet: draft.sujet,
               personne_formee: draft.personne_formee,
               duree: draft.duree }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duree_must_be_positive() {
        let d = FormationDraft { date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                                 sujet: "Hygiène".to_string(),
                                 personne_formee: "A. Martin".to_string(),
                                 duree: 0.0 };
        assert!(d.validate().is_err(), "zero-hour formation must be rejected");
    }
}
