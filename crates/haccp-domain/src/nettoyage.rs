//! Tâches de nettoyage por zona, con contrôle visuel.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordId};
use crate::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nettoyage {
    id: RecordId,
    pub date: NaiveDate,
    pub zone: String,
    pub produit_utilise: String,
    pub realise: bool,
    pub controle_visuel: bool,
}

/// Borrador de nettoyage (sin `id`).
#[derive(Debug, Clone)]
pub struct NettoyageDraft {
    pub date: NaiveDate,
    pub zone: String,
    pub produit_utilise: String,
    pub realise: bool,
    pub controle_visuel: bool,
}

impl NettoyageDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.zone.trim().is_empty() {
            return Err(DomainError::ValidationError("zone is required".to_string()));
        }
        Ok(())
    }
}

impl Record for Nettoyage {
    type Draft = NettoyageDraft;
    const STORAGE_KEY: &'static str = "haccp_nettoyage";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn assemble(draft: NettoyageDraft, id: RecordId, _creado: DateTime<Utc>) -> Self {
        Self { id,
               date: draft.date,
               zone: draft.zone,
               produit_utilise: draft.produit_utilise,
               realise: draft.realise,
               controle_visuel: draft.controle_visuel }
    }
}
