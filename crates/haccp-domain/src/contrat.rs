//! Contrats d'intervenants externes (dératisation, maintenance froid, ...).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordId};
use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeIntervenant {
    Deratisation,
    NettoyageExterieur,
    MaintenanceFrigo,
    MaintenanceCuisine,
    Extincteur,
    Assainissement,
    Electricien,
    Plombier,
    Autre,
}

/// Contrato con un prestatario de servicios.
///
/// `date_fin >= date_debut` se espera pero no se aplica: un contrato con
/// fechas invertidas simplemente aparecerá como expirado en las vistas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContratIntervenant {
    id: RecordId,
    pub nom: String,
    #[serde(rename = "type")]
    pub type_: TypeIntervenant,
    pub contact: String,
    pub telephone: String,
    pub email: String,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub frequence: String,
    /// Fichero del contrato en base64, capturado por la capa de presentación.
    pub contrat_data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub date_creation: DateTime<Utc>,
}

/// Borrador de contrato (sin `id` ni `dateCreation`).
#[derive(Debug, Clone)]
pub struct ContratIntervenantDraft {
    pub nom: String,
    pub type_: TypeIntervenant,
    pub contact: String,
    pub telephone: String,
    pub email: String,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub frequence: String,
    pub contrat_data: String,
    pub notes: Option<String>,
}

impl ContratIntervenantDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.nom.trim().is_empty() {
            return Err(DomainError::ValidationError("nom is required".to_string()));
        }
        Ok(())
    }
}

impl Record for ContratIntervenant {
    type Draft = ContratIntervenantDraft;
    const STORAGE_KEY: &'static str = "haccp_contrats";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn assemble(draft: ContratIntervenantDraft, id: RecordId, creado: DateTime<Utc>) -> Self {
        Self { id,
               nom: draft.nom,
               type_: draft.type_,
               contact: draft.contact,
               telephone: draft.telephone,
               email: draft.email,
               date_debut: draft.date_debut,
               date_fin: draft.date_fin,
               frequence: draft.frequence,
               contrat_data: draft.contrat_data,
               notes: draft.notes,
               date_creation: creado }
    }
}
