//! Produits reçus: réception, DLC y allergènes declarados.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordId};
use crate::DomainError;

/// Un produit recibido, con su DLC (que puede estar en el pasado).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Produit {
    id: RecordId,
    pub nom: String,
    pub fournisseur: String,
    pub date_reception: NaiveDate,
    pub dlc: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_reception: Option<String>,
    pub conforme: bool,
    pub allergenes: Vec<String>,
}

/// Borrador de produit (sin `id`).
#[derive(Debug, Clone)]
pub struct ProduitDraft {
    pub nom: String,
    pub fournisseur: String,
    pub date_reception: NaiveDate,
    pub dlc: NaiveDate,
    pub temperature_reception: Option<String>,
    pub conforme: bool,
    pub allergenes: Vec<String>,
}

impl ProduitDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.nom.trim().is_empty() {
            return Err(DomainError::ValidationError("nom is required".to_string()));
        }
        if self.fournisseur.trim().is_empty() {
            return Err(DomainError::ValidationError("fournisseur is required".to_string()));
        }
        Ok(())
    }
}

impl Record for Produit {
    type Draft = ProduitDraft;
    const STORAGE_KEY: &'static str = "haccp_produits";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn assemble(draft: ProduitDraft, id: RecordId, _creado: DateTime<Utc>) -> Self {
        Self { id,
               nom: draft.nom,
               fournisseur: draft.fournisseur,
               date_reception: draft.date_reception,
               dlc: draft.dlc,
               temperature_reception: draft.temperature_reception,
               conforme: draft.conforme,
               allergenes: draft.allergenes }
    }
}
