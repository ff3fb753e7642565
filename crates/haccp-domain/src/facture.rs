//! Factures fournisseurs: montants HT/TTC, TVA y categoría de gasto.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordId};
use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategorieFacture {
    MatieresPremieres,
    Emballages,
    Equipements,
    ProduitsNettoyage,
    Services,
    Autres,
}

/// Monto TTC a partir del HT y el porcentaje de TVA.
///
/// El registro almacena el TTC calculado en el momento del alta; el motor de
/// vistas derivadas nunca lo re-deriva.
pub fn montant_ttc(montant_ht: f64, tva: f64) -> f64 {
    montant_ht * (1.0 + tva / 100.0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facture {
    id: RecordId,
    pub date_creation: DateTime<Utc>,
    pub date: NaiveDate,
    pub numero: String,
    pub fournisseur: String,
    pub categorie: CategorieFacture,
    pub montant_ht: f64,
    pub montant_ttc: f64,
    /// Porcentaje de TVA aplicado (p. ej. 20.0).
    pub tva: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Borrador de facture (sin `id` ni `dateCreation`).
#[derive(Debug, Clone)]
pub struct FactureDraft {
    pub date: NaiveDate,
    pub numero: String,
    pub fournisseur: String,
    pub categorie: CategorieFacture,
    pub montant_ht: f64,
    pub montant_ttc: f64,
    pub tva: f64,
    pub image_data: Option<String>,
    pub notes: Option<String>,
}

impl FactureDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.numero.trim().is_empty() {
            return Err(DomainError::ValidationError("numero is required".to_string()));
        }
        if self.fournisseur.trim().is_empty() {
            return Err(DomainError::ValidationError("fournisseur is required".to_string()));
        }
        if self.tva < 0.0 {
            return Err(DomainError::ValidationError("tva must not be negative".to_string()));
        }
        Ok(())
    }
}

impl Record for Facture {
    type Draft = FactureDraft;
    const STORAGE_KEY: &'static str = "haccp_factures";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn assemble(draft: FactureDraft, id: RecordId, creado: DateTime<Utc>) -> Self {
        Self { id,
               date_creation: creado,
               date: draft.date,
               numero: draft.numero,
               fournisseur: draft.fournisseur,
               categorie: draft.categorie,
               montant_ht: draft.montant_ht,
               montant_ttc: draft.montant_ttc,
               tva: draft.tva,
               image_data: draft.image_data,
               notes: draft.notes }
    }
}
