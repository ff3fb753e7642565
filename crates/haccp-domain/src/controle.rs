//! Contrôles HACCP: température, propreté, livraison, stockage, allergènes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordId};
use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeControle {
    Temperature,
    Proprete,
    Livraison,
    Stockage,
    Allergenes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatutControle {
    Conforme,
    NonConforme,
}

/// Un contrôle puntual con su resultado y la acción correctiva opcional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Controle {
    id: RecordId,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub type_: TypeControle,
    pub valeur: String,
    pub statut: StatutControle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentaire: Option<String>,
}

/// Borrador de contrôle (sin `id`).
#[derive(Debug, Clone)]
pub struct ControleDraft {
    pub date: NaiveDate,
    pub type_: TypeControle,
    pub valeur: String,
    pub statut: StatutControle,
    pub action: Option<String>,
    pub commentaire: Option<String>,
}

impl ControleDraft {
    /// Validación previa al append; el almacén acepta el borrador tal cual.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.valeur.trim().is_empty() {
            return Err(DomainError::ValidationError("valeur is required".to_string()));
        }
        Ok(())
    }
}

impl Record for Controle {
    type Draft = ControleDraft;
    const STORAGE_KEY: &'static str = "haccp_controles";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn assemble(draft: ControleDraft, id: RecordId, _creado: DateTime<Utc>) -> Self {
        Self { id,
               date: draft.date,
               type_: draft.type_,
               valeur: draft.valeur,
               statut: draft.statut,
               action: draft.action,
               commentaire: draft.commentaire }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn draft() -> ControleDraft {
        ControleDraft { date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                        type_: TypeControle::Temperature,
                        valeur: "4.2".to_string(),
                        statut: StatutControle::Conforme,
                        action: None,
                        commentaire: None }
    }

    #[test]
    fn serializes_with_the_stored_field_layout() {
        let c = Controle::assemble(draft(), RecordId::from("c1"), Utc::now());
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["id"], "c1");
        assert_eq!(v["date"], "2024-06-01");
        assert_eq!(v["type"], "temperature");
        assert_eq!(v["statut"], "conforme");
        assert!(v.get("action").is_none(), "absent optionals must not serialize");
    }

    #[test]
    fn non_conforme_uses_snake_case_value() {
        let s = serde_json::to_value(StatutControle::NonConforme).unwrap();
        assert_eq!(s, "non_conforme");
    }

    #[test]
    fn draft_requires_a_valeur() {
        let mut d = draft();
        d.valeur = "  ".to_string();
        assert!(d.validate().is_err());
    }
}
