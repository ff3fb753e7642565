//! Carta de la delivery kitchen con sus allergènes déclarés.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordId};
use crate::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    id: RecordId,
    pub nom: String,
    pub allergenes: Vec<String>,
    /// Ingredientes en orden de receta.
    pub ingredients: Vec<String>,
}

/// Borrador de plato (sin `id`).
#[derive(Debug, Clone)]
pub struct MenuItemDraft {
    pub nom: String,
    pub allergenes: Vec<String>,
    pub ingredients: Vec<String>,
}

impl MenuItemDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.nom.trim().is_empty() {
            return Err(DomainError::ValidationError("nom is required".to_string()));
        }
        Ok(())
    }
}

impl MenuItem {
    /// Carta por defecto, sembrada cuando la colección aún no existe.
    pub fn menu_par_defaut() -> Vec<MenuItem> {
        let plat = |id: &str, nom: &str, allergenes: &[&str], ingredients: &[&str]| MenuItem {
            id: RecordId::from(id),
            nom: nom.to_string(),
            allergenes: allergenes.iter().map(|a| a.to_string()).collect(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        };
        vec![
            plat("1",
                 "Burger Classique",
                 &["gluten", "lait", "moutarde"],
                 &["pain", "steak", "fromage", "salade", "tomate", "sauce"]),
            plat("2",
                 "Burger Poulet",
                 &["gluten", "lait"],
                 &["pain", "poulet", "fromage", "salade", "sauce"]),
            plat("3", "Frites", &[], &["pommes de terre", "huile"]),
            plat("4",
                 "Salade César",
                 &["lait", "oeuf", "poisson"],
                 &["salade", "poulet", "parmesan", "croutons", "sauce césar"]),
        ]
    }
}

impl Record for MenuItem {
    type Draft = MenuItemDraft;
    const STORAGE_KEY: &'static str = "haccp_menu";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn assemble(draft: MenuItemDraft, id: RecordId, _creado: DateTime<Utc>) -> Self {
        Self { id,
               nom: draft.nom,
               allergenes: draft.allergenes,
               ingredients: draft.ingredients }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_menu_has_four_items_with_fixed_ids() {
        let menu = MenuItem::menu_par_defaut();
        assert_eq!(menu.len(), 4);
        let ids: Vec<&str> = menu.iter().map(|m| m.id().as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert!(menu[2].allergenes.is_empty(), "les frites n'ont pas d'allergènes");
    }
}
