// haccp-domain library entry point
pub mod record;
pub mod controle;
pub mod produit;
pub mod nettoyage;
pub mod formation;
pub mod menu;
pub mod facture;
pub mod contrat;
pub mod error;
pub use record::{Record, RecordId};
pub use controle::{Controle, ControleDraft, StatutControle, TypeControle};
pub use produit::{Produit, ProduitDraft};
pub use nettoyage::{Nettoyage, NettoyageDraft};
pub use formation::{Formation, FormationDraft};
pub use menu::{MenuItem, MenuItemDraft};
pub use facture::{montant_ttc, CategorieFacture, Facture, FactureDraft};
pub use contrat::{ContratIntervenant, ContratIntervenantDraft, TypeIntervenant};
pub use error::DomainError;
