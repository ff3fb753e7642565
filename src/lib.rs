//! HACCP Rust Library
//!
//! Registre sanitaire para una delivery kitchen:
//! - `haccp-domain`: los registros planos (contrôles, produits, factures, ...).
//! - `haccp-core`: almacenes append/delete sobre un puerto clave-valor y
//!   vistas derivadas puras (stats de facturas, rappels de contrats).
//! - `haccp-persistence`: backend durable en ficheros JSON.
//!
//! Este crate expone el conjunto y el `Classeur`, que agrupa los siete
//! almacenes sobre un mismo backend compartido.

pub mod classeur;

pub use classeur::Classeur;
pub use haccp_core::{Clock, FixedClock, MemoryStorage, RecordStore, StoragePort, StoreError, SystemClock};
pub use haccp_core::{contrats_expires, jours_restants, rappels, stats_contrats, RappelContrat, StatsContrats};
pub use haccp_core::{factures_par_categorie, stats_factures, StatsFactures};
pub use haccp_core::{dlc_depassee, dlc_proche, stats_tableau, StatsTableau};
pub use haccp_domain::{montant_ttc, CategorieFacture, Controle, ControleDraft, ContratIntervenant,
                       ContratIntervenantDraft, DomainError, Facture, FactureDraft, Formation, FormationDraft,
                       MenuItem, MenuItemDraft, Nettoyage, NettoyageDraft, Produit, ProduitDraft, Record,
                       RecordId, StatutControle, TypeControle, TypeIntervenant};
pub use haccp_persistence::{FileStorage, PersistenceError, StorageConfig};
