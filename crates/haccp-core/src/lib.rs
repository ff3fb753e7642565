//! haccp-core: almacenes de registros y vistas derivadas puras.
//!
//! Dos piezas sin dependencia mutua:
//! - `store` / `storage`: append-con-id-fresco y borrado-por-id sobre un
//!   puerto de almacenamiento clave-valor inyectado.
//! - `views`: proyecciones puras (stats de facturas, rappels de contrats,
//!   tableau de bord) sobre un snapshot de registros más la fecha actual.
pub mod clock;
pub mod errors;
pub mod storage;
pub mod store;
pub mod views;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::StoreError;
pub use storage::{MemoryStorage, StoragePort};
pub use store::RecordStore;
pub use views::contrats::{contrats_expires, jours_restants, rappels, stats_contrats, RappelContrat, StatsContrats};
pub use views::factures::{factures_par_categorie, stats_factures, StatsFactures};
pub use views::tableau::{dlc_depassee, dlc_proche, stats_tableau, StatsTableau};
