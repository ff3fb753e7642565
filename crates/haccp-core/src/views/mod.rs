//! Vistas derivadas: funciones puras sobre un snapshot de registros.
//!
//! Sin estado ni efectos: cada lectura recalcula desde la colección actual
//! más la fecha del día, así los resultados siguen al calendario aun sin
//! escrituras.

pub mod contrats;
pub mod factures;
pub mod tableau;
