//! Errores del núcleo de almacenamiento (simples por diseño).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage read failed: {0}")] Read(String),
    #[error("storage write failed: {0}")] Write(String),
    #[error("collection encode failed: {0}")] Encode(String),
}
