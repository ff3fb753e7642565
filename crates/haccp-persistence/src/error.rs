//! Errores de persistencia.
//! Mapea errores de E/S a variantes semánticas y de ahí al `StoreError` del
//! core, para que los almacenes queden agnósticos del backend.

use std::io;
use std::path::Path;

use haccp_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("write {path}: {source}")]
    Write { path: String, source: io::Error },
    #[error("create dir {path}: {source}")]
    CreateDir { path: String, source: io::Error },
}

impl PersistenceError {
    pub fn read(path: &Path, source: io::Error) -> Self {
        Self::Read { path: path.display().to_string(), source }
    }
    pub fn write(path: &Path, source: io::Error) -> Self {
        Self::Write { path: path.display().to_string(), source }
    }
    pub fn create_dir(path: &Path, source: io::Error) -> Self {
        Self::CreateDir { path: path.display().to_string(), source }
    }
}

impl From<PersistenceError> for StoreError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::Read { .. } => StoreError::Read(err.to_string()),
            _ => StoreError::Write(err.to_string()),
        }
    }
}
