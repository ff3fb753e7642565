//! Implementación del puerto de almacenamiento sobre ficheros JSON.
//!
//! Diseño:
//! - Una entrada direccionable por colección: `<data_dir>/<clave>.json`.
//! - Escritura de un solo intento: un fallo (cuota, permisos) queda visible
//!   al llamador, sin reintentos.
//! - Sin coordinación entre procesos: dos escritores concurrentes sobre la
//!   misma clave terminan en last-write-wins (limitación conocida, no
//!   resuelta).

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::debug;

use haccp_core::{StoragePort, StoreError};

use crate::config::StorageConfig;
use crate::error::PersistenceError;

/// Almacenamiento clave-valor durable en un directorio de datos.
#[derive(Debug, Clone)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.data_dir.clone())
    }

    pub fn from_env() -> Self {
        Self::from_config(&StorageConfig::from_env())
    }

    pub fn data_dir(&self) -> &std::path::Path {
        &self.data_dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl StoragePort for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.entry_path(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::read(&path, e).into()),
        }
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir).map_err(|e| PersistenceError::create_dir(&self.data_dir, e))?;
        let path = self.entry_path(key);
        debug!("writing {} bytes to {}", payload.len(), path.display());
        fs::write(&path, payload).map_err(|e| PersistenceError::write(&path, e))?;
        Ok(())
    }
}
