//! Puerto de almacenamiento clave-valor y doble en memoria.
//!
//! Una entrada direccionable por colección, contenido JSON. El puerto se
//! inyecta en cada `RecordStore` en lugar de leer un singleton global, lo que
//! permite un doble en memoria para pruebas y un backend durable en ficheros
//! (`haccp-persistence`) con el mismo contrato.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::StoreError;

/// Almacenamiento durable clave-valor.
///
/// Contrato:
/// - `read` devuelve `None` si la clave no existe.
/// - `write` es un único intento; un fallo (cuota, permisos) queda visible al
///   llamador sin reintentos.
/// - Sin transacciones entre claves: cada colección es consistente por sí
///   sola, no de forma conjunta.
pub trait StoragePort {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, payload: &str) -> Result<(), StoreError>;

    /// Carga una colección JSON. Contenido no parseable degrada a colección
    /// vacía (se registra, no se propaga).
    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        let Some(raw) = self.read(key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!("stored collection '{key}' is not parseable ({e}); treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Serializa y persiste la colección completa bajo su clave.
    fn save_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let payload = serde_json::to_string(items).map_err(|e| StoreError::Encode(e.to_string()))?;
        self.write(key, &payload)
    }
}

// Delegación para compartir un mismo backend entre varios almacenes.
impl<S: StoragePort + ?Sized> StoragePort for Arc<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }
    fn write(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        (**self).write(key, payload)
    }
}

/// Almacenamiento en memoria: doble de pruebas con paridad 1:1 respecto al
/// backend durable.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inyecta contenido crudo bajo una clave (útil para simular datos
    /// heredados o corruptos).
    pub fn put_raw(&self, key: &str, payload: &str) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.insert(key.to_string(), payload.to_string());
        }
    }
}

impl StoragePort for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let inner = self.inner.lock().map_err(|_| StoreError::Read("memory storage poisoned".to_string()))?;
        Ok(inner.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().map_err(|_| StoreError::Write("memory storage poisoned".to_string()))?;
        inner.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
