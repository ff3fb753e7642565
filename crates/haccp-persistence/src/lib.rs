//! haccp-persistence
//!
//! Backend durable del puerto de almacenamiento del core: una entrada JSON
//! por colección sobre un directorio de datos. Paridad 1:1 con el doble en
//! memoria (`haccp_core::MemoryStorage`): mismas claves, mismo contenido.
//!
//! Módulos:
//! - `fs`: implementación sobre ficheros (`<data_dir>/<clave>.json`).
//! - `config`: resolución del directorio de datos desde `.env`.
//! - `error`: taxonomía de errores de E/S y su mapeo al core.

pub mod config;
pub mod error;
pub mod fs;

pub use config::{init_dotenv, StorageConfig};
pub use error::PersistenceError;
pub use fs::FileStorage;
