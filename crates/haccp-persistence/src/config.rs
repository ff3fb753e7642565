//! Resolución del directorio de datos desde variables de entorno.
//! Usa convención `HACCP_DATA_DIR`, con valor por defecto local.

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const DATA_DIR_VAR: &str = "HACCP_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "./haccp-data";

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let data_dir = env::var(DATA_DIR_VAR).map(PathBuf::from)
                                             .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));
        Self { data_dir }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
