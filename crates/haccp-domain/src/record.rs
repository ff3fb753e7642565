//! Contrato común de los registros persistibles.
//!
//! Cada entidad del registre sanitario implementa `Record`: una clave estable
//! de colección, un accesor de id y el ensamblado a partir de un borrador
//! (todos los campos salvo `id` / `dateCreation`, que asigna el almacén).

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identificador opaco de un registro.
///
/// Se genera como uuid v4 serializado (los tokens derivados de la hora del día
/// colisionan bajo llamadas sucesivas rápidas); los datos ya almacenados con
/// ids numéricos en string siguen deserializando sin cambios.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for RecordId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Registro plano persistible en una colección clave-valor.
///
/// Ciclo de vida: se crea vía append (id fresco, antepuesto a la colección),
/// nunca se actualiza, se destruye por borrado por id.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Borrador: el registro sin `id` ni `dateCreation`.
    type Draft;

    /// Clave estable de la colección en el almacenamiento.
    const STORAGE_KEY: &'static str;

    fn id(&self) -> &RecordId;

    /// Ensambla el registro final. `creado` se ignora cuando el esquema de la
    /// entidad no define `dateCreation`.
    fn assemble(draft: Self::Draft, id: RecordId, creado: DateTime<Utc>) -> Self;
}
