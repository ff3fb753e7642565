//! Almacén genérico de registros, instanciado por entidad.
//!
//! Operaciones: `add` (id fresco + antepuesto + persistencia síncrona) y
//! `delete` por id (no-op si ausente). Sin update ni queries: las lecturas
//! derivadas viven en `views`. Cada almacén es dueño exclusivo de su lista.

use haccp_domain::{Record, RecordId};

use crate::clock::{Clock, SystemClock};
use crate::errors::StoreError;
use crate::storage::StoragePort;

pub struct RecordStore<T: Record, S: StoragePort, C: Clock = SystemClock> {
    storage: S,
    clock: C,
    items: Vec<T>,
}

impl<T: Record, S: StoragePort> RecordStore<T, S> {
    /// Abre la colección con el reloj de pared.
    pub fn open(storage: S) -> Result<Self, StoreError> {
        Self::open_with_clock(storage, SystemClock)
    }
}

impl<T: Record, S: StoragePort, C: Clock> RecordStore<T, S, C> {
    /// Abre la colección `T::STORAGE_KEY`; contenido corrupto degrada a vacío.
    pub fn open_with_clock(storage: S, clock: C) -> Result<Self, StoreError> {
        let items = storage.load_collection(T::STORAGE_KEY)?;
        Ok(Self { storage, clock, items })
    }

    /// Como `open_with_clock`, sembrando (y persistiendo) una colección por
    /// defecto cuando la clave aún no existe. Una clave presente pero
    /// corrupta degrada a vacío sin re-sembrar.
    pub fn open_with_seed(storage: S, clock: C, seed: impl FnOnce() -> Vec<T>) -> Result<Self, StoreError> {
        if storage.read(T::STORAGE_KEY)?.is_some() {
            return Self::open_with_clock(storage, clock);
        }
        let store = Self { storage, clock, items: seed() };
        store.persist()?;
        Ok(store)
    }

    /// Snapshot de la colección, del más reciente al más antiguo.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Asigna un id fresco (y `dateCreation` cuando el esquema lo define),
    /// antepone el registro y persiste en la misma llamada. Si la escritura
    /// falla, la inserción en memoria se revierte y el error se devuelve.
    pub fn add(&mut self, draft: T::Draft) -> Result<&T, StoreError> {
        let record = T::assemble(draft, RecordId::generate(), self.clock.now());
        self.items.insert(0, record);
        if let Err(e) = self.persist() {
            self.items.remove(0);
            return Err(e);
        }
        Ok(&self.items[0])
    }

    /// Borra el registro con ese id y persiste. Id ausente: no-op sin
    /// reescritura, `Ok(false)`.
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(pos) = self.items.iter().position(|r| r.id().as_str() == id) else {
            return Ok(false);
        };
        let removed = self.items.remove(pos);
        if let Err(e) = self.persist() {
            self.items.insert(pos, removed);
            return Err(e);
        }
        Ok(true)
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.storage.save_collection(T::STORAGE_KEY, &self.items)
    }
}
