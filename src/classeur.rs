//! El classeur: los siete almacenes sobre un backend compartido.
//!
//! Cada almacén es dueño exclusivo de su lista; el backend se comparte vía
//! `Arc`, sin transacciones entre colecciones (un corte entre dos escrituras
//! deja cada colección consistente por sí sola, no de forma conjunta).

use std::sync::Arc;

use haccp_core::{Clock, RecordStore, StoragePort, StoreError, SystemClock};
use haccp_domain::{Controle, ContratIntervenant, Facture, Formation, MenuItem, Nettoyage, Produit};

pub struct Classeur<S: StoragePort, C: Clock + Clone = SystemClock> {
    pub controles: RecordStore<Controle, Arc<S>, C>,
    pub produits: RecordStore<Produit, Arc<S>, C>,
    pub nettoyages: RecordStore<Nettoyage, Arc<S>, C>,
    pub formations: RecordStore<Formation, Arc<S>, C>,
    pub menu: RecordStore<MenuItem, Arc<S>, C>,
    pub factures: RecordStore<Facture, Arc<S>, C>,
    pub contrats: RecordStore<ContratIntervenant, Arc<S>, C>,
}

impl<S: StoragePort> Classeur<S> {
    /// Abre las siete colecciones con el reloj de pared.
    pub fn open(storage: S) -> Result<Self, StoreError> {
        Self::open_with_clock(storage, SystemClock)
    }
}

impl<S: StoragePort, C: Clock + Clone> Classeur<S, C> {
    /// Abre las siete colecciones; la carta se siembra con el menú por
    /// defecto si su clave aún no existe.
    pub fn open_with_clock(storage: S, clock: C) -> Result<Self, StoreError> {
        let storage = Arc::new(storage);
        Ok(Self { controles: RecordStore::open_with_clock(storage.clone(), clock.clone())?,
                  produits: RecordStore::open_with_clock(storage.clone(), clock.clone())?,
                  nettoyages: RecordStore::open_with_clock(storage.clone(), clock.clone())?,
                  formations: RecordStore::open_with_clock(storage.clone(), clock.clone())?,
                  menu: RecordStore::open_with_seed(storage.clone(), clock.clone(), MenuItem::menu_par_defaut)?,
                  factures: RecordStore::open_with_clock(storage.clone(), clock.clone())?,
                  contrats: RecordStore::open_with_clock(storage, clock)? })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haccp_core::MemoryStorage;

    #[test]
    fn opens_all_collections_over_one_backend() {
        let classeur = Classeur::open(MemoryStorage::new()).unwrap();
        assert!(classeur.controles.is_empty());
        assert!(classeur.factures.is_empty());
        assert_eq!(classeur.menu.len(), 4, "default menu must be seeded");
    }
}
