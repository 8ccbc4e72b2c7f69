use std::collections::BTreeMap;
use std::sync::{
    atomic::{AtomicI32, Ordering},
    RwLock,
};

use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use super::{StoredUnit, UnitStore};
use crate::{error::StoreError, models::unit_id::UnitId};

/// Process-local unit store for tests and demos.
#[derive(Debug)]
pub struct InMemoryUnitStore {
    name: String,
    next_id: AtomicI32,
    units: RwLock<BTreeMap<UnitId, Value>>,
}

impl InMemoryUnitStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            next_id: AtomicI32::new(1),
            units: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemoryUnitStore {
    fn default() -> Self {
        Self::new("units")
    }
}

#[async_trait]
impl UnitStore for InMemoryUnitStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert(&self, document: Value) -> Result<UnitId, StoreError> {
        let id = self
            .next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| next.checked_add(1))
            .map(UnitId::new)
            .map_err(|_| StoreError::IdsExhausted)?;
        let mut units = self.units.write().map_err(|_| StoreError::Poisoned)?;
        units.insert(id, document);
        debug!("Inserted unit {} into {}", id, self.name);
        Ok(id)
    }

    async fn update(&self, id: UnitId, document: Value) -> Result<bool, StoreError> {
        let mut units = self.units.write().map_err(|_| StoreError::Poisoned)?;
        match units.get_mut(&id) {
            Some(existing) => {
                *existing = document;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find(&self) -> Result<Vec<StoredUnit>, StoreError> {
        let units = self.units.read().map_err(|_| StoreError::Poisoned)?;
        Ok(units
            .iter()
            .map(|(id, document)| StoredUnit {
                id: *id,
                document: document.clone(),
            })
            .collect())
    }

    async fn find_one(&self, id: UnitId) -> Result<Option<Value>, StoreError> {
        let units = self.units.read().map_err(|_| StoreError::Poisoned)?;
        Ok(units.get(&id).cloned())
    }

    async fn remove(&self, id: UnitId) -> Result<bool, StoreError> {
        let mut units = self.units.write().map_err(|_| StoreError::Poisoned)?;
        Ok(units.remove(&id).is_some())
    }

    async fn remove_all(&self) -> Result<usize, StoreError> {
        let mut units = self.units.write().map_err(|_| StoreError::Poisoned)?;
        let removed = units.len();
        units.clear();
        Ok(removed)
    }
}
