pub mod memory;
pub mod postgres;
pub mod schema;

use async_trait::async_trait;
use diesel::{Connection, ConnectionError, PgConnection};
use serde_json::Value;

use crate::{error::StoreError, models::unit_id::UnitId};

/// A document as read back from the store, together with its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredUnit {
    pub id: UnitId,
    pub document: Value,
}

/// Document store holding the "units" collection. Stores know nothing about
/// the unit shape; validation happens when documents are turned back into
/// apartments.
#[async_trait]
pub trait UnitStore: Send + Sync {
    fn name(&self) -> &str;

    async fn insert(&self, document: Value) -> Result<UnitId, StoreError>;

    /// Returns false when no document has the given id.
    async fn update(&self, id: UnitId, document: Value) -> Result<bool, StoreError>;

    async fn find(&self) -> Result<Vec<StoredUnit>, StoreError>;

    async fn find_one(&self, id: UnitId) -> Result<Option<Value>, StoreError>;

    async fn remove(&self, id: UnitId) -> Result<bool, StoreError>;

    async fn remove_all(&self) -> Result<usize, StoreError>;
}

pub fn establish_connection(database_url: &str) -> Result<PgConnection, ConnectionError> {
    PgConnection::establish(database_url)
}
