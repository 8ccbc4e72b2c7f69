use std::sync::Arc;

use async_trait::async_trait;
use diesel::{dsl::now, prelude::*, PgConnection};
use log::{error, info};
use serde_json::Value;

use super::{establish_connection, schema::units, StoredUnit, UnitStore};
use crate::{config::Config, error::StoreError, models::unit_id::UnitId};

/// Unit store backed by a PostgreSQL `units` table, one `jsonb` document per
/// row. Every call opens its own connection on the blocking pool.
#[derive(Debug, Clone)]
pub struct PgUnitStore {
    database_url: String,
}

impl PgUnitStore {
    pub fn new(config: &Arc<Config>) -> Self {
        Self {
            database_url: config.db_path.clone(),
        }
    }

    async fn run<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> QueryResult<T> + Send + 'static,
    {
        let database_url = self.database_url.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = establish_connection(&database_url)?;
            op(&mut conn).map_err(StoreError::from)
        })
        .await?
        .map_err(|e| {
            error!("Error in units store: {:?}", e);
            e
        })
    }
}

#[async_trait]
impl UnitStore for PgUnitStore {
    fn name(&self) -> &str {
        "units"
    }

    async fn insert(&self, document: Value) -> Result<UnitId, StoreError> {
        let id = self
            .run(move |conn| {
                diesel::insert_into(units::table)
                    .values(units::document.eq(document))
                    .returning(units::id)
                    .get_result::<i32>(conn)
            })
            .await?;

        info!("Inserted unit {} into units table", id);
        Ok(UnitId::new(id))
    }

    async fn update(&self, id: UnitId, document: Value) -> Result<bool, StoreError> {
        let rows = self
            .run(move |conn| {
                diesel::update(units::table.filter(units::id.eq(id.get())))
                    .set((units::document.eq(document), units::updated_at.eq(now)))
                    .execute(conn)
            })
            .await?;

        Ok(rows > 0)
    }

    async fn find(&self) -> Result<Vec<StoredUnit>, StoreError> {
        let rows = self
            .run(|conn| {
                units::table
                    .select((units::id, units::document))
                    .order(units::id.asc())
                    .load::<(i32, Value)>(conn)
            })
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, document)| StoredUnit {
                id: UnitId::new(id),
                document,
            })
            .collect())
    }

    async fn find_one(&self, id: UnitId) -> Result<Option<Value>, StoreError> {
        self.run(move |conn| {
            units::table
                .filter(units::id.eq(id.get()))
                .select(units::document)
                .first::<Value>(conn)
                .optional()
        })
        .await
    }

    async fn remove(&self, id: UnitId) -> Result<bool, StoreError> {
        let rows = self
            .run(move |conn| {
                diesel::delete(units::table.filter(units::id.eq(id.get()))).execute(conn)
            })
            .await?;

        info!("Deleted {} row(s) in units with ID: {}", rows, id);
        Ok(rows > 0)
    }

    async fn remove_all(&self) -> Result<usize, StoreError> {
        let rows = self
            .run(|conn| diesel::delete(units::table).execute(conn))
            .await?;

        info!("Deleted all {} row(s) in units", rows);
        Ok(rows)
    }
}
