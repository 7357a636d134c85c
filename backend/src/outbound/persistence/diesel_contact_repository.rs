//! PostgreSQL-backed `ContactRepository` implementation using Diesel ORM.
//!
//! Each operation checks out one pooled connection for a single statement.
//! The connection guard returns it to the pool on every exit path.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{ContactId, ContactRecord, NewContact};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ContactRow, NewContactRow};
use super::pool::{DbPool, PoolError};
use super::schema::contacts;

/// Diesel-backed implementation of the [`ContactRepository`] port.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
}

impl DieselContactRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ContactRepositoryError {
    map_basic_pool_error(error, ContactRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ContactRepositoryError {
    map_basic_diesel_error(
        error,
        ContactRepositoryError::query,
        ContactRepositoryError::connection,
    )
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn insert(&self, contact: &NewContact) -> Result<ContactId, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewContactRow::from(contact);

        let id: i64 = diesel::insert_into(contacts::table)
            .values(&row)
            .returning(contacts::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(ContactId::new(id))
    }

    async fn list_newest_first(&self) -> Result<Vec<ContactRecord>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ContactRow> = contacts::table
            .order((contacts::submitted_at.desc(), contacts::id.desc()))
            .select(ContactRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(ContactRecord::from).collect())
    }
}
