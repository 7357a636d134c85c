//! Pool-backed `StorageProbe` implementation.

use async_trait::async_trait;

use crate::domain::ports::{StorageProbe, StorageProbeError};

use super::pool::DbPool;

/// Reports storage as reachable when a fresh connection can be opened.
#[derive(Clone)]
pub struct DieselStorageProbe {
    pool: DbPool,
}

impl DieselStorageProbe {
    /// Create a probe over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StorageProbe for DieselStorageProbe {
    async fn ping(&self) -> Result<(), StorageProbeError> {
        self.pool
            .probe()
            .await
            .map_err(|err| StorageProbeError::unreachable(err.message()))
    }
}
