//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ContactCommand, ContactQuery, StorageProbe};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub contacts: Arc<dyn ContactCommand>,
    pub contacts_query: Arc<dyn ContactQuery>,
    pub storage: Arc<dyn StorageProbe>,
}

impl HttpState {
    /// Construct state from the three port implementations.
    pub fn new(
        contacts: Arc<dyn ContactCommand>,
        contacts_query: Arc<dyn ContactQuery>,
        storage: Arc<dyn StorageProbe>,
    ) -> Self {
        Self {
            contacts,
            contacts_query,
            storage,
        }
    }
}
