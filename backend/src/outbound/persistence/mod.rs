//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain storage ports backed by PostgreSQL
//! via `diesel-async` and `bb8` connection pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Typed errors**: driver failures are mapped to port error types.
//!
//! # Example
//!
//! ```no_run
//! use contact_backend::outbound::persistence::{DbPool, DieselContactRepository, PoolConfig};
//!
//! # async fn build() {
//! let pool = DbPool::new(PoolConfig::new("postgres://root@localhost/autoreportai"));
//! let repo = DieselContactRepository::new(pool);
//! # let _ = repo;
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_contact_repository;
mod diesel_storage_probe;
mod models;
mod pool;
mod schema;

pub use diesel_contact_repository::DieselContactRepository;
pub use diesel_storage_probe::DieselStorageProbe;
pub use pool::{DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};
