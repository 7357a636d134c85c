//! Async-safe connection pool for Diesel PostgreSQL connections.
//!
//! This module wraps `diesel-async` and `bb8`. The pool is bounded (ten
//! connections by default) and callers queue for a free slot until the
//! checkout timeout fires.
//!
//! The pool is built lazily: constructing it never opens a connection, so the
//! server can start while the database is unreachable and fail individual
//! requests instead. The most recent connect failure is kept so a timed-out
//! checkout reports the driver's reason rather than a bare timeout.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use bb8::ErrorSink;
use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection, RunError};
use diesel_async::pooled_connection::{
    AsyncDieselConnectionManager, PoolError as ManagerError,
};

/// Default number of pooled connections.
pub const DEFAULT_MAX_SIZE: u32 = 10;

/// Default time a caller waits for a connection.
pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

const CHECKOUT_TIMED_OUT: &str = "timed out waiting for a database connection";

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },
}

impl PoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Driver-level reason without the pool prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Checkout { message } => message,
        }
    }
}

/// Configuration for the database connection pool.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use contact_backend::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://root@localhost/autoreportai")
///     .with_max_size(20)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.max_size(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Create a new configuration with the given database URL.
    ///
    /// Defaults: `max_size` of [`DEFAULT_MAX_SIZE`], a
    /// [`DEFAULT_CONNECTION_TIMEOUT`] checkout timeout, and no idle
    /// connections kept warm.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: DEFAULT_MAX_SIZE,
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
        }
    }

    /// Set the maximum number of connections in the pool.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the connection checkout timeout.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Get the database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Get the pool capacity.
    pub fn max_size(&self) -> u32 {
        self.max_size
    }
}

/// Remembers the latest connect failure reported by the pool.
#[derive(Debug, Clone, Default)]
struct LastConnectError {
    message: Arc<Mutex<Option<String>>>,
}

impl LastConnectError {
    fn take(&self) -> Option<String> {
        self.message
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl ErrorSink<ManagerError> for LastConnectError {
    fn sink(&self, error: ManagerError) {
        *self
            .message
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(error.to_string());
    }

    fn boxed_clone(&self) -> Box<dyn ErrorSink<ManagerError>> {
        Box::new(self.clone())
    }
}

/// Async connection pool for PostgreSQL via Diesel.
///
/// Clones share the same underlying pool. A checked-out connection returns
/// to the pool when its guard drops, including on early error returns.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
    last_error: LastConnectError,
    connection_timeout: Duration,
}

impl DbPool {
    /// Create a connection pool without opening any connection yet.
    pub fn new(config: PoolConfig) -> Self {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url);
        let last_error = LastConnectError::default();

        let inner = Pool::builder()
            .max_size(config.max_size)
            .min_idle(None)
            .retry_connection(false)
            .connection_timeout(config.connection_timeout)
            .error_sink(Box::new(last_error.clone()))
            .build_unchecked(manager);

        Self {
            inner,
            last_error,
            connection_timeout: config.connection_timeout,
        }
    }

    /// Get a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` if a connection cannot be obtained within
    /// the configured timeout. The message is the last connect failure when
    /// one was seen.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner.get().await.map_err(|err| match err {
            RunError::User(error) => PoolError::checkout(error.to_string()),
            RunError::TimedOut => PoolError::checkout(
                self.last_error
                    .take()
                    .unwrap_or_else(|| CHECKOUT_TIMED_OUT.to_owned()),
            ),
        })
    }

    /// Open one connection outside the pool and close it again.
    ///
    /// Fails as soon as the driver does, or after the checkout timeout when
    /// the server never answers. Pooled connections are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` carrying the driver's reason.
    pub async fn probe(&self) -> Result<(), PoolError> {
        match tokio::time::timeout(self.connection_timeout, self.inner.dedicated_connection()).await
        {
            Ok(Ok(conn)) => {
                drop(conn);
                Ok(())
            }
            Ok(Err(error)) => Err(PoolError::checkout(error.to_string())),
            Err(_) => Err(PoolError::checkout(CHECKOUT_TIMED_OUT)),
        }
    }
}
