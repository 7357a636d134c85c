//! Port for checking storage reachability.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Reachability failures reported by storage probes.
    pub enum StorageProbeError {
        /// No connection could be acquired; `message` is the driver's reason.
        Unreachable { message: String } => "{message}",
    }
}

/// Acquire and immediately release one storage connection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageProbe: Send + Sync {
    /// Succeed when a connection could be checked out and returned.
    async fn ping(&self) -> Result<(), StorageProbeError>;
}
