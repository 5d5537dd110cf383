//! Storage subsystem capability

use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only view of the platform key-value stores
///
/// The probe contract forbids writes, so this trait exposes availability and
/// posture only, never mutation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageCapability: Send + Sync {
    /// Whether the local (durable) store is reachable.
    async fn local_available(&self) -> Result<bool>;

    /// Whether the session store is reachable.
    async fn session_available(&self) -> Result<bool>;

    /// Whether the stores are isolated from foreign origins.
    async fn is_isolated(&self) -> Result<bool>;
}
