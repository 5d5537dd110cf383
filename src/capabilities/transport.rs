//! Network transport metadata capability

use crate::utils::error::Result;
use async_trait::async_trait;

/// Certificate posture of the active connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CertificateInfo {
    /// Whether the chain validates
    pub valid: bool,
    /// Whether the leaf matches a configured pin
    pub pinned: bool,
    /// Number of configured pins
    pub pin_count: u32,
}

/// Access to the active connection's transport metadata
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransportCapability: Send + Sync {
    /// The scheme of the active connection, e.g. `https`.
    async fn protocol(&self) -> Result<String>;

    /// Whether Strict-Transport-Security is in effect.
    async fn hsts_enabled(&self) -> Result<bool>;

    /// Certificate posture, None when no TLS connection exists.
    async fn certificate(&self) -> Result<Option<CertificateInfo>>;
}
