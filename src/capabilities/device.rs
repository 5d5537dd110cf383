//! Device and platform metadata capability

use crate::utils::error::Result;
use async_trait::async_trait;

/// Screen geometry reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Color depth in bits
    pub color_depth: u32,
}

/// Access to device and platform metadata
///
/// Every source is optional; a platform that hides a source returns
/// `Ok(None)` rather than an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceCapability: Send + Sync {
    /// The user agent string, if exposed.
    async fn user_agent(&self) -> Result<Option<String>>;

    /// Screen geometry, if exposed.
    async fn screen(&self) -> Result<Option<ScreenInfo>>;

    /// Logical processor count, if exposed.
    async fn hardware_concurrency(&self) -> Result<Option<u32>>;
}
