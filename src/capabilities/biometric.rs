//! Biometric / platform authenticator capability

use crate::utils::error::Result;
use async_trait::async_trait;

/// Access to the platform biometric or WebAuthn-style authenticator
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BiometricCapability: Send + Sync {
    /// Whether a biometric sensor is present and usable.
    async fn is_available(&self) -> Result<bool>;

    /// Whether a platform authenticator is registered for this user.
    async fn has_platform_authenticator(&self) -> Result<bool>;
}
