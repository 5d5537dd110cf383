//! Biometric capability check

use super::SecurityCheck;
use crate::capabilities::Capabilities;
use crate::core::types::{CheckDetail, CheckKind, Verdict};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Probes for a usable biometric sensor and a registered platform
/// authenticator.
pub struct BiometricCheck;

#[async_trait]
impl SecurityCheck for BiometricCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Biometric
    }

    async fn probe(&self, caps: &Capabilities) -> Result<Verdict> {
        let Some(biometric) = caps.biometric() else {
            return Ok(Verdict::fail(CheckDetail::Biometric {
                available: false,
                platform_authenticator: false,
            }));
        };

        let available = biometric.is_available().await?;
        let platform_authenticator = biometric.has_platform_authenticator().await?;
        Ok(Verdict::from_outcome(
            available && platform_authenticator,
            CheckDetail::Biometric {
                available,
                platform_authenticator,
            },
        ))
    }
}
