//! Certificate pinning check

use super::SecurityCheck;
use crate::capabilities::Capabilities;
use crate::core::types::{CheckDetail, CheckKind, Verdict};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Verifies the active certificate matches a configured pin.
pub struct CertificatePinningCheck;

#[async_trait]
impl SecurityCheck for CertificatePinningCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::CertificatePinning
    }

    async fn probe(&self, caps: &Capabilities) -> Result<Verdict> {
        let Some(transport) = caps.transport() else {
            return Ok(Verdict::fail(CheckDetail::CertificatePinning {
                pinned: false,
                pin_count: 0,
            }));
        };

        let Some(cert) = transport.certificate().await? else {
            return Ok(Verdict::fail(CheckDetail::CertificatePinning {
                pinned: false,
                pin_count: 0,
            }));
        };

        Ok(Verdict::from_outcome(
            cert.pinned && cert.pin_count > 0,
            CheckDetail::CertificatePinning {
                pinned: cert.pinned,
                pin_count: cert.pin_count,
            },
        ))
    }
}
