//! Zero-knowledge-proof readiness check

use super::SecurityCheck;
use crate::capabilities::Capabilities;
use crate::core::types::{CheckDetail, CheckKind, Verdict};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Probes whether the crypto subsystem offers a zero-knowledge proof system.
pub struct ZkpCheck;

#[async_trait]
impl SecurityCheck for ZkpCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Zkp
    }

    async fn probe(&self, caps: &Capabilities) -> Result<Verdict> {
        let Some(crypto) = caps.crypto() else {
            return Ok(Verdict::fail(CheckDetail::Zkp {
                supported: false,
                proof_system: None,
            }));
        };

        let proof_system = crypto.proof_system().await?;
        Ok(Verdict::from_outcome(
            proof_system.is_some(),
            CheckDetail::Zkp {
                supported: proof_system.is_some(),
                proof_system,
            },
        ))
    }
}
