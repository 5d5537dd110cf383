//! Hardware security module availability check

use super::SecurityCheck;
use crate::capabilities::Capabilities;
use crate::core::types::{CheckDetail, CheckKind, Verdict};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Probes whether any hardware-backed key module is reachable.
pub struct HsmCheck;

#[async_trait]
impl SecurityCheck for HsmCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Hsm
    }

    async fn probe(&self, caps: &Capabilities) -> Result<Verdict> {
        let Some(crypto) = caps.crypto() else {
            return Ok(Verdict::fail(CheckDetail::Hsm {
                available: false,
                module_count: 0,
            }));
        };

        let modules = crypto.hardware_modules().await?;
        let module_count = modules.len() as u32;
        Ok(Verdict::from_outcome(
            module_count > 0,
            CheckDetail::Hsm {
                available: module_count > 0,
                module_count,
            },
        ))
    }
}
