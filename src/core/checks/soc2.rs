//! SOC 2 control attestation check

use super::SecurityCheck;
use crate::capabilities::Capabilities;
use crate::core::types::{CheckDetail, CheckKind, Verdict};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Verifies every in-scope control is currently attested.
pub struct Soc2ComplianceCheck;

#[async_trait]
impl SecurityCheck for Soc2ComplianceCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Soc2Compliance
    }

    async fn probe(&self, caps: &Capabilities) -> Result<Verdict> {
        let Some(compliance) = caps.compliance() else {
            return Ok(Verdict::fail(CheckDetail::Soc2Compliance {
                controls_attested: 0,
                controls_total: 0,
            }));
        };

        let attestation = compliance.attested_controls().await?;
        Ok(Verdict::from_outcome(
            attestation.total > 0 && attestation.attested == attestation.total,
            CheckDetail::Soc2Compliance {
                controls_attested: attestation.attested,
                controls_total: attestation.total,
            },
        ))
    }
}
