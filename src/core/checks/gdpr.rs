//! Privacy / GDPR posture check

use super::SecurityCheck;
use crate::capabilities::Capabilities;
use crate::core::types::{CheckDetail, CheckKind, Verdict};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Attests consent, retention, and minimization posture.
pub struct GdprComplianceCheck;

#[async_trait]
impl SecurityCheck for GdprComplianceCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::GdprCompliance
    }

    async fn probe(&self, caps: &Capabilities) -> Result<Verdict> {
        let Some(compliance) = caps.compliance() else {
            return Ok(Verdict::fail(CheckDetail::GdprCompliance {
                consent_recorded: false,
                retention_policy: false,
                data_minimization: false,
            }));
        };

        let consent_recorded = compliance.consent_recorded().await?;
        let retention_policy = compliance.retention_policy_defined().await?;
        let data_minimization = compliance.data_minimization_enabled().await?;

        Ok(Verdict::from_outcome(
            consent_recorded && retention_policy && data_minimization,
            CheckDetail::GdprCompliance {
                consent_recorded,
                retention_policy,
                data_minimization,
            },
        ))
    }
}
