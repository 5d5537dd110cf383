//! DOM skimming protection check

use super::SecurityCheck;
use crate::capabilities::Capabilities;
use crate::core::types::{CheckDetail, CheckKind, Verdict};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Verifies that every sensitive input field carries a skimming guard.
pub struct DomProtectionCheck;

#[async_trait]
impl SecurityCheck for DomProtectionCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::DomProtection
    }

    async fn probe(&self, caps: &Capabilities) -> Result<Verdict> {
        let Some(document) = caps.document() else {
            return Ok(Verdict::fail(CheckDetail::DomProtection {
                inputs_guarded: false,
                unguarded_fields: 0,
            }));
        };

        let total = document.input_count().await?;
        let guarded = document.guarded_input_count().await?;
        let unguarded_fields = total.saturating_sub(guarded);

        // A document with no sensitive inputs is trivially protected.
        Ok(Verdict::from_outcome(
            unguarded_fields == 0,
            CheckDetail::DomProtection {
                inputs_guarded: unguarded_fields == 0,
                unguarded_fields,
            },
        ))
    }
}
