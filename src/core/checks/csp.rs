//! Content-Security-Policy posture check

use super::SecurityCheck;
use crate::capabilities::Capabilities;
use crate::core::types::{CheckDetail, CheckKind, Verdict};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Inspects the effective CSP for script injection protections.
pub struct CspCheck;

#[async_trait]
impl SecurityCheck for CspCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Csp
    }

    async fn probe(&self, caps: &Capabilities) -> Result<Verdict> {
        let Some(document) = caps.document() else {
            return Ok(Verdict::fail(CheckDetail::Csp {
                policy_present: false,
                blocks_inline_scripts: false,
                blocks_eval: false,
            }));
        };

        let Some(policy) = document.csp_policy().await? else {
            return Ok(Verdict::fail(CheckDetail::Csp {
                policy_present: false,
                blocks_inline_scripts: false,
                blocks_eval: false,
            }));
        };

        let policy = policy.to_lowercase();
        // Script sources are governed by script-src, falling back to
        // default-src; a policy constraining neither blocks nothing.
        let governs_scripts = policy.contains("script-src") || policy.contains("default-src");
        let blocks_inline_scripts = governs_scripts && !policy.contains("'unsafe-inline'");
        let blocks_eval = governs_scripts && !policy.contains("'unsafe-eval'");

        Ok(Verdict::from_outcome(
            blocks_inline_scripts && blocks_eval,
            CheckDetail::Csp {
                policy_present: true,
                blocks_inline_scripts,
                blocks_eval,
            },
        ))
    }
}
