//! Active threat detection check

use super::SecurityCheck;
use crate::capabilities::Capabilities;
use crate::core::types::{CheckDetail, CheckKind, ThreatLevel, Verdict};
use crate::utils::error::Result;
use async_trait::async_trait;

const THREAT_INSECURE_ORIGIN: &str = "insecure_script_origin";
const THREAT_READABLE_COOKIES: &str = "script_readable_cookies";
const THREAT_UNGUARDED_INPUTS: &str = "unguarded_sensitive_inputs";
const THREAT_NO_INSPECTION: &str = "inspection_unavailable";

/// Sweeps the ambient document for known skimming and exfiltration vectors.
pub struct ThreatDetectionCheck;

#[async_trait]
impl SecurityCheck for ThreatDetectionCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::ThreatDetection
    }

    async fn probe(&self, caps: &Capabilities) -> Result<Verdict> {
        let Some(document) = caps.document() else {
            return Ok(Verdict::fail(CheckDetail::ThreatDetection {
                threat_level: ThreatLevel::None,
                detected_threats: vec![THREAT_NO_INSPECTION.to_string()],
            }));
        };

        let mut detected_threats = Vec::new();

        let mut has_insecure_origin = false;
        for origin in document.foreign_script_origins().await? {
            if !origin.starts_with("https://") {
                has_insecure_origin = true;
                detected_threats.push(format!("{}:{}", THREAT_INSECURE_ORIGIN, origin));
            }
        }

        if document.cookies().await?.iter().any(|c| !c.http_only) {
            detected_threats.push(THREAT_READABLE_COOKIES.to_string());
        }

        let total = document.input_count().await?;
        let guarded = document.guarded_input_count().await?;
        let has_unguarded_inputs = guarded < total;
        if has_unguarded_inputs {
            detected_threats.push(THREAT_UNGUARDED_INPUTS.to_string());
        }

        // An injected script with an unguarded field to read is an active
        // skimming setup; either alone is still serious.
        let threat_level = if detected_threats.is_empty() {
            ThreatLevel::None
        } else if has_insecure_origin && has_unguarded_inputs {
            ThreatLevel::Critical
        } else if has_insecure_origin {
            ThreatLevel::High
        } else if detected_threats.len() >= 2 {
            ThreatLevel::Medium
        } else {
            ThreatLevel::Low
        };

        Ok(Verdict::from_outcome(
            detected_threats.is_empty(),
            CheckDetail::ThreatDetection {
                threat_level,
                detected_threats,
            },
        ))
    }
}
