//! Device fingerprint collection check

use super::SecurityCheck;
use crate::capabilities::Capabilities;
use crate::core::types::{CheckDetail, CheckKind, Verdict};
use crate::utils::error::Result;
use async_trait::async_trait;

// Rough entropy contribution per metadata source.
const UA_ENTROPY_BITS: u32 = 16;
const SCREEN_ENTROPY_BITS: u32 = 8;
const CONCURRENCY_ENTROPY_BITS: u32 = 4;

// A fingerprint needs at least the user agent and the screen to be worth
// anything for device binding.
const MIN_ENTROPY_BITS: u32 = UA_ENTROPY_BITS + SCREEN_ENTROPY_BITS;

/// Collects device metadata and digests it into a fingerprint.
pub struct DeviceFingerprintCheck;

#[async_trait]
impl SecurityCheck for DeviceFingerprintCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::DeviceFingerprint
    }

    async fn probe(&self, caps: &Capabilities) -> Result<Verdict> {
        let Some(device) = caps.device() else {
            return Ok(Verdict::fail(CheckDetail::DeviceFingerprint {
                collected: false,
                entropy_bits: 0,
                fingerprint: None,
            }));
        };

        let mut entropy_bits = 0;
        let mut material = String::new();

        if let Some(user_agent) = device.user_agent().await? {
            entropy_bits += UA_ENTROPY_BITS;
            material.push_str(&user_agent);
            material.push('|');
        }
        if let Some(screen) = device.screen().await? {
            entropy_bits += SCREEN_ENTROPY_BITS;
            material.push_str(&format!(
                "{}x{}x{}",
                screen.width, screen.height, screen.color_depth
            ));
            material.push('|');
        }
        if let Some(cores) = device.hardware_concurrency().await? {
            entropy_bits += CONCURRENCY_ENTROPY_BITS;
            material.push_str(&cores.to_string());
        }

        let collected = entropy_bits > 0;
        let fingerprint = match (collected, caps.crypto()) {
            (true, Some(crypto)) => Some(hex::encode(crypto.digest(material.as_bytes()).await?)),
            _ => None,
        };

        let passed = fingerprint.is_some() && entropy_bits >= MIN_ENTROPY_BITS;
        Ok(Verdict::from_outcome(
            passed,
            CheckDetail::DeviceFingerprint {
                collected,
                entropy_bits,
                fingerprint,
            },
        ))
    }
}
