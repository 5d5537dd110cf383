//! Cryptographic capability check

use super::SecurityCheck;
use crate::capabilities::Capabilities;
use crate::core::types::{CheckDetail, CheckKind, Verdict};
use crate::utils::error::Result;
use async_trait::async_trait;

const RANDOM_PROBE_LEN: usize = 32;
const PROBE_PAYLOAD: &[u8] = b"wallet-sentinel crypto probe";

/// Exercises the crypto subsystem end to end: random generation, a
/// keygen/sign/verify round trip, and a digest.
pub struct CryptoCheck;

#[async_trait]
impl SecurityCheck for CryptoCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Crypto
    }

    async fn probe(&self, caps: &Capabilities) -> Result<Verdict> {
        let Some(crypto) = caps.crypto() else {
            return Ok(Verdict::fail(CheckDetail::Crypto {
                random_ok: false,
                keygen_ok: false,
                digest_ok: false,
            }));
        };

        let random = crypto.random_bytes(RANDOM_PROBE_LEN).await?;
        let random_ok = random.len() == RANDOM_PROBE_LEN && random.iter().any(|&b| b != 0);

        let key = crypto.generate_key().await?;
        let keygen_ok = if key.is_empty() {
            false
        } else {
            let signature = crypto.sign(&key, PROBE_PAYLOAD).await?;
            crypto.verify(&key, PROBE_PAYLOAD, &signature).await?
        };

        let digest_ok = !crypto.digest(PROBE_PAYLOAD).await?.is_empty();

        Ok(Verdict::from_outcome(
            random_ok && keygen_ok && digest_ok,
            CheckDetail::Crypto {
                random_ok,
                keygen_ok,
                digest_ok,
            },
        ))
    }
}
