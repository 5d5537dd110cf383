//! Storage availability and isolation check

use super::SecurityCheck;
use crate::capabilities::Capabilities;
use crate::core::types::{CheckDetail, CheckKind, Verdict};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Probes both key-value stores and their origin isolation.
pub struct StorageCheck;

#[async_trait]
impl SecurityCheck for StorageCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Storage
    }

    async fn probe(&self, caps: &Capabilities) -> Result<Verdict> {
        let Some(storage) = caps.storage() else {
            return Ok(Verdict::fail(CheckDetail::Storage {
                local_available: false,
                session_available: false,
                isolated: false,
            }));
        };

        let local_available = storage.local_available().await?;
        let session_available = storage.session_available().await?;
        let isolated = storage.is_isolated().await?;

        Ok(Verdict::from_outcome(
            local_available && session_available && isolated,
            CheckDetail::Storage {
                local_available,
                session_available,
                isolated,
            },
        ))
    }
}
