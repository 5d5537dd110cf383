//! Security check implementations
//!
//! Each check is one independent probe of a single security property, driven
//! by the orchestrator through the same async contract. Checks read platform
//! state through the capability providers and never write anything.

pub mod biometric;
pub mod cert_pinning;
pub mod crypto;
pub mod csp;
pub mod device;
pub mod dom;
pub mod gdpr;
pub mod headers;
pub mod hsm;
pub mod soc2;
pub mod storage;
pub mod threat;
pub mod tls;
pub mod zkp;

pub use biometric::BiometricCheck;
pub use cert_pinning::CertificatePinningCheck;
pub use crypto::CryptoCheck;
pub use csp::CspCheck;
pub use device::DeviceFingerprintCheck;
pub use dom::DomProtectionCheck;
pub use gdpr::GdprComplianceCheck;
pub use headers::HeadersCheck;
pub use hsm::HsmCheck;
pub use soc2::Soc2ComplianceCheck;
pub use storage::StorageCheck;
pub use threat::ThreatDetectionCheck;
pub use tls::TlsCheck;
pub use zkp::ZkpCheck;

use crate::capabilities::Capabilities;
use crate::core::types::{CheckKind, Verdict};
use crate::utils::error::Result;
use async_trait::async_trait;

/// One independent security probe
///
/// Contract: an absent platform capability is a failed verdict with a detail
/// explaining why, never an error. Errors are reserved for transient
/// infrastructure failures, which the retry policy may recover; a considered
/// `passed: false` verdict is final and is never retried. The per-attempt
/// timeout is enforced by the invoker, not by the probe.
#[async_trait]
pub trait SecurityCheck: Send + Sync {
    /// The identity of this probe.
    fn kind(&self) -> CheckKind;

    /// Probe the platform and produce a considered verdict.
    async fn probe(&self, caps: &Capabilities) -> Result<Verdict>;
}
