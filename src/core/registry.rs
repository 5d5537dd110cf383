//! Static, ordered registry of all known checks

use crate::config::ScanConfig;
use crate::core::checks::{
    BiometricCheck, CertificatePinningCheck, CryptoCheck, CspCheck, DeviceFingerprintCheck,
    DomProtectionCheck, GdprComplianceCheck, HeadersCheck, HsmCheck, SecurityCheck,
    Soc2ComplianceCheck, StorageCheck, ThreatDetectionCheck, TlsCheck, ZkpCheck,
};

/// Every known check, in execution order.
///
/// The order matches [`CheckKind::ALL`](crate::core::types::CheckKind::ALL);
/// new checks are appended, existing ones never reordered, so recorded
/// results keep their meaning across versions.
pub fn all_checks() -> Vec<Box<dyn SecurityCheck>> {
    vec![
        Box::new(HsmCheck),
        Box::new(BiometricCheck),
        Box::new(DeviceFingerprintCheck),
        Box::new(ZkpCheck),
        Box::new(CspCheck),
        Box::new(TlsCheck),
        Box::new(HeadersCheck),
        Box::new(CryptoCheck),
        Box::new(StorageCheck),
        Box::new(DomProtectionCheck),
        Box::new(CertificatePinningCheck),
        Box::new(GdprComplianceCheck),
        Box::new(ThreatDetectionCheck),
        Box::new(Soc2ComplianceCheck),
    ]
}

/// The checks enabled by `config`, in registry order.
pub fn enabled_checks(config: &ScanConfig) -> Vec<Box<dyn SecurityCheck>> {
    all_checks()
        .into_iter()
        .filter(|check| config.is_enabled(check.kind()))
        .collect()
}
