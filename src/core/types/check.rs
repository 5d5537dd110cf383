//! Check identities, per-kind detail records, and settled results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of a security probe
///
/// The set is closed but append-only: new kinds are added at the end of the
/// registry order, existing kinds are never removed, so recorded results stay
/// readable across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum CheckKind {
    /// Hardware security module availability
    Hsm,
    /// Biometric / platform authenticator capability
    Biometric,
    /// Device fingerprint collection
    DeviceFingerprint,
    /// Zero-knowledge-proof readiness
    Zkp,
    /// Content-Security-Policy posture
    Csp,
    /// Transport security (TLS, HSTS, certificate)
    Tls,
    /// Response header hygiene
    Headers,
    /// Cryptographic capability (random, keygen, digest)
    Crypto,
    /// Storage availability and isolation
    Storage,
    /// DOM skimming protection on sensitive inputs
    DomProtection,
    /// Certificate pinning
    CertificatePinning,
    /// Privacy / GDPR posture
    GdprCompliance,
    /// Active threat detection
    ThreatDetection,
    /// SOC 2 control attestation
    Soc2Compliance,
}

impl CheckKind {
    /// All known kinds, in registry execution order.
    pub const ALL: [CheckKind; 14] = [
        CheckKind::Hsm,
        CheckKind::Biometric,
        CheckKind::DeviceFingerprint,
        CheckKind::Zkp,
        CheckKind::Csp,
        CheckKind::Tls,
        CheckKind::Headers,
        CheckKind::Crypto,
        CheckKind::Storage,
        CheckKind::DomProtection,
        CheckKind::CertificatePinning,
        CheckKind::GdprCompliance,
        CheckKind::ThreatDetection,
        CheckKind::Soc2Compliance,
    ];

    /// Stable wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Hsm => "hsm",
            CheckKind::Biometric => "biometric",
            CheckKind::DeviceFingerprint => "device_fingerprint",
            CheckKind::Zkp => "zkp",
            CheckKind::Csp => "csp",
            CheckKind::Tls => "tls",
            CheckKind::Headers => "headers",
            CheckKind::Crypto => "crypto",
            CheckKind::Storage => "storage",
            CheckKind::DomProtection => "dom_protection",
            CheckKind::CertificatePinning => "certificate_pinning",
            CheckKind::GdprCompliance => "gdpr_compliance",
            CheckKind::ThreatDetection => "threat_detection",
            CheckKind::Soc2Compliance => "soc2_compliance",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Threat severity reported by the threat-detection probe
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    /// No threats detected
    #[default]
    None,
    /// Low severity
    Low,
    /// Medium severity
    Medium,
    /// High severity
    High,
    /// Critical severity
    Critical,
}

/// Kind-specific diagnostic detail attached to a [`CheckResult`]
///
/// Every kind's detail shape is fixed and known statically so consumers can
/// pattern-match exhaustively; there is no free-form blob variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckDetail {
    /// Hardware security module availability
    Hsm {
        /// Whether any hardware-backed module is reachable
        available: bool,
        /// Number of reachable modules
        module_count: u32,
    },
    /// Biometric capability
    Biometric {
        /// Whether a biometric sensor is present
        available: bool,
        /// Whether a platform authenticator is registered
        platform_authenticator: bool,
    },
    /// Device fingerprint collection
    DeviceFingerprint {
        /// Whether any metadata source was readable
        collected: bool,
        /// Rough entropy contributed by the collected sources
        entropy_bits: u32,
        /// Hex digest over the collected sources, when computable
        fingerprint: Option<String>,
    },
    /// Zero-knowledge-proof readiness
    Zkp {
        /// Whether a proof system is available
        supported: bool,
        /// Name of the available proof system
        proof_system: Option<String>,
    },
    /// Content-Security-Policy posture
    Csp {
        /// Whether a policy is served at all
        policy_present: bool,
        /// Whether inline scripts are blocked
        blocks_inline_scripts: bool,
        /// Whether `eval` is blocked
        blocks_eval: bool,
    },
    /// Transport security
    Tls {
        /// Strict-Transport-Security in effect
        has_hsts: bool,
        /// Every cookie carries the Secure attribute
        has_secure_cookies: bool,
        /// Certificate chain validates
        has_valid_certificate: bool,
    },
    /// Response header hygiene
    Headers {
        /// X-Frame-Options present
        frame_options: bool,
        /// X-Content-Type-Options set to nosniff
        content_type_options: bool,
        /// Referrer-Policy present
        referrer_policy: bool,
    },
    /// Cryptographic capability
    Crypto {
        /// Random generation produced usable output
        random_ok: bool,
        /// Key generation succeeded
        keygen_ok: bool,
        /// Digest computation succeeded
        digest_ok: bool,
    },
    /// Storage availability and isolation
    Storage {
        /// Local key-value store reachable
        local_available: bool,
        /// Session key-value store reachable
        session_available: bool,
        /// Stores are isolated from foreign origins
        isolated: bool,
    },
    /// DOM skimming protection
    DomProtection {
        /// All sensitive inputs are guarded
        inputs_guarded: bool,
        /// Count of unguarded sensitive fields
        unguarded_fields: u32,
    },
    /// Certificate pinning
    CertificatePinning {
        /// Whether the active certificate is pinned
        pinned: bool,
        /// Number of configured pins
        pin_count: u32,
    },
    /// Privacy / GDPR posture
    GdprCompliance {
        /// User consent is on record
        consent_recorded: bool,
        /// A retention policy is defined
        retention_policy: bool,
        /// Data minimization is enabled
        data_minimization: bool,
    },
    /// Threat detection
    ThreatDetection {
        /// Aggregate severity of everything detected
        threat_level: ThreatLevel,
        /// Identifiers of the detected threats
        detected_threats: Vec<String>,
    },
    /// SOC 2 control attestation
    Soc2Compliance {
        /// Controls currently attested
        controls_attested: u32,
        /// Controls in scope
        controls_total: u32,
    },
    /// The probe never produced a considered verdict
    ///
    /// Used when retries are exhausted on timeouts or probe errors; a probe
    /// that never answered has no kind-specific facts to report.
    Unavailable {
        /// Last failure observed before giving up
        reason: String,
    },
}

/// A probe's considered verdict, before retry accounting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the probed security property holds
    pub passed: bool,
    /// Kind-specific diagnostic detail
    pub detail: CheckDetail,
}

impl Verdict {
    /// A passing verdict with the given detail.
    pub fn pass(detail: CheckDetail) -> Self {
        Self {
            passed: true,
            detail,
        }
    }

    /// A failing verdict with the given detail.
    ///
    /// A failing verdict is data, not an error: it is recorded as-is and
    /// never retried.
    pub fn fail(detail: CheckDetail) -> Self {
        Self {
            passed: false,
            detail,
        }
    }

    /// Verdict with `passed` derived from the given condition.
    pub fn from_outcome(passed: bool, detail: CheckDetail) -> Self {
        Self { passed, detail }
    }
}

/// Settled outcome of one probe, including retry accounting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Which probe this is
    pub kind: CheckKind,
    /// Whether the probed property holds
    pub passed: bool,
    /// Kind-specific diagnostic detail
    pub detail: CheckDetail,
    /// Attempts actually made; never exceeds `retry_attempts + 1`
    pub attempts: u32,
    /// Wall-clock time spent across all attempts
    pub duration_ms: u64,
    /// When the result settled
    pub completed_at: DateTime<Utc>,
}

impl CheckResult {
    /// Result for a probe that produced a considered verdict.
    pub fn settled(kind: CheckKind, verdict: Verdict, attempts: u32, duration_ms: u64) -> Self {
        Self {
            kind,
            passed: verdict.passed,
            detail: verdict.detail,
            attempts,
            duration_ms,
            completed_at: Utc::now(),
        }
    }

    /// Result for a probe whose retries were exhausted without a verdict.
    pub fn demoted(kind: CheckKind, reason: String, attempts: u32, duration_ms: u64) -> Self {
        Self {
            kind,
            passed: false,
            detail: CheckDetail::Unavailable { reason },
            attempts,
            duration_ms,
            completed_at: Utc::now(),
        }
    }
}
