//! Configuration management for the scanner
//!
//! This module handles loading, validation, and management of all scan
//! configuration.

pub mod builder;
pub mod validation;

pub use builder::ScanConfigBuilder;
pub use validation::Validate;

use crate::core::types::CheckKind;
use crate::utils::error::{Result, SentinelError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Default global run budget.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
/// Default per-attempt probe budget.
pub const DEFAULT_CHECK_TIMEOUT_MS: u64 = 3_000;
/// Default retry ceiling for transient probe failures.
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 2;
/// Default inter-attempt delay.
pub const DEFAULT_DELAY_MS: u64 = 250;

/// Configuration for one scanner instance
///
/// Immutable for the lifetime of a run: a scanner captures its configuration
/// at start, and between-run updates swap in a fresh value rather than
/// mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Global budget for the whole run, in milliseconds; must be positive
    pub timeout_ms: u64,
    /// Budget for a single probe attempt, in milliseconds; must be positive
    /// and no larger than `timeout_ms`
    pub check_timeout_ms: u64,
    /// Retries allowed per check on transient failure; a check makes at most
    /// `retry_attempts + 1` attempts
    pub retry_attempts: u32,
    /// Delay between attempts, in milliseconds
    pub delay_ms: u64,
    /// Randomize the inter-attempt delay by ±10%
    pub retry_jitter: bool,
    /// Which checks run
    pub checks: EnabledChecks,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            check_timeout_ms: DEFAULT_CHECK_TIMEOUT_MS,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            delay_ms: DEFAULT_DELAY_MS,
            retry_jitter: false,
            checks: EnabledChecks::default(),
        }
    }
}

impl ScanConfig {
    /// Builder for fluent construction.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::new()
    }

    /// Load configuration from a YAML or JSON file, by extension.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SentinelError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| SentinelError::Config(format!("Failed to parse config: {}", e)))?,
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| SentinelError::Config(format!("Failed to parse config: {}", e)))?,
            other => {
                return Err(SentinelError::Config(format!(
                    "Unsupported config extension: {:?}",
                    other
                )));
            }
        };

        config.validate()?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Whether `kind` is enabled.
    pub fn is_enabled(&self, kind: CheckKind) -> bool {
        self.checks.is_enabled(kind)
    }

    /// The enabled kinds, in registry order.
    pub fn enabled_kinds(&self) -> Vec<CheckKind> {
        self.checks.enabled_kinds()
    }

    /// Global run budget as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Per-attempt probe budget as a [`Duration`].
    pub fn check_timeout(&self) -> Duration {
        Duration::from_millis(self.check_timeout_ms)
    }

    /// Inter-attempt delay as a [`Duration`].
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Per-check enable flags
///
/// Everything is on by default; embedders switch off what their platform
/// cannot answer or their product does not need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnabledChecks {
    /// Hardware security module availability
    pub hsm: bool,
    /// Biometric capability
    pub biometric: bool,
    /// Device fingerprint collection
    pub device_fingerprint: bool,
    /// Zero-knowledge-proof readiness
    pub zkp: bool,
    /// Content-Security-Policy posture
    pub csp: bool,
    /// Transport security
    pub tls: bool,
    /// Response header hygiene
    pub headers: bool,
    /// Cryptographic capability
    pub crypto: bool,
    /// Storage availability and isolation
    pub storage: bool,
    /// DOM skimming protection
    pub dom_protection: bool,
    /// Certificate pinning
    pub certificate_pinning: bool,
    /// Privacy / GDPR posture
    pub gdpr_compliance: bool,
    /// Active threat detection
    pub threat_detection: bool,
    /// SOC 2 control attestation
    pub soc2_compliance: bool,
}

impl Default for EnabledChecks {
    fn default() -> Self {
        Self::all()
    }
}

impl EnabledChecks {
    /// Every check enabled.
    pub fn all() -> Self {
        Self {
            hsm: true,
            biometric: true,
            device_fingerprint: true,
            zkp: true,
            csp: true,
            tls: true,
            headers: true,
            crypto: true,
            storage: true,
            dom_protection: true,
            certificate_pinning: true,
            gdpr_compliance: true,
            threat_detection: true,
            soc2_compliance: true,
        }
    }

    /// Every check disabled.
    pub fn none() -> Self {
        Self {
            hsm: false,
            biometric: false,
            device_fingerprint: false,
            zkp: false,
            csp: false,
            tls: false,
            headers: false,
            crypto: false,
            storage: false,
            dom_protection: false,
            certificate_pinning: false,
            gdpr_compliance: false,
            threat_detection: false,
            soc2_compliance: false,
        }
    }

    /// Whether `kind` is enabled.
    pub fn is_enabled(&self, kind: CheckKind) -> bool {
        match kind {
            CheckKind::Hsm => self.hsm,
            CheckKind::Biometric => self.biometric,
            CheckKind::DeviceFingerprint => self.device_fingerprint,
            CheckKind::Zkp => self.zkp,
            CheckKind::Csp => self.csp,
            CheckKind::Tls => self.tls,
            CheckKind::Headers => self.headers,
            CheckKind::Crypto => self.crypto,
            CheckKind::Storage => self.storage,
            CheckKind::DomProtection => self.dom_protection,
            CheckKind::CertificatePinning => self.certificate_pinning,
            CheckKind::GdprCompliance => self.gdpr_compliance,
            CheckKind::ThreatDetection => self.threat_detection,
            CheckKind::Soc2Compliance => self.soc2_compliance,
        }
    }

    /// Enable or disable `kind`.
    pub fn set(&mut self, kind: CheckKind, enabled: bool) {
        match kind {
            CheckKind::Hsm => self.hsm = enabled,
            CheckKind::Biometric => self.biometric = enabled,
            CheckKind::DeviceFingerprint => self.device_fingerprint = enabled,
            CheckKind::Zkp => self.zkp = enabled,
            CheckKind::Csp => self.csp = enabled,
            CheckKind::Tls => self.tls = enabled,
            CheckKind::Headers => self.headers = enabled,
            CheckKind::Crypto => self.crypto = enabled,
            CheckKind::Storage => self.storage = enabled,
            CheckKind::DomProtection => self.dom_protection = enabled,
            CheckKind::CertificatePinning => self.certificate_pinning = enabled,
            CheckKind::GdprCompliance => self.gdpr_compliance = enabled,
            CheckKind::ThreatDetection => self.threat_detection = enabled,
            CheckKind::Soc2Compliance => self.soc2_compliance = enabled,
        }
    }

    /// The enabled kinds, in registry order.
    pub fn enabled_kinds(&self) -> Vec<CheckKind> {
        CheckKind::ALL
            .into_iter()
            .filter(|&kind| self.is_enabled(kind))
            .collect()
    }
}
