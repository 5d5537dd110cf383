//! Compliance attestation capability

use crate::utils::error::Result;
use async_trait::async_trait;

/// Control attestation summary reported by the compliance provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlAttestation {
    /// Controls currently attested
    pub attested: u32,
    /// Controls in scope
    pub total: u32,
}

/// Access to the compliance and privacy attestation service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplianceCapability: Send + Sync {
    /// Whether user consent is on record.
    async fn consent_recorded(&self) -> Result<bool>;

    /// Whether a data retention policy is defined.
    async fn retention_policy_defined(&self) -> Result<bool>;

    /// Whether data minimization is enabled.
    async fn data_minimization_enabled(&self) -> Result<bool>;

    /// Current SOC 2 control attestation counts.
    async fn attested_controls(&self) -> Result<ControlAttestation>;
}
