//! Configuration builder for type-safe configuration construction

use super::{EnabledChecks, ScanConfig, Validate};
use crate::core::types::CheckKind;
use crate::utils::error::Result;

/// Fluent builder over [`ScanConfig`]
///
/// Starts from the defaults; [`build`](ScanConfigBuilder::build) validates
/// the final value.
#[derive(Debug, Clone, Default)]
pub struct ScanConfigBuilder {
    config: ScanConfig,
}

impl ScanConfigBuilder {
    /// Builder seeded with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Global run budget in milliseconds.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.timeout_ms = timeout_ms;
        self
    }

    /// Per-attempt probe budget in milliseconds.
    pub fn check_timeout_ms(mut self, check_timeout_ms: u64) -> Self {
        self.config.check_timeout_ms = check_timeout_ms;
        self
    }

    /// Retries allowed per check on transient failure.
    pub fn retry_attempts(mut self, retry_attempts: u32) -> Self {
        self.config.retry_attempts = retry_attempts;
        self
    }

    /// Delay between attempts in milliseconds.
    pub fn delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.delay_ms = delay_ms;
        self
    }

    /// Randomize the inter-attempt delay by ±10%.
    pub fn retry_jitter(mut self, retry_jitter: bool) -> Self {
        self.config.retry_jitter = retry_jitter;
        self
    }

    /// Enable or disable one check.
    pub fn enable(mut self, kind: CheckKind, enabled: bool) -> Self {
        self.config.checks.set(kind, enabled);
        self
    }

    /// Enable exactly the given checks, disabling everything else.
    pub fn only<I>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = CheckKind>,
    {
        self.config.checks = EnabledChecks::none();
        for kind in kinds {
            self.config.checks.set(kind, true);
        }
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<ScanConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
