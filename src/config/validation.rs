//! Configuration validation
//!
//! Invalid configuration is rejected synchronously, before any run starts.

use super::ScanConfig;
use crate::utils::error::{Result, SentinelError};
use tracing::debug;

/// Validation hook for configuration values
pub trait Validate {
    /// Check the value for internal consistency.
    fn validate(&self) -> Result<()>;
}

impl Validate for ScanConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        if self.timeout_ms == 0 {
            return Err(SentinelError::Config(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.check_timeout_ms == 0 {
            return Err(SentinelError::Config(
                "check_timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.check_timeout_ms > self.timeout_ms {
            return Err(SentinelError::Config(format!(
                "check_timeout_ms ({}) must not exceed timeout_ms ({})",
                self.check_timeout_ms, self.timeout_ms
            )));
        }

        Ok(())
    }
}
