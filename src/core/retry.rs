//! Bounded retry for transient probe failures

use crate::capabilities::Capabilities;
use crate::config::ScanConfig;
use crate::core::checks::SecurityCheck;
use crate::core::types::CheckResult;
use crate::utils::error::SentinelError;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

/// How one retried probe ended
#[derive(Debug)]
pub enum RetryOutcome {
    /// The probe produced a result, considered or demoted
    Settled(CheckResult),
    /// The global deadline passed mid-probe; no result to record
    DeadlineExceeded {
        /// Attempts made before the deadline fired
        attempts: u32,
    },
}

/// Bounded retry with a fixed inter-attempt delay
///
/// Retries exist for transient infrastructure failures only: a timeout or an
/// error raised by the probe. A probe's considered `passed: false` verdict is
/// final and is returned on the first attempt it arrives.
pub struct RetryPolicy {
    max_retries: u32,
    delay: Duration,
    jitter: bool,
}

impl RetryPolicy {
    /// Create a policy allowing `max_retries` retries with `delay` between
    /// attempts.
    pub fn new(max_retries: u32, delay: Duration, jitter: bool) -> Self {
        Self {
            max_retries,
            delay,
            jitter,
        }
    }

    /// Policy from the run configuration.
    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(
            config.retry_attempts,
            Duration::from_millis(config.delay_ms),
            config.retry_jitter,
        )
    }

    /// Drive one check to a settled outcome.
    ///
    /// Each attempt is bounded by `attempt_timeout`, clamped to whatever
    /// remains of the global `deadline`. When retries are exhausted the check
    /// is demoted to a failed result carrying the last error; when the global
    /// deadline passes mid-probe the check is abandoned instead.
    pub async fn run(
        &self,
        check: &dyn SecurityCheck,
        caps: &Capabilities,
        attempt_timeout: Duration,
        deadline: Instant,
    ) -> RetryOutcome {
        let started = Instant::now();
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            let remaining = deadline.saturating_duration_since(Instant::now());
            let budget = attempt_timeout.min(remaining);

            let outcome = match tokio::time::timeout(budget, check.probe(caps)).await {
                Ok(Ok(verdict)) => Ok(verdict),
                Ok(Err(err)) => Err(err),
                Err(_) => Err(SentinelError::CheckTimeout { kind: check.kind() }),
            };

            match outcome {
                Ok(verdict) => {
                    if attempts > 1 {
                        debug!(kind = %check.kind(), attempts, "probe recovered after retry");
                    }
                    return RetryOutcome::Settled(CheckResult::settled(
                        check.kind(),
                        verdict,
                        attempts,
                        started.elapsed().as_millis() as u64,
                    ));
                }
                Err(err) => {
                    if Instant::now() >= deadline {
                        warn!(kind = %check.kind(), attempts, "global deadline passed mid-probe");
                        return RetryOutcome::DeadlineExceeded { attempts };
                    }
                    if attempts > self.max_retries {
                        warn!(
                            kind = %check.kind(),
                            attempts,
                            error = %err,
                            "retries exhausted, demoting to failed result"
                        );
                        return RetryOutcome::Settled(CheckResult::demoted(
                            check.kind(),
                            err.to_string(),
                            attempts,
                            started.elapsed().as_millis() as u64,
                        ));
                    }
                    debug!(
                        kind = %check.kind(),
                        attempt = attempts,
                        error = %err,
                        delay = ?self.delay,
                        "probe attempt failed, retrying"
                    );
                    let pause = self
                        .attempt_delay()
                        .min(deadline.saturating_duration_since(Instant::now()));
                    tokio::time::sleep(pause).await;
                }
            }
        }
    }

    fn attempt_delay(&self) -> Duration {
        if !self.jitter {
            return self.delay;
        }
        let jitter_factor = 0.1;
        let spread = 1.0 + jitter_factor * (rand::random::<f64>() * 2.0 - 1.0);
        Duration::from_millis((self.delay.as_millis() as f64 * spread) as u64)
    }
}
