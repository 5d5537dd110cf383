//! The scan driver: sequential check execution under a global deadline

use crate::capabilities::Capabilities;
use crate::config::{ScanConfig, Validate};
use crate::core::aggregator::aggregate_run;
use crate::core::progress::ProgressTracker;
use crate::core::registry;
use crate::core::retry::{RetryOutcome, RetryPolicy};
use crate::core::types::{OverallStatus, ProgressSnapshot, RunState, ScanReport};
use crate::utils::error::{Result, SentinelError};
use arc_swap::ArcSwap;
use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Error text recorded when the global watchdog fires.
pub const TIMEOUT_ERROR: &str = "security check timed out";
/// Error text recorded when the caller cancels a run.
pub const CANCELLED_ERROR: &str = "security check cancelled";

/// Drives the enabled checks to one aggregate verdict
///
/// Checks run strictly sequentially: several probes inspect shared ambient
/// state (the document, the response, the transport), and platform
/// capabilities can be exclusive-access on some targets. Serializing keeps
/// probes from interfering with each other and keeps exactly one step in
/// flight for progress reporting.
///
/// All methods take `&self`; a scanner shared behind an [`Arc`] can be
/// started from one task and observed or stopped from others.
pub struct SecurityScanner {
    config: ArcSwap<ScanConfig>,
    capabilities: Capabilities,
    tracker: ProgressTracker,
    state: Mutex<RunState>,
    cancelled: AtomicBool,
    last_status: RwLock<OverallStatus>,
}

impl SecurityScanner {
    /// Create a scanner over the given capabilities.
    ///
    /// Rejects an invalid configuration before any run can start.
    pub fn new(config: ScanConfig, capabilities: Capabilities) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: ArcSwap::from_pointee(config),
            capabilities,
            tracker: ProgressTracker::new(),
            state: Mutex::new(RunState::Idle),
            cancelled: AtomicBool::new(false),
            last_status: RwLock::new(OverallStatus::Unknown),
        })
    }

    /// Run every enabled check and resolve with the terminal report.
    ///
    /// Fails synchronously with [`SentinelError::InvalidState`] when a run is
    /// already in flight. Probe verdicts, negative ones included, never fail
    /// a run; only the global timeout or a [`stop`](SecurityScanner::stop)
    /// end it early, and everything settled by then is kept and aggregated.
    pub async fn start(&self) -> Result<ScanReport> {
        {
            let mut state = self.state.lock();
            if *state == RunState::Running {
                return Err(SentinelError::InvalidState {
                    action: "start",
                    state: *state,
                });
            }
            *state = RunState::Running;
        }
        self.cancelled.store(false, Ordering::Release);

        let config = self.config.load_full();
        let checks = registry::enabled_checks(&config);
        let total = checks.len();
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let started = Instant::now();
        let deadline = started + config.timeout();
        let retry = RetryPolicy::from_config(&config);

        self.tracker.begin(run_id, checks.first().map(|c| c.kind()));
        info!(%run_id, total, timeout_ms = config.timeout_ms, "starting security scan");

        let mut terminal = RunState::Complete;
        let mut cursor = checks.iter().peekable();
        while let Some(check) = cursor.next() {
            if self.cancelled.load(Ordering::Acquire) {
                info!(%run_id, settled = self.tracker.snapshot().results.len(), "scan cancelled");
                terminal = RunState::Cancelled;
                self.tracker.fail(CANCELLED_ERROR);
                break;
            }
            if Instant::now() >= deadline {
                warn!(%run_id, settled = self.tracker.snapshot().results.len(), "scan timed out");
                terminal = RunState::TimedOut;
                self.tracker.fail(TIMEOUT_ERROR);
                break;
            }

            match retry
                .run(
                    check.as_ref(),
                    &self.capabilities,
                    config.check_timeout(),
                    deadline,
                )
                .await
            {
                RetryOutcome::Settled(result) => {
                    debug!(
                        kind = %result.kind,
                        passed = result.passed,
                        attempts = result.attempts,
                        duration_ms = result.duration_ms,
                        "check settled"
                    );
                    let next = cursor.peek().map(|c| c.kind());
                    self.tracker.advance(result, total, next);
                }
                RetryOutcome::DeadlineExceeded { attempts } => {
                    warn!(%run_id, kind = %check.kind(), attempts, "scan timed out mid-check");
                    terminal = RunState::TimedOut;
                    self.tracker.fail(TIMEOUT_ERROR);
                    break;
                }
            }
        }

        if terminal == RunState::Complete {
            self.tracker.finish();
        }

        let snapshot = self.tracker.snapshot();
        let status = aggregate_run(&snapshot.results, terminal == RunState::Complete);
        *self.last_status.write() = status;
        *self.state.lock() = terminal;

        let finished_at = Utc::now();
        info!(%run_id, %status, state = %terminal, "scan finished");
        Ok(ScanReport {
            run_id,
            status,
            state: terminal,
            started_at,
            finished_at,
            duration_ms: started.elapsed().as_millis() as u64,
            snapshot,
        })
    }

    /// Request cooperative cancellation of the in-flight run.
    ///
    /// The flag is observed between steps, never mid-probe: a check already
    /// in flight may still settle, and its result is kept. Calling this with
    /// no run in flight does nothing.
    pub fn stop(&self) {
        if *self.state.lock() == RunState::Running {
            info!("cancellation requested");
            self.cancelled.store(true, Ordering::Release);
        }
    }

    /// Return to [`RunState::Idle`] with a fresh progress snapshot.
    ///
    /// Legal from any state except [`RunState::Running`]; a running scan
    /// must be stopped first.
    pub fn reset(&self) -> Result<()> {
        let mut state = self.state.lock();
        if *state == RunState::Running {
            return Err(SentinelError::InvalidState {
                action: "reset",
                state: *state,
            });
        }
        *state = RunState::Idle;
        drop(state);
        self.cancelled.store(false, Ordering::Release);
        self.tracker.reset();
        debug!("scanner reset");
        Ok(())
    }

    /// Point-in-time copy of the live progress state, for polling UIs.
    pub fn state(&self) -> ProgressSnapshot {
        self.tracker.snapshot()
    }

    /// Receiver that observes every progress change, for push UIs.
    pub fn subscribe(&self) -> watch::Receiver<ProgressSnapshot> {
        self.tracker.subscribe()
    }

    /// The lifecycle state of the scanner.
    pub fn run_state(&self) -> RunState {
        *self.state.lock()
    }

    /// Aggregate verdict of the most recently finished run.
    ///
    /// [`OverallStatus::Unknown`] until a run has finished; survives
    /// [`reset`](SecurityScanner::reset).
    pub fn last_status(&self) -> OverallStatus {
        *self.last_status.read()
    }

    /// The active configuration.
    pub fn config(&self) -> Arc<ScanConfig> {
        self.config.load_full()
    }

    /// Replace the configuration between runs.
    ///
    /// The mutation is applied to a copy, validated, and swapped in
    /// atomically; a run that already captured its configuration is never
    /// affected. Fails with [`SentinelError::InvalidState`] while a run is
    /// in flight.
    pub fn update_config<F>(&self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut ScanConfig),
    {
        let state = self.state.lock();
        if *state == RunState::Running {
            return Err(SentinelError::InvalidState {
                action: "update_config",
                state: *state,
            });
        }
        let mut next = (**self.config.load()).clone();
        mutate(&mut next);
        next.validate()?;
        self.config.store(Arc::new(next));
        debug!("configuration updated");
        Ok(())
    }
}

impl std::fmt::Debug for SecurityScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityScanner")
            .field("run_state", &self.run_state())
            .field("capabilities", &self.capabilities)
            .finish()
    }
}
