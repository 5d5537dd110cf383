//! Run lifecycle, aggregate status, and externally visible progress types

use super::check::{CheckKind, CheckResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Orchestrator run state
///
/// `Idle` is both the initial and the post-reset state. A run moves to
/// `Running` on start and settles in exactly one of the three terminal
/// states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// No run in flight; initial and post-reset state
    #[default]
    Idle,
    /// A run is in flight
    Running,
    /// The cursor exhausted every enabled check
    Complete,
    /// The global watchdog fired before all enabled checks settled
    TimedOut,
    /// The caller cancelled the run
    Cancelled,
}

impl RunState {
    /// Whether the state is terminal for a run (or idle).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunState::Running)
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Complete => "complete",
            RunState::TimedOut => "timed_out",
            RunState::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// Aggregate trust verdict over a set of settled checks
///
/// Derived from the final results sequence, never stored independently.
/// `Unknown` is reserved for "no run has ever completed".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    /// Every settled check passed
    Secure,
    /// Some settled checks passed, some did not
    PartiallySecure,
    /// No settled check passed
    Insecure,
    /// No settled checks to judge
    #[default]
    Unknown,
}

impl OverallStatus {
    /// Numeric score for UIs that meter the verdict (higher is better).
    pub fn score(&self) -> u32 {
        match self {
            OverallStatus::Secure => 100,
            OverallStatus::PartiallySecure => 70,
            OverallStatus::Unknown => 30,
            OverallStatus::Insecure => 0,
        }
    }
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OverallStatus::Secure => "secure",
            OverallStatus::PartiallySecure => "partially_secure",
            OverallStatus::Insecure => "insecure",
            OverallStatus::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Point-in-time view of an in-progress or completed run
///
/// The orchestrator is the only writer; consumers always receive a clone and
/// can never mutate the live state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Identity of the run this snapshot belongs to, once one has started
    pub run_id: Option<Uuid>,
    /// Whether a run is in flight
    pub is_checking: bool,
    /// The check currently in flight, None between runs or when done
    pub current_step: Option<CheckKind>,
    /// Completion percentage, 0..=100; reaches 100 only on a complete run
    pub progress: u8,
    /// Orchestrator-level fault, if the run ended early
    pub error: Option<String>,
    /// Settled results in execution order
    pub results: Vec<CheckResult>,
}

impl ProgressSnapshot {
    /// Number of settled checks that passed.
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }
}

/// Terminal summary of one run, serializable across a process boundary
///
/// This is the one message an embedder relays from the scanning context to a
/// foreground UI; it is pure data with no function references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Identity of the run
    pub run_id: Uuid,
    /// Aggregate verdict over the settled results
    pub status: OverallStatus,
    /// How the run ended
    pub state: RunState,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// When the run ended
    pub finished_at: DateTime<Utc>,
    /// Wall-clock duration of the run
    pub duration_ms: u64,
    /// Terminal progress snapshot, results included
    pub snapshot: ProgressSnapshot,
}
