//! Run progress tracking with single-writer snapshots

use crate::core::types::{CheckKind, CheckResult, ProgressSnapshot};
use parking_lot::RwLock;
use tokio::sync::watch;
use uuid::Uuid;

/// Owner of the live [`ProgressSnapshot`]
///
/// Exactly one orchestrator mutates the tracker; consumers either poll
/// [`snapshot`](ProgressTracker::snapshot) for a point-in-time copy or hold a
/// [`subscribe`](ProgressTracker::subscribe) receiver for push updates. No
/// consumer can mutate the live state.
pub struct ProgressTracker {
    snapshot: RwLock<ProgressSnapshot>,
    tx: watch::Sender<ProgressSnapshot>,
}

impl ProgressTracker {
    /// A tracker in the initial all-zero state.
    pub fn new() -> Self {
        let initial = ProgressSnapshot::default();
        let (tx, _rx) = watch::channel(initial.clone());
        Self {
            snapshot: RwLock::new(initial),
            tx,
        }
    }

    /// Point-in-time copy of the live state.
    pub fn snapshot(&self) -> ProgressSnapshot {
        self.snapshot.read().clone()
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<ProgressSnapshot> {
        self.tx.subscribe()
    }

    /// Mark a run as started on `first_step`.
    pub fn begin(&self, run_id: Uuid, first_step: Option<CheckKind>) {
        let mut state = self.snapshot.write();
        *state = ProgressSnapshot {
            run_id: Some(run_id),
            is_checking: true,
            current_step: first_step,
            ..ProgressSnapshot::default()
        };
        self.publish(&state);
    }

    /// Record a settled check and move the cursor to `next_step`.
    pub fn advance(&self, result: CheckResult, total: usize, next_step: Option<CheckKind>) {
        let mut state = self.snapshot.write();
        state.results.push(result);
        state.current_step = next_step;
        state.progress = percent(state.results.len(), total);
        self.publish(&state);
    }

    /// Record an orchestrator-level fault and stop the run.
    ///
    /// Only for faults of the run itself (timeout, cancellation); an
    /// individual check's negative verdict is recorded through
    /// [`advance`](ProgressTracker::advance), never here.
    pub fn fail(&self, message: &str) {
        let mut state = self.snapshot.write();
        state.error = Some(message.to_string());
        state.is_checking = false;
        state.current_step = None;
        self.publish(&state);
    }

    /// Mark a run that exhausted every enabled check.
    pub fn finish(&self) {
        let mut state = self.snapshot.write();
        state.is_checking = false;
        state.current_step = None;
        state.progress = 100;
        self.publish(&state);
    }

    /// Return to the initial all-zero state.
    pub fn reset(&self) {
        let mut state = self.snapshot.write();
        *state = ProgressSnapshot::default();
        self.publish(&state);
    }

    fn publish(&self, state: &ProgressSnapshot) {
        // send_replace stores the value even with no live receivers, so a
        // late subscriber starts from the current state.
        self.tx.send_replace(state.clone());
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    (((done as f64 / total as f64) * 100.0).round()).min(100.0) as u8
}
