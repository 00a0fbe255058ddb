//! Progress reporting and cooperative cancellation for sweeps.
//!
//! Use `NoopProgress` when nobody is watching, `TracingProgress` for servers,
//! or pass any `FnMut(completed, total)` closure.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tracing::info;

use crate::sweep::engine::SweepOutcome;

/// Receives sweep progress, in point order, from the sweep's own task.
pub trait SweepProgress {
    /// Called once before the first point with the precomputed total.
    fn started(&mut self, _total: usize) {}

    /// Called after every attempted point, success or failure.
    ///
    /// `completed` goes `1, 2, …` with no gaps.
    fn point_completed(&mut self, completed: usize, total: usize);

    /// Called once when the sweep ends (finished or cancelled).
    fn finished(&mut self, _outcome: &SweepOutcome) {}
}

impl<F> SweepProgress for F
where
    F: FnMut(usize, usize),
{
    fn point_completed(&mut self, completed: usize, total: usize) {
        self(completed, total)
    }
}

/// Discards all progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl SweepProgress for NoopProgress {
    fn point_completed(&mut self, _completed: usize, _total: usize) {}
}

/// Logs progress as `INFO` events tagged with a sweep label.
#[derive(Debug, Clone)]
pub struct TracingProgress {
    label: String,
}

impl TracingProgress {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl SweepProgress for TracingProgress {
    fn started(&mut self, total: usize) {
        info!(sweep = %self.label, total, "sweep started");
    }

    fn point_completed(&mut self, completed: usize, total: usize) {
        info!(
            sweep = %self.label,
            completed,
            total,
            "{completed}/{total} combinations completed"
        );
    }

    fn finished(&mut self, outcome: &SweepOutcome) {
        info!(
            sweep = %self.label,
            total = outcome.total,
            succeeded = outcome.results.len(),
            failed = outcome.failures.len(),
            cancelled = outcome.cancelled,
            "sweep finished"
        );
    }
}

/// Shared stop signal, checked by the engine between points.
///
/// Setting it never interrupts a request already in flight.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the sweep to stop before its next point.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
