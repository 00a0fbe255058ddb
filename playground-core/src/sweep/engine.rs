//! Sequential sweep runner with per-point failure isolation.

use std::{fmt::Display, future::Future, time::Instant};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    analysis::AnalysisReport,
    model::GenerationConfig,
    sweep::{
        plan::{SweepPlan, SweepPoint},
        progress::{CancelFlag, SweepProgress},
    },
};

/// A point whose generation succeeded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    #[serde(flatten)]
    pub point: SweepPoint,
    pub response: String,
}

impl SweepResult {
    /// Explains what this point's parameters are expected to do.
    pub fn analysis(&self) -> AnalysisReport {
        AnalysisReport::for_config(&self.point.config)
    }
}

/// A point whose generation failed; kept as a diagnostic, never raised.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointFailure {
    #[serde(flatten)]
    pub point: SweepPoint,
    pub error: String,
}

/// Everything a sweep produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SweepOutcome {
    /// Points in the grid.
    pub total: usize,
    /// Points attempted (successes + failures).
    pub completed: usize,
    /// Whether the sweep stopped early on a [`CancelFlag`].
    pub cancelled: bool,
    /// Successful points, in enumeration order.
    pub results: Vec<SweepResult>,
    /// Failed points, in enumeration order.
    pub failures: Vec<PointFailure>,
}

impl SweepOutcome {
    /// True when every point was attempted.
    pub fn is_complete(&self) -> bool {
        !self.cancelled && self.completed == self.total
    }
}

/// Runs one `generate` call per point of `plan`, strictly one at a time.
///
/// - Points are visited in [`SweepPlan::points`] order; each call is awaited
///   to completion before the next is dispatched.
/// - A failing point is logged, recorded in [`SweepOutcome::failures`] and
///   skipped. It is attempted exactly once and never aborts the sweep.
/// - `progress.point_completed` fires after every attempted point with
///   `completed` counting `1..=total`.
/// - `cancel` is checked before each point; in-flight calls always finish.
///
/// A sweep in which every point fails is a normal outcome, not an error.
#[instrument(skip_all, fields(total = plan.total()))]
pub async fn run_sweep<F, Fut, E, P>(
    plan: &SweepPlan,
    mut generate: F,
    progress: &mut P,
    cancel: &CancelFlag,
) -> SweepOutcome
where
    F: FnMut(GenerationConfig) -> Fut,
    Fut: Future<Output = Result<String, E>>,
    E: Display,
    P: SweepProgress + ?Sized,
{
    let total = plan.total();
    let started = Instant::now();
    let mut outcome = SweepOutcome {
        total,
        results: Vec::with_capacity(total.min(1024)),
        ..SweepOutcome::default()
    };

    debug!(params = ?plan.params(), "sweep plan ready");
    progress.started(total);

    for point in plan.points() {
        if cancel.is_cancelled() {
            info!(
                completed = outcome.completed,
                total, "sweep cancelled before point {}", point.index
            );
            outcome.cancelled = true;
            break;
        }

        let t0 = Instant::now();
        match generate(point.config.clone()).await {
            Ok(response) => {
                debug!(
                    index = point.index,
                    response_len = response.len(),
                    latency_ms = t0.elapsed().as_millis(),
                    "sweep point ok"
                );
                outcome.results.push(SweepResult { point, response });
            }
            Err(e) => {
                let cfg = &point.config;
                warn!(
                    index = point.index,
                    model = %cfg.model,
                    temperature = cfg.temperature,
                    max_tokens = cfg.max_tokens,
                    presence_penalty = cfg.presence_penalty,
                    frequency_penalty = cfg.frequency_penalty,
                    latency_ms = t0.elapsed().as_millis(),
                    error = %e,
                    "sweep point failed; continuing"
                );
                outcome.failures.push(PointFailure {
                    point,
                    error: e.to_string(),
                });
            }
        }

        outcome.completed += 1;
        progress.point_completed(outcome.completed, total);
    }

    info!(
        succeeded = outcome.results.len(),
        failed = outcome.failures.len(),
        cancelled = outcome.cancelled,
        elapsed_ms = started.elapsed().as_millis(),
        "sweep done"
    );
    progress.finished(&outcome);
    outcome
}
