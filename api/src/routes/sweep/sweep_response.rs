use playground_core::{AnalysisReport, PointFailure, SweepOutcome, SweepResult};
use serde::Serialize;

/// One successful point with its analysis attached.
#[derive(Debug, Serialize)]
pub struct SweepResultEntry {
    #[serde(flatten)]
    pub result: SweepResult,
    pub analysis: AnalysisReport,
}

/// Response body returned after a sweep finishes or is cancelled.
#[derive(Debug, Serialize)]
pub struct SweepResponse {
    pub total: usize,
    pub completed: usize,
    pub cancelled: bool,
    pub results: Vec<SweepResultEntry>,
    pub failures: Vec<PointFailure>,
}

impl From<SweepOutcome> for SweepResponse {
    fn from(outcome: SweepOutcome) -> Self {
        let results = outcome
            .results
            .into_iter()
            .map(|result| SweepResultEntry {
                analysis: result.analysis(),
                result,
            })
            .collect();

        Self {
            total: outcome.total,
            completed: outcome.completed,
            cancelled: outcome.cancelled,
            results,
            failures: outcome.failures,
        }
    }
}
