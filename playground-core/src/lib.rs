//! Core of the LLM parameter playground.
//!
//! Two independent pieces live here:
//!
//! 1) **Sweep engine** ([`sweep`])
//!    - Expands a base [`GenerationConfig`] over a list of [`SweepAxis`]
//!    - Enumerates the Cartesian product in a fixed order (first axis slowest)
//!    - Calls an injected single-generation function once per point, strictly
//!      sequentially, isolating per-point failures
//!    - Reports monotonic progress and honors cooperative cancellation
//!
//! 2) **Analysis engine** ([`analysis`])
//!    - Pure functions mapping temperature / token budget / penalties to a
//!      fixed descriptive text through ordered band tables
//!    - [`AnalysisReport`] composes them in display order
//!
//! Nothing in this crate performs I/O. The generation call is supplied by the
//! caller (see `ai-llm-service` for the OpenAI-backed implementation).

pub mod analysis;
pub mod errors;
pub mod model;
pub mod sweep;

pub use analysis::{
    AnalysisReport, AnalysisSection, Dimension, analyze_penalties, analyze_temperature,
    analyze_tokens,
};
pub use errors::{ConfigError, SweepError};
pub use model::{ChatModel, GenerationConfig};
pub use sweep::{
    AxisValue, CancelFlag, NoopProgress, PointFailure, SweepAxis, SweepOutcome, SweepParam,
    SweepPlan, SweepPoint, SweepProgress, SweepResult, TracingProgress, reference_axes,
    run_sweep,
};
