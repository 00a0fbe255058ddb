//! Parameter sweep engine.
//!
//! - [`axis`]     — parameters, candidate values, the reference grid
//! - [`plan`]     — precondition checks and deterministic enumeration
//! - [`engine`]   — sequential runner with failure isolation
//! - [`progress`] — progress sinks and the cancellation flag

pub mod axis;
pub mod engine;
pub mod plan;
pub mod progress;

pub use axis::{AxisValue, SweepAxis, SweepParam, reference_axes};
pub use engine::{PointFailure, SweepOutcome, SweepResult, run_sweep};
pub use plan::{SweepPlan, SweepPoint, SweepPoints};
pub use progress::{CancelFlag, NoopProgress, SweepProgress, TracingProgress};
