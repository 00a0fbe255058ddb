use playground_core::{GenerationConfig, SweepAxis};
use serde::Deserialize;

/// Request body for `POST /api/sweep`.
///
/// Both fields are optional: an empty object runs the reference grid
/// (temperature x max tokens x presence x frequency, 36 points) over the
/// default config.
#[derive(Debug, Default, Deserialize)]
pub struct SweepRequest {
    /// Config every point starts from.
    #[serde(default)]
    pub base: Option<GenerationConfig>,
    /// Axes in enumeration order, first axis varying slowest.
    #[serde(default)]
    pub axes: Option<Vec<SweepAxis>>,
}
