//! Error types for `playground-core`.
//!
//! Two small enums, one per concern:
//! - [`SweepError`] — a structurally invalid sweep, rejected before any point
//!   is dispatched.
//! - [`ConfigError`] — a generation config outside its documented domain.
//!
//! Per-point generation failures are *not* errors of this crate: the sweep
//! engine records them as [`crate::sweep::PointFailure`] and keeps going.

use thiserror::Error;

use crate::sweep::SweepParam;

/* ------------------------------------------------------------------------- */
/* Sweep preconditions                                                       */
/* ------------------------------------------------------------------------- */

/// Invalid sweep definition.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    /// The same parameter was declared on more than one axis.
    #[error("parameter `{0}` is swept by more than one axis")]
    DuplicateAxis(SweepParam),

    /// A value's type does not fit the parameter (e.g. text for temperature).
    #[error("axis `{param}` value #{index}: expected {expected}")]
    TypeMismatch {
        param: SweepParam,
        index: usize,
        expected: &'static str,
    },

    /// NaN or infinity for a real-valued parameter.
    #[error("axis `{param}` value #{index} is not a finite number")]
    NonFinite { param: SweepParam, index: usize },

    /// Token count that is negative, fractional, or does not fit in `u32`.
    #[error("axis `maxTokens` value #{index} ({value}) is not a valid token count")]
    InvalidTokenCount { index: usize, value: f64 },

    /// Model name that is not supported.
    #[error("axis `model` value #{index}: unknown model `{name}`")]
    UnknownModel { index: usize, name: String },

    /// The Cartesian product does not fit in `usize`.
    #[error("sweep grid is too large to enumerate")]
    TooManyPoints,
}

/* ------------------------------------------------------------------------- */
/* Config domain                                                             */
/* ------------------------------------------------------------------------- */

/// Generation config validation error.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A numeric field was outside its inclusive domain.
    #[error("{field} = {value} is out of range (expected {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
