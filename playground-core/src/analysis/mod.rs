//! Deterministic explanations of generation parameters.
//!
//! Every function here is pure and total: any input, in or out of the
//! documented domain, maps to exactly one band and one fixed text.

pub mod bands;
pub mod penalties;
pub mod report;
pub mod temperature;
pub mod tokens;

pub use penalties::{
    PenaltyBand, analyze_frequency_penalty, analyze_penalties, analyze_presence_penalty,
    penalty_band,
};
pub use report::{AnalysisReport, AnalysisSection, Dimension};
pub use temperature::{TemperatureBand, analyze_temperature, temperature_band};
pub use tokens::{TokenBand, analyze_tokens, token_band};
