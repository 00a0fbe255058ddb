use serde::Serialize;

use super::bands::{Band, BandTable};

/// Temperature bands, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    /// Exactly `0`.
    Deterministic,
    /// Below `0.5`.
    Conservative,
    /// `0.5..=0.8`.
    Balanced,
    /// Above `0.8`, up to `1.2`.
    Creative,
    /// Above `1.2`.
    Unpredictable,
}

// The zero band is a fixed sentence; every other band embeds the value.
static TEMPERATURE_BANDS: BandTable<f64, TemperatureBand> = BandTable {
    bands: &[
        Band {
            kind: TemperatureBand::Deterministic,
            matches: |t| t == 0.0,
            describe: |_| {
                "At temperature 0.0, the response is highly deterministic and factual. \
                 You'll notice more standard product specifications and conventional \
                 descriptions, focusing on verified features and specifications."
                    .to_string()
            },
        },
        Band {
            kind: TemperatureBand::Conservative,
            matches: |t| t < 0.5,
            describe: |t| {
                format!(
                    "At temperature {t}, the response remains quite conservative and \
                     factual, with minimal creative variation."
                )
            },
        },
        Band {
            kind: TemperatureBand::Balanced,
            matches: |t| t <= 0.8,
            describe: |t| {
                format!(
                    "At temperature {t}, there's a good balance between creativity and \
                     reliability. The description maintains factual accuracy while \
                     incorporating some creative elements."
                )
            },
        },
        Band {
            kind: TemperatureBand::Creative,
            matches: |t| t <= 1.2,
            describe: |t| {
                format!(
                    "At temperature {t}, the response shows increased creativity and \
                     variability. Expect more unique descriptions and diverse language."
                )
            },
        },
    ],
    otherwise: Band {
        kind: TemperatureBand::Unpredictable,
        matches: |_| true,
        describe: |t| {
            format!(
                "At this high temperature ({t}), the response will be highly creative and \
                 unpredictable, potentially with very diverse and unexpected descriptions."
            )
        },
    },
};

/// Band a temperature falls into.
pub fn temperature_band(temperature: f64) -> TemperatureBand {
    TEMPERATURE_BANDS.kind(temperature)
}

/// Describes the expected effect of a sampling temperature.
///
/// Total over `f64`: negative values read as conservative, anything above the
/// documented `2.0` (and NaN) as unpredictable.
pub fn analyze_temperature(temperature: f64) -> String {
    TEMPERATURE_BANDS.describe(temperature)
}
