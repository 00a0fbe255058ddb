use serde::Serialize;

use super::bands::{Band, BandTable};

/// Penalty bands, shared by presence and frequency penalties.
///
/// Negative penalties sit in `Moderate`: the chain is `== 0`, then `< 1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyBand {
    None,
    Moderate,
    High,
    VeryHigh,
}

static PRESENCE_BANDS: BandTable<f64, PenaltyBand> = BandTable {
    bands: &[
        Band {
            kind: PenaltyBand::None,
            matches: |p| p == 0.0,
            describe: |_| {
                "With no presence penalty (0.0), the model may focus on prominent aspects \
                 repeatedly."
                    .to_string()
            },
        },
        Band {
            kind: PenaltyBand::Moderate,
            matches: |p| p < 1.0,
            describe: |p| {
                format!(
                    "With a moderate presence penalty ({p}), the model will somewhat avoid \
                     repeating the same topics."
                )
            },
        },
        Band {
            kind: PenaltyBand::High,
            matches: |p| p <= 2.0,
            describe: |p| {
                format!(
                    "With a high presence penalty ({p}), the model actively explores \
                     different aspects and characteristics."
                )
            },
        },
    ],
    otherwise: Band {
        kind: PenaltyBand::VeryHigh,
        matches: |_| true,
        describe: |p| {
            format!(
                "With a very high presence penalty ({p}), the model strongly avoids topic \
                 repetition, potentially at the cost of coherence."
            )
        },
    },
};

static FREQUENCY_BANDS: BandTable<f64, PenaltyBand> = BandTable {
    bands: &[
        Band {
            kind: PenaltyBand::None,
            matches: |f| f == 0.0,
            describe: |_| {
                "With no frequency penalty (0.0), word choice may be more repetitive but \
                 potentially more consistent."
                    .to_string()
            },
        },
        Band {
            kind: PenaltyBand::Moderate,
            matches: |f| f < 1.0,
            describe: |f| {
                format!(
                    "With a moderate frequency penalty ({f}), the model will somewhat vary \
                     its word choices."
                )
            },
        },
        Band {
            kind: PenaltyBand::High,
            matches: |f| f <= 2.0,
            describe: |f| {
                format!(
                    "With a high frequency penalty ({f}), expect diverse vocabulary and \
                     varied expression styles."
                )
            },
        },
    ],
    otherwise: Band {
        kind: PenaltyBand::VeryHigh,
        matches: |_| true,
        describe: |f| {
            format!(
                "With a very high frequency penalty ({f}), the model strongly avoids word \
                 repetition, potentially using unusual synonyms."
            )
        },
    },
};

/// Band of a penalty value (same thresholds for both penalty kinds).
pub fn penalty_band(value: f64) -> PenaltyBand {
    PRESENCE_BANDS.kind(value)
}

/// Topic-repetition reading of a presence penalty.
pub fn analyze_presence_penalty(presence: f64) -> String {
    PRESENCE_BANDS.describe(presence)
}

/// Vocabulary-repetition reading of a frequency penalty.
pub fn analyze_frequency_penalty(frequency: f64) -> String {
    FREQUENCY_BANDS.describe(frequency)
}

/// Classifies both penalties independently; presence first, then frequency.
pub fn analyze_penalties(presence: f64, frequency: f64) -> (String, String) {
    (
        analyze_presence_penalty(presence),
        analyze_frequency_penalty(frequency),
    )
}
