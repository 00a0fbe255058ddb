use serde::Serialize;

use super::bands::{Band, BandTable};

/// Completion budget bands. Each listed upper bound is inclusive.
///
/// Classified over `f64` so free-form input (negative, fractional) still
/// lands in a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenBand {
    /// Under 50.
    Concise,
    /// 50..=100.
    KeyFeatures,
    /// 101..=200.
    Balanced,
    /// 201..=500.
    Comprehensive,
    /// Over 500.
    VeryDetailed,
}

static TOKEN_BANDS: BandTable<f64, TokenBand> = BandTable {
    bands: &[
        Band {
            kind: TokenBand::Concise,
            matches: |n| n < 50.0,
            describe: |n| {
                format!(
                    "With only {n} tokens, the response will be very concise, possibly \
                     incomplete for complex descriptions."
                )
            },
        },
        Band {
            kind: TokenBand::KeyFeatures,
            matches: |n| n <= 100.0,
            describe: |n| {
                format!(
                    "With {n} tokens, the response focuses on key features with minimal detail."
                )
            },
        },
        Band {
            kind: TokenBand::Balanced,
            matches: |n| n <= 200.0,
            describe: |n| {
                format!("{n} tokens allows for a balanced description with moderate detail.")
            },
        },
        Band {
            kind: TokenBand::Comprehensive,
            matches: |n| n <= 500.0,
            describe: |n| {
                format!(
                    "With {n} tokens, the response can be quite comprehensive, including \
                     detailed features and context."
                )
            },
        },
    ],
    otherwise: Band {
        kind: TokenBand::VeryDetailed,
        matches: |_| true,
        describe: |n| {
            format!(
                "With {n} tokens, expect a very detailed response that could cover extensive \
                 product details, comparisons, and use cases."
            )
        },
    },
};

pub fn token_band(max_tokens: f64) -> TokenBand {
    TOKEN_BANDS.kind(max_tokens)
}

/// Describes how a completion budget shapes the response.
///
/// Total over `f64`: anything below 50 (negatives included) reads as concise,
/// anything past 500 (and NaN) as very detailed.
pub fn analyze_tokens(max_tokens: f64) -> String {
    TOKEN_BANDS.describe(max_tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_bounds_are_inclusive() {
        assert_eq!(token_band(49.0), TokenBand::Concise);
        assert_eq!(token_band(50.0), TokenBand::KeyFeatures);
        assert_eq!(token_band(100.0), TokenBand::KeyFeatures);
        assert_eq!(token_band(101.0), TokenBand::Balanced);
        assert_eq!(token_band(200.0), TokenBand::Balanced);
        assert_eq!(token_band(201.0), TokenBand::Comprehensive);
        assert_eq!(token_band(500.0), TokenBand::Comprehensive);
        assert_eq!(token_band(501.0), TokenBand::VeryDetailed);
    }

    #[test]
    fn texts() {
        assert_eq!(
            analyze_tokens(20.0),
            "With only 20 tokens, the response will be very concise, possibly incomplete \
             for complex descriptions."
        );
        assert_eq!(
            analyze_tokens(100.0),
            "With 100 tokens, the response focuses on key features with minimal detail."
        );
        assert_eq!(
            analyze_tokens(150.0),
            "150 tokens allows for a balanced description with moderate detail."
        );
        assert_eq!(
            analyze_tokens(500.0),
            "With 500 tokens, the response can be quite comprehensive, including detailed \
             features and context."
        );
        assert_eq!(
            analyze_tokens(501.0),
            "With 501 tokens, expect a very detailed response that could cover extensive \
             product details, comparisons, and use cases."
        );
    }

    #[test]
    fn outside_documented_domain() {
        assert_eq!(token_band(0.0), TokenBand::Concise);
        assert_eq!(token_band(-5.0), TokenBand::Concise);
        assert_eq!(token_band(f64::from(u32::MAX)), TokenBand::VeryDetailed);
        assert_eq!(token_band(f64::NAN), TokenBand::VeryDetailed);
        assert_eq!(
            analyze_tokens(-5.0),
            "With only -5 tokens, the response will be very concise, possibly incomplete \
             for complex descriptions."
        );
    }

    #[test]
    fn fractional_counts_fall_between_integer_edges() {
        assert_eq!(token_band(49.5), TokenBand::Concise);
        assert_eq!(token_band(100.5), TokenBand::Balanced);
        assert_eq!(token_band(500.5), TokenBand::VeryDetailed);
        assert_eq!(
            analyze_tokens(150.5),
            "150.5 tokens allows for a balanced description with moderate detail."
        );
    }
}
