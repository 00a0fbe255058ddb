//! Composed analysis of one generation config.

use std::fmt;

use serde::Serialize;

use super::{
    penalties::{analyze_frequency_penalty, analyze_presence_penalty},
    temperature::analyze_temperature,
    tokens::analyze_tokens,
};
use crate::model::GenerationConfig;

/// Analyzed parameter, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Temperature,
    Tokens,
    PresencePenalty,
    FrequencyPenalty,
}

impl Dimension {
    /// Heading shown before the text.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Temperature => "Temperature Effect",
            Dimension::Tokens => "Token Impact",
            Dimension::PresencePenalty | Dimension::FrequencyPenalty => "Penalty Effect",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSection {
    pub dimension: Dimension,
    pub label: &'static str,
    pub text: String,
}

/// Four labeled explanations, always ordered temperature, tokens, presence,
/// frequency. Building one never fails and never touches its input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    sections: Vec<AnalysisSection>,
}

impl AnalysisReport {
    pub fn new(temperature: f64, max_tokens: f64, presence: f64, frequency: f64) -> Self {
        let sections = [
            (Dimension::Temperature, analyze_temperature(temperature)),
            (Dimension::Tokens, analyze_tokens(max_tokens)),
            (Dimension::PresencePenalty, analyze_presence_penalty(presence)),
            (Dimension::FrequencyPenalty, analyze_frequency_penalty(frequency)),
        ]
        .into_iter()
        .map(|(dimension, text)| AnalysisSection {
            dimension,
            label: dimension.label(),
            text,
        })
        .collect();

        Self { sections }
    }

    pub fn for_config(cfg: &GenerationConfig) -> Self {
        Self::new(
            cfg.temperature,
            f64::from(cfg.max_tokens),
            cfg.presence_penalty,
            cfg.frequency_penalty,
        )
    }

    pub fn sections(&self) -> &[AnalysisSection] {
        &self.sections
    }

    /// Text for one dimension.
    pub fn get(&self, dimension: Dimension) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.dimension == dimension)
            .map(|s| s.text.as_str())
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Response Analysis:")?;
        for s in &self.sections {
            writeln!(f, "{}: {}", s.label, s.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze_penalties, analyze_temperature, analyze_tokens};

    #[test]
    fn display_order_is_fixed() {
        let report = AnalysisReport::new(1.2, 300.0, 1.5, 0.0);
        let dims: Vec<_> = report.sections().iter().map(|s| s.dimension).collect();
        assert_eq!(
            dims,
            [
                Dimension::Temperature,
                Dimension::Tokens,
                Dimension::PresencePenalty,
                Dimension::FrequencyPenalty
            ]
        );
        let labels: Vec<_> = report.sections().iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            ["Temperature Effect", "Token Impact", "Penalty Effect", "Penalty Effect"]
        );
    }

    #[test]
    fn sections_match_individual_functions() {
        let cfg = GenerationConfig {
            temperature: 0.0,
            max_tokens: 50,
            presence_penalty: 1.5,
            frequency_penalty: 1.5,
            ..GenerationConfig::default()
        };
        let before = cfg.clone();
        let report = AnalysisReport::for_config(&cfg);
        assert_eq!(cfg, before);

        let (p, f) = analyze_penalties(1.5, 1.5);
        assert_eq!(
            report.get(Dimension::Temperature),
            Some(analyze_temperature(0.0).as_str())
        );
        assert_eq!(report.get(Dimension::Tokens), Some(analyze_tokens(50.0).as_str()));
        assert_eq!(report.get(Dimension::PresencePenalty), Some(p.as_str()));
        assert_eq!(report.get(Dimension::FrequencyPenalty), Some(f.as_str()));
    }

    #[test]
    fn renders_as_text_block() {
        let text = AnalysisReport::new(0.7, 150.0, 0.0, 0.0).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Response Analysis:");
        assert!(lines[1].starts_with("Temperature Effect: At temperature 0.7,"));
        assert!(lines[2].starts_with("Token Impact: 150 tokens allows"));
        assert!(lines[3].starts_with("Penalty Effect: With no presence penalty"));
        assert!(lines[4].starts_with("Penalty Effect: With no frequency penalty"));
    }

    #[test]
    fn json_shape() {
        let v = serde_json::to_value(AnalysisReport::new(0.7, 150.0, 0.0, 0.0)).unwrap();
        assert_eq!(v["sections"][1]["dimension"], "tokens");
        assert_eq!(v["sections"][1]["label"], "Token Impact");
        assert_eq!(v["sections"].as_array().map(Vec::len), Some(4));
    }
}
