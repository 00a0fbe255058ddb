//! Generation settings shared by the sweep engine, the analysis engine and the
//! LLM client.

use std::{fmt, ops::RangeInclusive, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Default system instruction used by the playground.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful AI assistant that generates product descriptions.";

/// Default user prompt used by the playground.
pub const DEFAULT_USER_PROMPT: &str = "Generate a product description for the latest iPhone model.";

/// Accepted sampling temperature.
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.0..=2.0;
/// Accepted completion budget, in tokens.
pub const MAX_TOKENS_RANGE: RangeInclusive<u32> = 1..=2000;
/// Accepted presence / frequency penalty.
pub const PENALTY_RANGE: RangeInclusive<f64> = -2.0..=2.0;

/// Chat models the playground can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChatModel {
    #[default]
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[serde(rename = "gpt-4")]
    Gpt4,
}

impl ChatModel {
    /// All supported models, in menu order.
    pub const ALL: [ChatModel; 2] = [ChatModel::Gpt35Turbo, ChatModel::Gpt4];

    /// Wire identifier sent to the provider.
    pub fn as_str(self) -> &'static str {
        match self {
            ChatModel::Gpt35Turbo => "gpt-3.5-turbo",
            ChatModel::Gpt4 => "gpt-4",
        }
    }
}

impl fmt::Display for ChatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChatModel::ALL
            .into_iter()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| s.to_string())
    }
}

/// One complete set of generation parameters.
///
/// Plain value object: no identity beyond structural equality. Every
/// modification (e.g. substituting a sweep axis value) works on a clone.
///
/// The JSON shape uses camelCase names, so the same payload is accepted by
/// the HTTP API and produced in sweep results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Target chat model.
    pub model: ChatModel,

    /// Sampling temperature, documented domain `0.0..=2.0`.
    pub temperature: f64,

    /// Completion budget, documented domain `1..=2000`.
    pub max_tokens: u32,

    /// Presence penalty, documented domain `-2.0..=2.0`.
    pub presence_penalty: f64,

    /// Frequency penalty, documented domain `-2.0..=2.0`.
    pub frequency_penalty: f64,

    /// System instruction sent before the user prompt.
    pub system_prompt: String,

    /// The user prompt.
    pub user_prompt: String,

    /// Optional stop sequence; an empty string means "no stop".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequence: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: ChatModel::default(),
            temperature: 0.7,
            max_tokens: 150,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            user_prompt: DEFAULT_USER_PROMPT.to_string(),
            stop_sequence: None,
        }
    }
}

impl GenerationConfig {
    /// Stop sequence to send upstream, if any.
    pub fn effective_stop(&self) -> Option<&str> {
        self.stop_sequence.as_deref().filter(|s| !s.is_empty())
    }

    /// Checks every numeric field against its documented domain.
    ///
    /// Returns the first offending field. Analysis never calls this: it
    /// classifies any value, in range or not.
    ///
    /// # Errors
    /// [`ConfigError::OutOfRange`] for a value outside its domain (NaN
    /// included).
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_f64("temperature", self.temperature, &TEMPERATURE_RANGE)?;
        if !MAX_TOKENS_RANGE.contains(&self.max_tokens) {
            return Err(ConfigError::OutOfRange {
                field: "maxTokens",
                value: f64::from(self.max_tokens),
                min: f64::from(*MAX_TOKENS_RANGE.start()),
                max: f64::from(*MAX_TOKENS_RANGE.end()),
            });
        }
        check_f64("presencePenalty", self.presence_penalty, &PENALTY_RANGE)?;
        check_f64("frequencyPenalty", self.frequency_penalty, &PENALTY_RANGE)?;
        Ok(())
    }
}

fn check_f64(
    field: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
) -> Result<(), ConfigError> {
    if value.is_finite() && range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}
