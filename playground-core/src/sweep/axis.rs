//! Sweep axes: a parameter name plus its ordered candidate values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    errors::SweepError,
    model::{ChatModel, GenerationConfig},
};

/// A generation parameter that can be swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SweepParam {
    Temperature,
    MaxTokens,
    PresencePenalty,
    FrequencyPenalty,
    Model,
    StopSequence,
}

impl SweepParam {
    /// Field name as it appears in the JSON config.
    pub fn as_str(self) -> &'static str {
        match self {
            SweepParam::Temperature => "temperature",
            SweepParam::MaxTokens => "maxTokens",
            SweepParam::PresencePenalty => "presencePenalty",
            SweepParam::FrequencyPenalty => "frequencyPenalty",
            SweepParam::Model => "model",
            SweepParam::StopSequence => "stopSequence",
        }
    }

    /// Converts a raw candidate into a typed value for this parameter.
    pub(crate) fn resolve(self, index: usize, raw: &AxisValue) -> Result<ParamValue, SweepError> {
        match (self, raw) {
            (SweepParam::Temperature, AxisValue::Number(v)) => {
                finite(self, index, *v).map(ParamValue::Temperature)
            }
            (SweepParam::PresencePenalty, AxisValue::Number(v)) => {
                finite(self, index, *v).map(ParamValue::PresencePenalty)
            }
            (SweepParam::FrequencyPenalty, AxisValue::Number(v)) => {
                finite(self, index, *v).map(ParamValue::FrequencyPenalty)
            }
            (SweepParam::MaxTokens, AxisValue::Number(v)) => {
                let v = *v;
                if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= f64::from(u32::MAX) {
                    Ok(ParamValue::MaxTokens(v as u32))
                } else {
                    Err(SweepError::InvalidTokenCount { index, value: v })
                }
            }
            (SweepParam::Model, AxisValue::Text(s)) => s
                .parse::<ChatModel>()
                .map(ParamValue::Model)
                .map_err(|name| SweepError::UnknownModel { index, name }),
            (SweepParam::StopSequence, AxisValue::Text(s)) => Ok(ParamValue::StopSequence(
                (!s.is_empty()).then(|| s.clone()),
            )),
            (param, _) => Err(SweepError::TypeMismatch {
                param,
                index,
                expected: param.expected_kind(),
            }),
        }
    }

    fn expected_kind(self) -> &'static str {
        match self {
            SweepParam::Temperature
            | SweepParam::PresencePenalty
            | SweepParam::FrequencyPenalty => "a number",
            SweepParam::MaxTokens => "an integer token count",
            SweepParam::Model => "a model name",
            SweepParam::StopSequence => "a string",
        }
    }
}

impl fmt::Display for SweepParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn finite(param: SweepParam, index: usize, v: f64) -> Result<f64, SweepError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SweepError::NonFinite { param, index })
    }
}

/// Raw candidate value, as written in JSON: a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    Number(f64),
    Text(String),
}

impl From<f64> for AxisValue {
    fn from(v: f64) -> Self {
        AxisValue::Number(v)
    }
}

impl From<u32> for AxisValue {
    fn from(v: u32) -> Self {
        AxisValue::Number(f64::from(v))
    }
}

impl From<ChatModel> for AxisValue {
    fn from(m: ChatModel) -> Self {
        AxisValue::Text(m.as_str().to_string())
    }
}

impl From<&str> for AxisValue {
    fn from(s: &str) -> Self {
        AxisValue::Text(s.to_string())
    }
}

impl From<String> for AxisValue {
    fn from(s: String) -> Self {
        AxisValue::Text(s)
    }
}

/// A parameter together with its ordered candidate values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepAxis {
    pub param: SweepParam,
    pub values: Vec<AxisValue>,
}

impl SweepAxis {
    /// Builds an axis from any values convertible to [`AxisValue`].
    pub fn new<I, V>(param: SweepParam, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<AxisValue>,
    {
        Self {
            param,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn temperature(values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(SweepParam::Temperature, values)
    }

    pub fn max_tokens(values: impl IntoIterator<Item = u32>) -> Self {
        Self::new(SweepParam::MaxTokens, values)
    }

    pub fn presence_penalty(values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(SweepParam::PresencePenalty, values)
    }

    pub fn frequency_penalty(values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(SweepParam::FrequencyPenalty, values)
    }

    pub fn model(values: impl IntoIterator<Item = ChatModel>) -> Self {
        Self::new(SweepParam::Model, values)
    }

    pub fn stop_sequence<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(
            SweepParam::StopSequence,
            values.into_iter().map(|s| AxisValue::Text(s.into())),
        )
    }

    /// Number of candidates on this axis.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The playground's default grid: 3 × 3 × 2 × 2 = 36 points.
///
/// Order: temperature, maxTokens, presencePenalty, frequencyPenalty.
pub fn reference_axes() -> Vec<SweepAxis> {
    vec![
        SweepAxis::temperature([0.0, 0.7, 1.2]),
        SweepAxis::max_tokens([50, 150, 300]),
        SweepAxis::presence_penalty([0.0, 1.5]),
        SweepAxis::frequency_penalty([0.0, 1.5]),
    ]
}

/// A candidate already checked against its parameter.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ParamValue {
    Temperature(f64),
    MaxTokens(u32),
    PresencePenalty(f64),
    FrequencyPenalty(f64),
    Model(ChatModel),
    StopSequence(Option<String>),
}

impl ParamValue {
    /// Substitutes this value into `cfg`, leaving every other field untouched.
    pub(crate) fn apply(&self, cfg: &mut GenerationConfig) {
        match self {
            ParamValue::Temperature(v) => cfg.temperature = *v,
            ParamValue::MaxTokens(v) => cfg.max_tokens = *v,
            ParamValue::PresencePenalty(v) => cfg.presence_penalty = *v,
            ParamValue::FrequencyPenalty(v) => cfg.frequency_penalty = *v,
            ParamValue::Model(m) => cfg.model = *m,
            ParamValue::StopSequence(s) => cfg.stop_sequence = s.clone(),
        }
    }
}
