use serde::Deserialize;

/// Request body for `POST /api/analyze`.
///
/// Values are not range-checked: every number gets an explanation, including
/// negative or fractional token counts typed into a free-form field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub temperature: f64,
    pub max_tokens: f64,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
}
