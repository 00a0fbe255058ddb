use serde::Serialize;

/// Body returned by `POST /api/generate`.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// Generated text, or `"No response generated"` when the model said nothing.
    pub response: String,
}
