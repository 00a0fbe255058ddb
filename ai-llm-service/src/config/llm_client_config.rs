/// Connection settings for the chat-completions provider.
///
/// Generation parameters (model, temperature, penalties, prompts) are not
/// part of this struct: they travel per call in a
/// [`playground_core::GenerationConfig`], so one client serves a whole sweep.
///
/// # Examples
///
/// ```
/// use ai_llm_service::LlmClientConfig;
///
/// let cfg = LlmClientConfig {
///     endpoint: "https://api.openai.com".to_string(),
///     api_key: Some("sk-...".to_string()),
///     timeout_secs: Some(30),
/// };
/// assert_eq!(cfg.timeout_secs, Some(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmClientConfig {
    /// API base URL, without the `/v1/...` path.
    pub endpoint: String,

    /// Bearer token. Required by [`crate::OpenAiService::new`].
    pub api_key: Option<String>,

    /// Per-request timeout in seconds (60 when unset).
    pub timeout_secs: Option<u64>,
}
