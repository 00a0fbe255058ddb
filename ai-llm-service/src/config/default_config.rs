//! Client config loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY` or `VITE_OPENAI_API_KEY` = bearer token (mandatory)
//! - `OPENAI_BASE_URL` = API base (optional, default `https://api.openai.com`)
//! - `LLM_TIMEOUT_SECS` = per-request timeout (optional u64, default 60)

use crate::{
    config::llm_client_config::LlmClientConfig,
    error_handler::{AiLlmError, ConfigError, Result, must_var, opt_u64, validate_http_endpoint},
};

/// Public OpenAI API base.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Request timeout used when `LLM_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Builds the OpenAI client config from the process environment.
///
/// # Errors
/// - [`ConfigError::MissingVar`] if neither API key variable is set
/// - [`ConfigError::InvalidFormat`] if `OPENAI_BASE_URL` is not http/https
/// - [`ConfigError::InvalidNumber`] if `LLM_TIMEOUT_SECS` is not a `u64`
pub fn config_openai_from_env() -> Result<LlmClientConfig> {
    config_openai_with(|name| std::env::var(name).ok())
}

/// Same as [`config_openai_from_env`], reading variables through `lookup`.
pub fn config_openai_with<F>(lookup: F) -> Result<LlmClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = openai_api_key(&lookup)?;

    let endpoint = lookup("OPENAI_BASE_URL")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());
    validate_http_endpoint("OPENAI_BASE_URL", &endpoint)?;

    let timeout_secs = opt_u64(&lookup, "LLM_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(LlmClientConfig {
        endpoint,
        api_key: Some(api_key),
        timeout_secs: Some(timeout_secs),
    })
}

/// `OPENAI_API_KEY` first, then the browser-build name `VITE_OPENAI_API_KEY`.
fn openai_api_key<F>(lookup: &F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    must_var(lookup, "OPENAI_API_KEY")
        .or_else(|_| must_var(lookup, "VITE_OPENAI_API_KEY"))
        .map(|v| v.trim().to_string())
        .map_err(|_| {
            AiLlmError::Config(ConfigError::MissingVar(
                "OPENAI_API_KEY or VITE_OPENAI_API_KEY",
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |k| {
            pairs
                .iter()
                .find(|(name, _)| *name == k)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_apply() {
        let cfg = config_openai_with(lookup(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(cfg.endpoint, DEFAULT_OPENAI_BASE_URL);
        assert_eq!(cfg.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cfg.timeout_secs, Some(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn vite_key_is_a_fallback() {
        let cfg = config_openai_with(lookup(&[
            ("OPENAI_API_KEY", " "),
            ("VITE_OPENAI_API_KEY", "sk-vite"),
        ]))
        .unwrap();
        assert_eq!(cfg.api_key.as_deref(), Some("sk-vite"));

        let cfg = config_openai_with(lookup(&[
            ("OPENAI_API_KEY", "sk-main"),
            ("VITE_OPENAI_API_KEY", "sk-vite"),
        ]))
        .unwrap();
        assert_eq!(cfg.api_key.as_deref(), Some("sk-main"));

        let cfg = config_openai_with(lookup(&[("VITE_OPENAI_API_KEY", "  sk-pad \n")])).unwrap();
        assert_eq!(cfg.api_key.as_deref(), Some("sk-pad"));
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = config_openai_with(lookup(&[])).unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Config(ConfigError::MissingVar("OPENAI_API_KEY or VITE_OPENAI_API_KEY"))
        ));
    }

    #[test]
    fn overrides_are_validated() {
        let cfg = config_openai_with(lookup(&[
            ("OPENAI_API_KEY", "k"),
            ("OPENAI_BASE_URL", "http://localhost:8080"),
            ("LLM_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(cfg.endpoint, "http://localhost:8080");
        assert_eq!(cfg.timeout_secs, Some(5));

        let bad_url = lookup(&[("OPENAI_API_KEY", "k"), ("OPENAI_BASE_URL", "localhost")]);
        assert!(matches!(
            config_openai_with(bad_url),
            Err(AiLlmError::Config(ConfigError::InvalidFormat { .. }))
        ));
        assert!(matches!(
            config_openai_with(lookup(&[("OPENAI_API_KEY", "k"), ("LLM_TIMEOUT_SECS", "-1")])),
            Err(AiLlmError::Config(ConfigError::InvalidNumber { .. }))
        ));
    }
}
