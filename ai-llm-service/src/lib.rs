//! Single-generation collaborator for the playground.
//!
//! - [`config`]        — client settings, loaded from environment variables
//! - [`services`]      — the OpenAI chat-completions client
//! - [`error_handler`] — unified [`AiLlmError`] and env/validation helpers
//! - [`telemetry`]     — tracing layer and filter helpers for the binary
//!
//! The client knows nothing about sweeps: it turns one
//! [`playground_core::GenerationConfig`] into one text, or an error.

pub mod config;
pub mod error_handler;
pub mod services;
pub mod telemetry;

pub use config::{default_config::config_openai_from_env, llm_client_config::LlmClientConfig};
pub use error_handler::{AiLlmError, Result};
pub use services::open_ai_service::OpenAiService;
