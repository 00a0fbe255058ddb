use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use ai_llm_service::{LlmClientConfig, OpenAiService, config_openai_from_env};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::error_handler::{AppError, AppResult};

/// Shared state for all HTTP handlers.
#[derive(Debug)]
pub struct AppState {
    /// Single-generation client used by `/api/generate` and every sweep point.
    pub llm: Arc<OpenAiService>,
    /// One permit: at most one sweep runs per server.
    sweep_gate: Arc<Semaphore>,
    /// Sequence for sweep labels in logs.
    sweep_seq: AtomicU64,
}

impl AppState {
    pub fn new(llm: OpenAiService) -> Self {
        Self {
            llm: Arc::new(llm),
            sweep_gate: Arc::new(Semaphore::new(1)),
            sweep_seq: AtomicU64::new(0),
        }
    }

    /// Load shared state from environment variables.
    ///
    /// # Errors
    /// [`AppError::Config`] if the OpenAI key is missing or a value is malformed.
    pub fn from_env() -> AppResult<Self> {
        let cfg = config_openai_from_env().map_err(AppError::Config)?;
        Self::from_config(cfg)
    }

    pub fn from_config(cfg: LlmClientConfig) -> AppResult<Self> {
        let llm = OpenAiService::new(cfg).map_err(AppError::Config)?;
        Ok(Self::new(llm))
    }

    /// Claims the sweep slot without waiting.
    ///
    /// # Errors
    /// [`AppError::SweepInProgress`] while another sweep holds the permit.
    pub fn try_begin_sweep(&self) -> AppResult<OwnedSemaphorePermit> {
        Arc::clone(&self.sweep_gate)
            .try_acquire_owned()
            .map_err(|_| AppError::SweepInProgress)
    }

    /// Next sweep label, `sweep-1`, `sweep-2`, ...
    pub fn next_sweep_label(&self) -> String {
        let n = self.sweep_seq.fetch_add(1, Ordering::Relaxed) + 1;
        format!("sweep-{n}")
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::offline_state;
    use super::*;

    #[test]
    fn only_one_sweep_slot() {
        let state = offline_state();
        let permit = state.try_begin_sweep().unwrap();
        assert!(matches!(
            state.try_begin_sweep(),
            Err(AppError::SweepInProgress)
        ));
        drop(permit);
        assert!(state.try_begin_sweep().is_ok());
    }

    #[test]
    fn sweep_labels_increase() {
        let state = offline_state();
        assert_eq!(state.next_sweep_label(), "sweep-1");
        assert_eq!(state.next_sweep_label(), "sweep-2");
    }

    #[test]
    fn missing_key_is_a_config_error() {
        let cfg = LlmClientConfig {
            endpoint: "https://api.openai.com".into(),
            api_key: None,
            timeout_secs: None,
        };
        assert!(matches!(
            AppState::from_config(cfg),
            Err(AppError::Config(_))
        ));
    }
}
