pub mod default_config;
pub mod llm_client_config;
