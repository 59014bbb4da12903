// src/core/config_manager.rs
//! Resolves harness settings from CLI flags and environment

use crate::core::ollama_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use tracing::info;

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub model: String,
    pub base_url: String,
}

impl HarnessConfig {
    /// Load configuration: CLI flags win over environment, environment
    /// over built-in defaults.
    pub fn load(model_flag: Option<String>, base_url_flag: Option<String>) -> Self {
        let model = model_flag
            .or_else(|| std::env::var("OLLAMA_MODEL").ok())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = base_url_flag
            .or_else(|| std::env::var("OLLAMA_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // Endpoints are appended verbatim, so strip a trailing slash here
        let base_url = base_url.trim_end_matches('/').to_string();

        info!("Using model {} at {}", model, base_url);

        Self { model, base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_win_over_environment() {
        std::env::set_var("OLLAMA_MODEL", "env-model");
        let config = HarnessConfig::load(
            Some("flag-model".to_string()),
            Some(DEFAULT_BASE_URL.to_string()),
        );
        std::env::remove_var("OLLAMA_MODEL");

        assert_eq!(config.model, "flag-model");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = HarnessConfig::load(
            Some(DEFAULT_MODEL.to_string()),
            Some("http://localhost:11434/".to_string()),
        );
        assert_eq!(config.base_url, "http://localhost:11434");
    }
}
