//! Generation settings, fixed at startup.

use std::time::Duration;

/// Default Cohere API URL.
pub const DEFAULT_BASE_URL: &str = "https://api.cohere.com";

/// Default generation model.
pub const DEFAULT_MODEL: &str = "command-r-plus";

pub const DEFAULT_MAX_TOKENS: u32 = 800;

pub const DEFAULT_TEMPERATURE: f32 = 0.3;

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Everything the client needs to reach the provider.
#[derive(Clone)]
pub struct GenerationConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

impl GenerationConfig {
    /// Config with default model settings for the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GenerationConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, "command-r-plus");
        assert_eq!(config.max_tokens, 800);
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GenerationConfig::new("sk-secret-value");
        let shown = format!("{config:?}");
        assert!(!shown.contains("sk-secret-value"));
        assert!(shown.contains("<redacted>"));
    }
}
