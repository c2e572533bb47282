//! Cohere HTTP client for report generation.
//!
//! Calls `/v1/generate` and returns the text of the first generation.

use async_trait::async_trait;
use lens_core::{ProviderError, TextGenerator};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::GenerationConfig;

/// Cohere generation client.
#[derive(Clone)]
pub struct CohereClient {
    config: GenerationConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    generations: Vec<Generation>,
}

#[derive(Deserialize)]
struct Generation {
    text: String,
}

impl CohereClient {
    /// Create a client from startup configuration.
    pub fn new(config: GenerationConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, timeout = ?config.timeout, "HTTP client build failed, using defaults without timeout");
                reqwest::Client::default()
            });

        let config = GenerationConfig {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            ..config
        };

        Self { config, client }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Request one completion for `prompt`.
    pub async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(format!("{}/v1/generate", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        let text = result
            .generations
            .into_iter()
            .next()
            .map(|generation| generation.text)
            .ok_or(ProviderError::EmptyCompletion)?;

        debug!(model = %self.config.model, chars = text.len(), "Generated completion");

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for CohereClient {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.complete(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::Server) -> CohereClient {
        CohereClient::new(GenerationConfig::new("test-key").with_base_url(format!("{}/", server.url())))
    }

    #[tokio::test]
    async fn test_returns_first_generation() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/generate")
            .match_header("authorization", "Bearer test-key")
            .match_body(Matcher::PartialJson(json!({
                "model": "command-r-plus",
                "prompt": "describe drones",
                "max_tokens": 800
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "id": "gen-1",
                    "generations": [
                        {"id": "a", "text": "{\"avgPrice\": 300}"},
                        {"id": "b", "text": "ignored"}
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let text = client_for(&server).generate("describe drones").await.unwrap();

        assert_eq!(text, "{\"avgPrice\": 300}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/generate")
            .with_status(429)
            .with_body("rate limited")
            .create_async()
            .await;

        let err = client_for(&server).generate("p").await.unwrap_err();

        match err {
            ProviderError::Status { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_no_generations_is_empty_completion() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/generate")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": "gen-2", "generations": []}"#)
            .create_async()
            .await;

        let err = client_for(&server).generate("p").await.unwrap_err();
        assert!(matches!(err, ProviderError::EmptyCompletion));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/generate")
            .with_status(200)
            .with_body("<html>gateway</html>")
            .create_async()
            .await;

        let err = client_for(&server).generate("p").await.unwrap_err();
        assert!(matches!(err, ProviderError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        let client = CohereClient::new(GenerationConfig::new("k").with_base_url("http://127.0.0.1:1"));
        let err = client.generate("p").await.unwrap_err();
        assert!(matches!(err, ProviderError::Request(_)));
    }

    #[tokio::test]
    async fn test_configured_timeout_applies() {
        // Accepts connections but never answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let mut config = GenerationConfig::new("k").with_base_url(format!("http://{addr}"));
        config.timeout = std::time::Duration::from_millis(200);
        let client = CohereClient::new(config);

        let result = tokio::time::timeout(std::time::Duration::from_secs(10), client.generate("p"))
            .await
            .expect("client timeout should fire first");
        assert!(matches!(result, Err(ProviderError::Request(_))));
    }
}
