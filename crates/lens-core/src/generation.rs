//! Seam to the hosted text generation model.

use async_trait::async_trait;

use crate::error::ProviderError;

/// Produces one text completion for a prompt.
///
/// Implementations own their connection and credentials; both are fixed for
/// the life of the process. Failures are final for the request.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
