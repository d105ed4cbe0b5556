// Trait abstraction for the language model gateway.
//
// CompletionModel is the one seam between the pipeline and the network:
// extraction and composition both go through it, so tests run against a
// scripted mock with no HTTP and no API key.

use anyhow::Result;
use async_trait::async_trait;
use gemini_client::GeminiClient;

#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// One blocking completion round trip: system instruction + user prompt.
    async fn complete(&self, system: &str, prompt: &str, temperature: f32) -> Result<String>;
}

#[async_trait]
impl CompletionModel for GeminiClient {
    async fn complete(&self, system: &str, prompt: &str, temperature: f32) -> Result<String> {
        Ok(GeminiClient::complete(self, system, prompt, temperature).await?)
    }
}
