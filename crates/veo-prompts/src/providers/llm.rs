//! LLM provider trait for prompt generation

use async_trait::async_trait;
use crate::error::Result;

/// Trait for turning one script paragraph into one video prompt
///
/// Implementations:
/// - `OpenRouterClient`: OpenRouter chat completions (openai/gpt-4o)
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a video prompt for a single paragraph
    async fn generate_prompt(&self, paragraph: &str) -> Result<String>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
