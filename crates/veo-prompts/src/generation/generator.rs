//! Sequential prompt generation with per-paragraph failure isolation

use crate::ingestion::preview;
use crate::providers::LlmProvider;
use crate::types::{ParagraphMap, PromptOutcome, PromptResults};

/// Drives an [`LlmProvider`] over a paragraph collection, one request at a time
pub struct PromptGenerator<'a> {
    provider: &'a dyn LlmProvider,
}

impl<'a> PromptGenerator<'a> {
    pub fn new(provider: &'a dyn LlmProvider) -> Self {
        Self { provider }
    }

    /// Generate prompts for the first `limit` paragraphs (all when `None`)
    ///
    /// A failed request is recorded as [`PromptOutcome::Failed`] and the next
    /// paragraph is still attempted.
    pub async fn generate(&self, paragraphs: &ParagraphMap, limit: Option<usize>) -> PromptResults {
        let take = limit.unwrap_or(usize::MAX);
        let mut results = PromptResults::new();

        tracing::info!(
            "Generating prompts with {} ({}) for {} of {} paragraphs",
            self.provider.name(),
            self.provider.model(),
            paragraphs.len().min(take),
            paragraphs.len()
        );

        for (number, text) in paragraphs.iter().take(take) {
            tracing::info!("Processing paragraph {}...", number);
            tracing::info!("Text: {}...", preview(text, 100));

            let outcome = match self.provider.generate_prompt(text).await {
                Ok(prompt) => {
                    tracing::info!("Prompt generated: {}...", preview(&prompt, 80));
                    PromptOutcome::Generated(prompt)
                }
                Err(e) => {
                    tracing::warn!("Failed to process paragraph {}: {}", number, e);
                    PromptOutcome::Failed(e.to_string())
                }
            };
            results.record(number, outcome);
        }

        results
    }
}
