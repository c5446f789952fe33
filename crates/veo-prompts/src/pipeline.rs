//! End-to-end run: load, extract, generate, write

use std::path::PathBuf;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::generation::PromptGenerator;
use crate::ingestion::{DocumentLoader, ParagraphExtractor};
use crate::output::{write_csv, write_txt_report};
use crate::providers::{LlmProvider, OpenRouterClient};

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Paragraphs extracted from the input
    pub paragraphs_found: usize,
    /// Paragraphs sent to the provider
    pub paragraphs_processed: usize,
    /// Paragraphs recorded with an error marker
    pub failures: usize,
    /// Report path
    pub txt_path: PathBuf,
    /// CSV path
    pub csv_path: PathBuf,
}

/// Prompt pipeline bound to a resolved configuration
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run against OpenRouter
    ///
    /// Fails with `MissingCredential` before touching any file when no API key
    /// is configured.
    pub async fn run(&self) -> Result<RunSummary> {
        self.config.validate_credential()?;
        let client = OpenRouterClient::new(&self.config.llm)?;
        self.run_with_provider(&client).await
    }

    /// Run with any provider
    ///
    /// Loading failures abort the run before any output is written; request
    /// failures only mark their paragraph.
    pub async fn run_with_provider(&self, provider: &dyn LlmProvider) -> Result<RunSummary> {
        let input = &self.config.input;

        tracing::info!("[1/3] Reading {}", input.path.display());
        let document = DocumentLoader::load(&input.path)?;
        let (paragraphs, strategy) = ParagraphExtractor::extract_with_strategy(&document);
        tracing::info!("Found {} paragraphs ({:?})", paragraphs.len(), strategy);

        tracing::info!("[2/3] Generating video prompts");
        let results = PromptGenerator::new(provider)
            .generate(&paragraphs, input.limit())
            .await;
        tracing::info!("Processed {} paragraphs", results.len());

        tracing::info!("[3/3] Saving results");
        let output = &self.config.output;
        write_txt_report(&results, &output.txt_path)?;
        write_csv(&results, &output.csv_path)?;

        Ok(RunSummary {
            paragraphs_found: paragraphs.len(),
            paragraphs_processed: results.len(),
            failures: results.failures(),
            txt_path: output.txt_path.clone(),
            csv_path: output.csv_path.clone(),
        })
    }
}
