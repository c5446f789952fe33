//! veo-prompts: cinematic video prompts from numbered script paragraphs
//!
//! Reads a DOCX or plain-text script, splits it into numbered paragraphs,
//! asks an OpenRouter chat model for one Veo 3 prompt per paragraph and writes
//! the results as a text report and a CSV file.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod output;
pub mod pipeline;
pub mod providers;
pub mod types;

pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use pipeline::{Pipeline, RunSummary};
pub use types::{
    document::{LoadedDocument, SourceKind},
    paragraph::ParagraphMap,
    response::{PromptOutcome, PromptResults},
};
