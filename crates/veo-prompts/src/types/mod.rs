//! Core types for the prompt pipeline

pub mod document;
pub mod paragraph;
pub mod response;

pub use document::{LoadedDocument, SourceKind};
pub use paragraph::ParagraphMap;
pub use response::{PromptOutcome, PromptResults};
