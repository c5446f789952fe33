//! Video-prompt generation over an LLM provider

pub mod generator;
pub mod prompt;

pub use generator::PromptGenerator;
pub use prompt::{ChatMessage, PromptBuilder, SYSTEM_INSTRUCTION};
