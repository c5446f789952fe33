//! Provider abstractions for prompt generation
//!
//! The pipeline talks to [`LlmProvider`]; [`OpenRouterClient`] is the remote
//! implementation used by the binary.

pub mod llm;
pub mod openrouter;

pub use llm::LlmProvider;
pub use openrouter::OpenRouterClient;
