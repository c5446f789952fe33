//! Error types for the prompt pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline errors
#[derive(Debug, Error)]
pub enum Error {
    /// Required API key is absent
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// Input path does not resolve to a file
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Plain-text input is not valid UTF-8
    #[error("Failed to decode '{}' as UTF-8: {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    /// Document container could not be read
    #[error("Failed to parse file '{filename}': {message}")]
    FileParse { filename: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote LLM error
    #[error("LLM error: {0}")]
    Llm(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// TOML config error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a file parse error
    pub fn file_parse(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileParse {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }

    /// True for failures that stop the run before generation starts
    pub fn is_fatal_input(&self) -> bool {
        matches!(
            self,
            Error::FileNotFound(_) | Error::Decode { .. } | Error::FileParse { .. }
        )
    }
}
