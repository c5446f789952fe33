//! Loaded document types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Supported source kinds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Microsoft Word document (.docx)
    Docx,
    /// Anything else, read as UTF-8 text
    PlainText,
}

impl SourceKind {
    /// Detect source kind from extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "docx" => Self::Docx,
            _ => Self::PlainText,
        }
    }

    /// Detect source kind from a path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::PlainText)
    }

    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Docx => "Word Document (.docx)",
            Self::PlainText => "Text File",
        }
    }
}

/// Full text of an input file plus its block-level paragraphs
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Source path
    pub path: PathBuf,
    /// Detected kind
    pub kind: SourceKind,
    /// Full text (DOCX paragraphs joined with '\n', or the file verbatim)
    pub content: String,
    /// DOCX body paragraphs in document order; empty for plain text
    pub blocks: Vec<String>,
}

impl LoadedDocument {
    /// Plain-text document
    pub fn plain_text(path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            path: path.into(),
            kind: SourceKind::PlainText,
            content,
            blocks: Vec::new(),
        }
    }

    /// DOCX document from its paragraph texts
    pub fn docx(path: impl Into<PathBuf>, blocks: Vec<String>) -> Self {
        Self {
            path: path.into(),
            kind: SourceKind::Docx,
            content: blocks.join("\n"),
            blocks,
        }
    }

    /// Character count of the full text
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}
