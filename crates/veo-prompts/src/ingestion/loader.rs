//! Document loading for DOCX and UTF-8 text files

use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{LoadedDocument, SourceKind};

/// Characters of content shown in the debug preview
const PREVIEW_CHARS: usize = 500;

/// Reads an input file into a [`LoadedDocument`]
pub struct DocumentLoader;

impl DocumentLoader {
    /// Load a file, choosing the reader by extension
    pub fn load(path: impl AsRef<Path>) -> Result<LoadedDocument> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let data = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;

        let document = match SourceKind::from_path(path) {
            SourceKind::Docx => Self::parse_docx(path, &data)?,
            SourceKind::PlainText => Self::parse_text(path, data)?,
        };

        tracing::debug!(
            "Loaded {} ({}), {} characters",
            path.display(),
            document.kind.display_name(),
            document.char_count()
        );
        tracing::debug!("First {} characters:\n{}", PREVIEW_CHARS, preview(&document.content, PREVIEW_CHARS));

        Ok(document)
    }

    /// Parse DOCX document
    fn parse_docx(path: &Path, data: &[u8]) -> Result<LoadedDocument> {
        let doc = docx_rs::read_docx(data)
            .map_err(|e| Error::file_parse(path.display().to_string(), e.to_string()))?;

        let mut blocks = Vec::new();
        for child in &doc.document.children {
            match child {
                docx_rs::DocumentChild::Paragraph(p) => {
                    let mut text = String::new();
                    collect_paragraph_text(&p.children, &mut text);
                    blocks.push(text);
                }
                docx_rs::DocumentChild::Table(_) => {
                    // Table cells are not body paragraphs
                }
                _ => {}
            }
        }

        Ok(LoadedDocument::docx(path, blocks))
    }

    /// Parse plain text, rejecting invalid UTF-8
    fn parse_text(path: &Path, data: Vec<u8>) -> Result<LoadedDocument> {
        let content = String::from_utf8(data).map_err(|e| Error::Decode {
            path: path.to_path_buf(),
            message: e.utf8_error().to_string(),
        })?;

        Ok(LoadedDocument::plain_text(path, content))
    }
}

fn collect_paragraph_text(children: &[docx_rs::ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                for child in &run.children {
                    match child {
                        docx_rs::RunChild::Text(t) => out.push_str(&t.text),
                        docx_rs::RunChild::Tab(_) => out.push('\t'),
                        docx_rs::RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            docx_rs::ParagraphChild::Hyperlink(link) => {
                collect_paragraph_text(&link.children, out);
            }
            _ => {}
        }
    }
}

/// First `max_chars` characters of `text`, cut on a char boundary
pub(crate) fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
