//! Document ingestion: loading and paragraph extraction

mod extractor;
mod loader;

pub use extractor::{
    normalize_whitespace, ExtractionStrategy, NumberedScan, ParagraphExtractor, MIN_FALLBACK_CHARS,
};
pub use loader::DocumentLoader;
pub(crate) use loader::preview;
