//! Paragraph extraction: numbered scan with paragraph-splitting fallback

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{LoadedDocument, ParagraphMap, SourceKind};

/// Fallback blocks must be longer than this many characters
pub const MIN_FALLBACK_CHARS: usize = 20;

/// `digits . whitespace` opening a numbered paragraph
static PARAGRAPH_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)\.\s+").expect("valid paragraph start pattern"));

/// A line break followed by the next paragraph start
static NEXT_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[0-9]+\.\s").expect("valid boundary pattern"));

/// How a [`ParagraphMap`] was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// Keys taken from `N. ` numbering in the text
    Numbered,
    /// Sequential keys from DOCX paragraphs or blank-line blocks
    Fallback,
}

/// Builds the paragraph collection from a loaded document
pub struct ParagraphExtractor;

impl ParagraphExtractor {
    /// Extract paragraphs, falling back to block splitting when no numbering is found
    pub fn extract(doc: &LoadedDocument) -> ParagraphMap {
        Self::extract_with_strategy(doc).0
    }

    /// Same as [`extract`](Self::extract), also reporting which path was taken
    pub fn extract_with_strategy(doc: &LoadedDocument) -> (ParagraphMap, ExtractionStrategy) {
        let numbered = Self::scan_numbered(&doc.content);
        if numbered.matched > 0 {
            return (numbered.paragraphs, ExtractionStrategy::Numbered);
        }

        tracing::info!("No numbering found, splitting document into paragraphs");
        let paragraphs = match doc.kind {
            SourceKind::Docx => Self::split_blocks(&doc.blocks),
            SourceKind::PlainText => Self::split_blank_lines(&doc.content),
        };
        (paragraphs, ExtractionStrategy::Fallback)
    }

    /// Numbered-paragraph scan
    ///
    /// The first paragraph may start anywhere; every later one must follow a
    /// line break. A body runs up to the next boundary or the end of text.
    /// Repeated numbers overwrite earlier ones.
    pub fn scan_numbered(text: &str) -> NumberedScan {
        let mut scan = NumberedScan::default();
        let mut pos = 0;

        while let Some(caps) = PARAGRAPH_START.captures_at(text, pos) {
            let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
                break;
            };
            let body_start = whole.end();

            // The body needs at least one character
            let Some(first) = text[body_start..].chars().next() else {
                // Only whitespace after the marker; nothing left to read
                break;
            };

            let body_end = NEXT_BOUNDARY
                .find_at(text, body_start + first.len_utf8())
                .map(|m| m.start())
                .unwrap_or(text.len());
            pos = body_end;
            scan.matched += 1;

            let body = normalize_whitespace(&text[body_start..body_end]);
            if body.is_empty() {
                continue;
            }
            match digits.as_str().parse::<u32>() {
                Ok(number) => {
                    if scan.paragraphs.insert(number, body).is_some() {
                        tracing::debug!("Paragraph {} appears more than once, keeping the last", number);
                    }
                }
                Err(_) => {
                    tracing::warn!("Skipping paragraph number out of range: {}", digits.as_str());
                }
            }
        }

        scan
    }

    /// Fallback for DOCX: one paragraph per body paragraph longer than the minimum
    pub fn split_blocks<S: AsRef<str>>(blocks: &[S]) -> ParagraphMap {
        let mut paragraphs = ParagraphMap::new();
        let mut next = 1u32;
        for block in blocks {
            let trimmed = block.as_ref().trim();
            if trimmed.chars().count() > MIN_FALLBACK_CHARS {
                paragraphs.insert(next, normalize_whitespace(trimmed));
                next += 1;
            }
        }
        paragraphs
    }

    /// Fallback for plain text: blocks separated by a blank line
    pub fn split_blank_lines(text: &str) -> ParagraphMap {
        let mut paragraphs = ParagraphMap::new();
        let mut next = 1u32;
        for part in text.split("\n\n") {
            let cleaned = normalize_whitespace(part);
            if cleaned.chars().count() > MIN_FALLBACK_CHARS {
                paragraphs.insert(next, cleaned);
                next += 1;
            }
        }
        paragraphs
    }
}

/// Result of the numbered scan
#[derive(Debug, Clone, Default)]
pub struct NumberedScan {
    /// Extracted paragraphs
    pub paragraphs: ParagraphMap,
    /// Pattern matches, including ones dropped as empty or out of range
    pub matched: usize,
}

/// Collapse whitespace runs to single spaces and trim
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_doc(content: &str) -> LoadedDocument {
        LoadedDocument::plain_text("input.txt", content.to_string())
    }

    fn pairs(map: &ParagraphMap) -> Vec<(u32, &str)> {
        map.iter().collect()
    }

    #[test]
    fn test_numbered_simple() {
        let map = ParagraphExtractor::extract(&text_doc("1. A\n2. B\n3. C"));
        assert_eq!(pairs(&map), vec![(1, "A"), (2, "B"), (3, "C")]);
    }

    #[test]
    fn test_numbered_multiline_bodies_collapse() {
        let text = "1. Dawn breaks\nover   stone towers.\n\n2.  Soldiers\tgather\n  firewood.\n";
        let (map, strategy) = ParagraphExtractor::extract_with_strategy(&text_doc(text));
        assert_eq!(strategy, ExtractionStrategy::Numbered);
        assert_eq!(
            pairs(&map),
            vec![
                (1, "Dawn breaks over stone towers."),
                (2, "Soldiers gather firewood.")
            ]
        );
    }

    #[test]
    fn test_duplicate_number_last_write_wins() {
        let map = ParagraphExtractor::extract(&text_doc("1. A\n1. B"));
        assert_eq!(pairs(&map), vec![(1, "B")]);
    }

    #[test]
    fn test_duplicate_keeps_first_position() {
        let map = ParagraphExtractor::extract(&text_doc("2. x\n1. y\n2. z"));
        assert_eq!(pairs(&map), vec![(2, "z"), (1, "y")]);
    }

    #[test]
    fn test_mid_line_numbers_do_not_split() {
        let text = "1. Built in the year 1190. Then the walls rose.\n2. Winter came.";
        let map = ParagraphExtractor::extract(&text_doc(text));
        assert_eq!(
            pairs(&map),
            vec![(1, "Built in the year 1190. Then the walls rose."), (2, "Winter came.")]
        );
    }

    #[test]
    fn test_first_paragraph_may_start_mid_line() {
        let text = "Episode 200. How people kept warm\n1. Fires in braziers.";
        let map = ParagraphExtractor::extract(&text_doc(text));
        assert_eq!(
            pairs(&map),
            vec![(200, "How people kept warm"), (1, "Fires in braziers.")]
        );
    }

    #[test]
    fn test_keys_need_not_be_contiguous() {
        let map = ParagraphExtractor::extract(&text_doc("5. Five\n9. Nine\n7. Seven"));
        assert_eq!(map.numbers(), vec![5, 9, 7]);
    }

    #[test]
    fn test_number_without_whitespace_is_not_a_start() {
        let map = ParagraphExtractor::extract(&text_doc("1. Alpha\n2.Beta\n3. Gamma"));
        assert_eq!(pairs(&map), vec![(1, "Alpha 2.Beta"), (3, "Gamma")]);
    }

    #[test]
    fn test_fallback_plain_text_blank_lines() {
        let text = "The great hall of the castle stood cold.\n\nShort one.\n\n\
                    Servants carried   hot stones\nto the lord's bed each night.\n\n   \n";
        let (map, strategy) = ParagraphExtractor::extract_with_strategy(&text_doc(text));
        assert_eq!(strategy, ExtractionStrategy::Fallback);
        assert_eq!(
            pairs(&map),
            vec![
                (1, "The great hall of the castle stood cold."),
                (2, "Servants carried hot stones to the lord's bed each night.")
            ]
        );
    }

    #[test]
    fn test_fallback_threshold_is_exclusive() {
        let exactly_20 = "abcdefghij abcdefghi";
        let exactly_21 = "abcdefghij abcdefghij";
        assert_eq!(exactly_20.chars().count(), 20);
        let map = ParagraphExtractor::split_blank_lines(&format!("{}\n\n{}", exactly_20, exactly_21));
        assert_eq!(pairs(&map), vec![(1, exactly_21)]);
    }

    #[test]
    fn test_fallback_counts_characters_not_bytes() {
        // 12 Cyrillic letters: 24 bytes but only 12 characters
        let map = ParagraphExtractor::split_blank_lines("замокзамокза\n\nзамок замок замок замок");
        assert_eq!(pairs(&map), vec![(1, "замок замок замок замок")]);
    }

    #[test]
    fn test_fallback_docx_blocks() {
        let doc = LoadedDocument::docx(
            "script.docx",
            vec![
                "Title".to_string(),
                "  The keep's walls were two metres thick.  ".to_string(),
                String::new(),
                "Wool hangings\tcovered the stone.".to_string(),
            ],
        );
        let (map, strategy) = ParagraphExtractor::extract_with_strategy(&doc);
        assert_eq!(strategy, ExtractionStrategy::Fallback);
        assert_eq!(
            pairs(&map),
            vec![
                (1, "The keep's walls were two metres thick."),
                (2, "Wool hangings covered the stone.")
            ]
        );
    }

    #[test]
    fn test_docx_numbered_uses_joined_content() {
        let doc = LoadedDocument::docx(
            "script.docx",
            vec!["1. Smoke rises.".to_string(), "2. Embers glow.".to_string()],
        );
        let map = ParagraphExtractor::extract(&doc);
        assert_eq!(pairs(&map), vec![(1, "Smoke rises."), (2, "Embers glow.")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(ParagraphExtractor::extract(&text_doc("")).is_empty());
        assert!(ParagraphExtractor::extract(&text_doc("\n\n\n")).is_empty());
    }

    #[test]
    fn test_marker_without_body_is_dropped() {
        let map = ParagraphExtractor::extract(&text_doc("1. Real text\n2.  "));
        assert_eq!(pairs(&map), vec![(1, "Real text")]);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let doc = text_doc("3. C\n1. A\n\n\n3. CC\n2. B  b");
        let first = ParagraphExtractor::extract(&doc);
        let second = ParagraphExtractor::extract(&doc);
        assert_eq!(first, second);
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a\n\t b  \r\n c "), "a b c");
        assert_eq!(normalize_whitespace(" \n "), "");
    }
}
