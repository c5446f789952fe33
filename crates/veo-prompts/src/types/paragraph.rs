//! Paragraph collection keyed by paragraph number

use serde::Serialize;
use std::collections::HashMap;

/// Ordered mapping from paragraph number to normalized text
///
/// Iterates in first-insertion order. Inserting an existing number replaces
/// its text in place, so the last occurrence wins but keeps the slot of the
/// first one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParagraphMap {
    entries: Vec<(u32, String)>,
    #[serde(skip)]
    index: HashMap<u32, usize>,
}

impl ParagraphMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; returns the previous text for a repeated number
    pub fn insert(&mut self, number: u32, text: String) -> Option<String> {
        match self.index.get(&number) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, text)),
            None => {
                self.index.insert(number, self.entries.len());
                self.entries.push((number, text));
                None
            }
        }
    }

    pub fn get(&self, number: u32) -> Option<&str> {
        self.index
            .get(&number)
            .map(|&slot| self.entries[slot].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in iteration order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.entries.iter().map(|(n, text)| (*n, text.as_str()))
    }

    /// Paragraph numbers in iteration order
    pub fn numbers(&self) -> Vec<u32> {
        self.entries.iter().map(|(n, _)| *n).collect()
    }
}

impl FromIterator<(u32, String)> for ParagraphMap {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (number, text) in iter {
            map.insert(number, text);
        }
        map
    }
}
