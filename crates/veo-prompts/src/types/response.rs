//! Generated prompt results

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Outcome of one paragraph's generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "lowercase")]
pub enum PromptOutcome {
    /// Prompt text returned by the model
    Generated(String),
    /// Request failed; holds the error description
    Failed(String),
}

impl PromptOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Text written to the outputs: the prompt, or `ERROR: <message>`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PromptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generated(prompt) => f.write_str(prompt),
            Self::Failed(message) => write!(f, "ERROR: {}", message),
        }
    }
}

/// Result collection, iterated in ascending paragraph number
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PromptResults {
    outcomes: BTreeMap<u32, PromptOutcome>,
}

impl PromptResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, number: u32, outcome: PromptOutcome) {
        self.outcomes.insert(number, outcome);
    }

    pub fn get(&self, number: u32) -> Option<&PromptOutcome> {
        self.outcomes.get(&number)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn failures(&self) -> usize {
        self.outcomes.values().filter(|o| o.is_failed()).count()
    }

    /// Outcomes sorted by paragraph number
    pub fn iter(&self) -> impl Iterator<Item = (u32, &PromptOutcome)> {
        self.outcomes.iter().map(|(n, o)| (*n, o))
    }
}
