//! Free-text normalization and keyword scoring.

use crate::keywords::KeywordTable;
use sodu_core::Category;
use std::collections::HashMap;

/// Normalizes raw descriptions and scores them against the keyword table.
pub struct TextFeatureAnalyzer {
    keywords: KeywordTable,
}

impl TextFeatureAnalyzer {
    pub fn new() -> Self {
        Self::with_table(KeywordTable::builtin())
    }

    /// Use an alternate keyword table (tests, experiments).
    pub fn with_table(keywords: KeywordTable) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Lowercase, replace everything that is neither a word character nor
    /// whitespace with a space, collapse whitespace runs, trim.
    ///
    /// Pure and total; idempotent, so normalizing twice is a no-op.
    pub fn normalize(text: &str) -> String {
        let lowered = text.to_lowercase();
        let replaced: String = lowered
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();
        replaced.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Distinct keyword hits per curated category for a raw description.
    pub fn score_keywords(&self, text: &str) -> HashMap<Category, usize> {
        self.keywords.score(&Self::normalize(text))
    }
}

impl Default for TextFeatureAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
