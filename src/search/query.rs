//! Query parsing & preprocessing
//!
//! Queries are NFKC-normalized, trimmed, lowercased and split on
//! whitespace. Words of a single character are discarded to cut noise
//! from stray letters.

use crate::error::normalize_text;

/// Words shorter than this are dropped during tokenization
const MIN_WORD_CHARS: usize = 2;

/// Parsed and preprocessed search query
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    /// Original unmodified query
    pub original: String,
    /// Normalized, lowercased input
    pub normalized: String,
    /// Individual search words after the length filter
    pub words: Vec<String>,
}

impl ParsedQuery {
    /// Parse a raw query string into search words. Never fails: empty or
    /// unusable input simply produces no words (and hence no results).
    pub fn parse(query: &str) -> Self {
        let normalized = normalize_text(query).to_lowercase();
        let words = normalized
            .split_whitespace()
            .filter(|w| w.chars().count() >= MIN_WORD_CHARS)
            .map(|w| w.to_string())
            .collect();

        ParsedQuery {
            original: query.to_string(),
            normalized,
            words,
        }
    }

    /// True when nothing survived tokenization
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_parsing() {
        let parsed = ParsedQuery::parse("Pool Safari");
        assert_eq!(parsed.original, "Pool Safari");
        assert_eq!(parsed.words, vec!["pool", "safari"]);
    }

    #[test]
    fn test_empty_and_whitespace_queries() {
        assert!(ParsedQuery::parse("").is_empty());
        assert!(ParsedQuery::parse("   \t ").is_empty());
    }

    #[test]
    fn test_single_letter_words_are_dropped() {
        let parsed = ParsedQuery::parse("a b c");
        assert!(parsed.is_empty());

        let parsed = ParsedQuery::parse("a pool b");
        assert_eq!(parsed.words, vec!["pool"]);
    }

    #[test]
    fn test_lowercasing() {
        let parsed = ParsedQuery::parse("BEACH House");
        assert_eq!(parsed.words, vec!["beach", "house"]);
    }

    #[test]
    fn test_nfkc_normalization() {
        // Fullwidth input folds to ASCII before matching
        let parsed = ParsedQuery::parse("ｐｏｏｌ");
        assert_eq!(parsed.words, vec!["pool"]);
    }
}
