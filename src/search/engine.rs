//! Search engine integration
//!
//! Scores every corpus item against the parsed query and returns a
//! ranked, stably ordered result list.

use super::query::ParsedQuery;
use crate::catalog::SearchItem;

/// Base score for a word found anywhere in the item's searchable text
const WORD_MATCH: u32 = 1;
/// Additional score when the word appears in the item's title
const TITLE_BOOST: u32 = 5;
/// Additional score when the word appears in a property's amenity tags
const AMENITY_BOOST: u32 = 3;

/// Presentation-variant knobs. Both variants share the scorer; they
/// differ only in input floor and result cap.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Minimum trimmed query length before any results are produced
    pub min_query_chars: usize,
    /// Cap on the number of results returned
    pub limit: Option<usize>,
}

impl SearchOptions {
    /// Header quick-search: at least two characters, top ten results
    pub fn quick() -> Self {
        Self {
            min_query_chars: 2,
            limit: Some(10),
        }
    }

    /// Full results page: every positive-score match
    pub fn full() -> Self {
        Self {
            min_query_chars: 0,
            limit: None,
        }
    }
}

/// A corpus item with its match score
#[derive(Debug, Clone, Copy)]
pub struct ScoredItem<'a> {
    pub item: SearchItem<'a>,
    pub score: u32,
}

struct IndexedItem<'a> {
    item: SearchItem<'a>,
    text: String,
    title: String,
    amenities: Vec<String>,
}

/// Search engine over an immutable corpus. Searchable text is derived
/// once at construction; the corpus never changes within a process.
pub struct SearchEngine<'a> {
    index: Vec<IndexedItem<'a>>,
}

impl<'a> SearchEngine<'a> {
    pub fn new(items: Vec<SearchItem<'a>>) -> Self {
        let index = items
            .into_iter()
            .map(|item| IndexedItem {
                text: item.searchable_text(),
                title: item.title().to_lowercase(),
                amenities: item
                    .amenities()
                    .map(|tags| tags.iter().map(|t| t.to_lowercase()).collect())
                    .unwrap_or_default(),
                item,
            })
            .collect();
        Self { index }
    }

    /// Score the corpus against a free-text query. Empty or too-short
    /// queries yield an empty result, never an error.
    pub fn search(&self, query: &str, options: SearchOptions) -> Vec<ScoredItem<'a>> {
        let parsed = ParsedQuery::parse(query);
        if parsed.normalized.chars().count() < options.min_query_chars || parsed.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<ScoredItem<'a>> = self
            .index
            .iter()
            .filter_map(|entry| {
                let score = score_item(entry, &parsed.words);
                (score > 0).then_some(ScoredItem {
                    item: entry.item,
                    score,
                })
            })
            .collect();

        // Stable sort: equal scores keep corpus order
        results.sort_by_key(|r| std::cmp::Reverse(r.score));

        if let Some(limit) = options.limit {
            results.truncate(limit);
        }
        results
    }
}

fn score_item(entry: &IndexedItem<'_>, words: &[String]) -> u32 {
    let mut score = 0;
    for word in words {
        if entry.text.contains(word.as_str()) {
            score += WORD_MATCH;
            if entry.title.contains(word.as_str()) {
                score += TITLE_BOOST;
            }
        }
        if entry.amenities.iter().any(|a| a.contains(word.as_str())) {
            score += AMENITY_BOOST;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn engine() -> SearchEngine<'static> {
        SearchEngine::new(catalog::search_items())
    }

    #[test]
    fn test_empty_query_yields_nothing() {
        let engine = engine();
        assert!(engine.search("", SearchOptions::full()).is_empty());
        assert!(engine.search("   ", SearchOptions::full()).is_empty());
    }

    #[test]
    fn test_single_letter_words_yield_nothing_in_full_search() {
        let engine = engine();
        assert!(engine.search("a b c", SearchOptions::full()).is_empty());
    }

    #[test]
    fn test_quick_search_requires_two_chars() {
        let engine = engine();
        assert!(engine.search("p", SearchOptions::quick()).is_empty());
    }

    #[test]
    fn test_quick_search_caps_at_ten() {
        let engine = engine();
        // "hotel" appears across most of the corpus
        let results = engine.search("hotel", SearchOptions::quick());
        assert!(results.len() <= 10);
        assert!(!results.is_empty());
    }

    #[test]
    fn test_unknown_term_yields_empty_not_error() {
        let engine = engine();
        let results = engine.search("xyzzynoresult", SearchOptions::full());
        assert!(results.is_empty());
    }

    #[test]
    fn test_title_match_gets_boost() {
        let engine = engine();
        let results = engine.search("amorea", SearchOptions::full());
        assert!(!results.is_empty());
        // The property named Amorea carries base + title boost at minimum
        let top = &results[0];
        assert_eq!(top.item.title(), "KayJay Amorea");
        assert!(top.score >= WORD_MATCH + TITLE_BOOST);
    }

    #[test]
    fn test_scores_are_non_increasing() {
        let engine = engine();
        let results = engine.search("beach pool safari", SearchOptions::full());
        assert!(!results.is_empty());
        for pair in results.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "results must be sorted by descending score"
            );
        }
    }

    #[test]
    fn test_equal_scores_keep_corpus_order() {
        let engine = engine();
        let results = engine.search("wifi", SearchOptions::full());
        let corpus_pos = |item: &SearchItem<'_>| {
            catalog::search_items()
                .iter()
                .position(|other| {
                    other.type_label() == item.type_label() && other.title() == item.title()
                })
                .unwrap()
        };
        for pair in results.windows(2) {
            if pair[0].score == pair[1].score {
                assert!(
                    corpus_pos(&pair[0].item) < corpus_pos(&pair[1].item),
                    "ties must preserve corpus order"
                );
            }
        }
    }

    #[test]
    fn test_repeated_runs_are_deterministic() {
        let engine = engine();
        let a: Vec<(String, u32)> = engine
            .search("pool", SearchOptions::full())
            .iter()
            .map(|r| (r.item.title().to_string(), r.score))
            .collect();
        let b: Vec<(String, u32)> = engine
            .search("pool", SearchOptions::full())
            .iter()
            .map(|r| (r.item.title().to_string(), r.score))
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pool_scenario_ranks_pool_properties_over_incidental_mentions() {
        let engine = engine();
        let results = engine.search("pool", SearchOptions::full());
        assert!(!results.is_empty());

        // Kay Jay Wild has no pool anywhere in its text; it must not appear
        for result in &results {
            assert_ne!(
                result.item.title(),
                "Kay Jay Wild",
                "property without a pool reference must not match"
            );
        }

        // A property with "swimming pool" in its amenities outranks a room
        // that only mentions "Pool View" in a feature string
        let amorea_score = results
            .iter()
            .find(|r| r.item.title() == "KayJay Amorea")
            .map(|r| r.score)
            .expect("pool property should match");
        let pool_view_room_score = results
            .iter()
            .find(|r| r.item.title() == "Triple Room" && r.item.type_label() == "Room")
            .map(|r| r.score);
        if let Some(room_score) = pool_view_room_score {
            assert!(amorea_score > room_score);
        }
    }

    #[test]
    fn test_amenity_boost_applies_in_both_variants() {
        let engine = engine();
        let full = engine.search("snorkeling", SearchOptions::full());
        let quick = engine.search("snorkeling", SearchOptions::quick());
        let score_in = |results: &[ScoredItem<'_>]| {
            results
                .iter()
                .find(|r| r.item.title() == "Kay Jay Beach House")
                .map(|r| r.score)
        };
        let full_score = score_in(&full).expect("beach house lists snorkeling");
        assert_eq!(score_in(&quick), Some(full_score));
        // base word match + amenity boost
        assert!(full_score >= WORD_MATCH + AMENITY_BOOST);
    }

    #[test]
    fn test_rooms_inherit_parent_searchability() {
        let engine = engine();
        // "wilpattu" appears in Kay Jay Wild's name/location/amenities;
        // its rooms match through inheritance
        let results = engine.search("wilpattu", SearchOptions::full());
        assert!(results
            .iter()
            .any(|r| r.item.type_label() == "Room" && r.item.link_path().contains("kay-jay-wild")));
    }

    #[test]
    fn test_static_pages_are_searchable() {
        let engine = engine();
        let results = engine.search("cancellation policy", SearchOptions::full());
        assert!(results
            .iter()
            .any(|r| r.item.type_label() == "Page" && r.item.title() == "FAQ"));
    }

    #[test]
    fn test_price_tier_words_match() {
        let engine = engine();
        let results = engine.search("luxury", SearchOptions::full());
        assert!(results
            .iter()
            .any(|r| r.item.title() == "Luxury Double"));
    }
}
