//! Search tool implementation
//!
//! Runs the unified search over the static corpus and renders result
//! cards with highlighted excerpts.

use crate::catalog;
use crate::cli::SearchArgs;
use crate::error::AppError;
use crate::search::highlight::to_markdown;
use crate::search::{highlight, SearchEngine, SearchOptions, Segment};
use serde::Serialize;
use tracing::debug;

/// One result card
#[derive(Debug, Clone, Serialize)]
pub struct SearchResultEntry {
    #[serde(rename = "type")]
    pub type_label: &'static str,
    pub title: String,
    pub link: String,
    pub score: u32,
    /// Excerpt split into highlighted and plain runs
    pub description: Vec<Segment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total: usize,
    pub results: Vec<SearchResultEntry>,
}

/// Execute a search. Empty and unmatched queries produce an empty
/// result set, never an error.
pub fn execute_search(args: &SearchArgs) -> Result<SearchResponse, AppError> {
    if args.query.len() > 500 {
        return Err(AppError::InvalidInput(
            "Query too long, maximum 500 characters".to_string(),
        ));
    }

    let mut options = if args.quick {
        SearchOptions::quick()
    } else {
        SearchOptions::full()
    };
    if args.limit.is_some() {
        options.limit = args.limit;
    }

    let engine = SearchEngine::new(catalog::search_items());
    let scored = engine.search(&args.query, options);
    debug!("Search '{}' matched {} items", args.query, scored.len());

    let results: Vec<SearchResultEntry> = scored
        .iter()
        .map(|r| SearchResultEntry {
            type_label: r.item.type_label(),
            title: r.item.title().to_string(),
            link: r.item.link_path(),
            score: r.score,
            description: highlight(&r.item.description(), &args.query),
        })
        .collect();

    Ok(SearchResponse {
        query: args.query.clone(),
        total: results.len(),
        results,
    })
}

/// Format search results as markdown for CLI display
pub fn format_search_results(response: &SearchResponse) -> String {
    let mut md = String::new();

    if response.results.is_empty() {
        md.push_str(&format!("No results found for \"{}\".\n", response.query));
        md.push_str("Try a different keyword like \"pool\", \"safari\", or a location.\n");
        return md;
    }

    md.push_str(&format!(
        "# Search Results · {} matches for \"{}\"\n\n",
        response.total, response.query
    ));

    for entry in &response.results {
        md.push_str(&format!(
            "## {} · {}\n\n{}\n\n> {}\n\n---\n\n",
            entry.type_label,
            entry.title,
            entry.link,
            to_markdown(&entry.description)
        ));
    }

    md
}
