//! Unified multi-entity search
//!
//! One scorer behind both the header quick search and the full results
//! page, operating over the flattened property/room/page corpus.

pub mod engine;
pub mod highlight;
pub mod query;

pub use engine::{ScoredItem, SearchEngine, SearchOptions};
pub use highlight::{highlight, Segment};
pub use query::ParsedQuery;
