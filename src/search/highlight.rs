//! Match highlighting
//!
//! Marks every case-insensitive occurrence of the query words inside a
//! result excerpt, preserving the original casing and all non-matched
//! text. Overlapping and adjacent ranges are merged so no character is
//! ever marked twice.

use super::query::ParsedQuery;
use regex::RegexBuilder;
use serde::Serialize;

/// A run of excerpt text, either matched or plain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Segment {
            text: text.to_string(),
            highlighted: false,
        }
    }

    fn matched(text: &str) -> Self {
        Segment {
            text: text.to_string(),
            highlighted: true,
        }
    }
}

/// Split `text` into highlighted and plain segments for the given query.
/// With no usable query words the whole text comes back as one plain
/// segment.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    let parsed = ParsedQuery::parse(query);
    if parsed.is_empty() || text.is_empty() {
        return vec![Segment::plain(text)];
    }

    // Longest words first so the alternation prefers the longest match
    // at any position.
    let mut words: Vec<&String> = parsed.words.iter().collect();
    words.sort_by_key(|w| std::cmp::Reverse(w.len()));
    let pattern = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");

    let matcher = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re,
        Err(_) => return vec![Segment::plain(text)],
    };

    // Collect and merge ranges; find_iter is non-overlapping but two
    // different words can abut, and a merged run must stay one mark.
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for m in matcher.find_iter(text) {
        match ranges.last_mut() {
            Some(last) if m.start() <= last.1 => {
                if m.end() > last.1 {
                    last.1 = m.end();
                }
            }
            _ => ranges.push((m.start(), m.end())),
        }
    }

    if ranges.is_empty() {
        return vec![Segment::plain(text)];
    }

    let mut segments = Vec::new();
    let mut cursor = 0usize;
    for (start, end) in ranges {
        if cursor < start {
            segments.push(Segment::plain(&text[cursor..start]));
        }
        segments.push(Segment::matched(&text[start..end]));
        cursor = end;
    }
    if cursor < text.len() {
        segments.push(Segment::plain(&text[cursor..]));
    }

    segments
}

/// Render segments with markdown emphasis, for CLI output
pub fn to_markdown(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.highlighted {
            out.push_str("**");
            out.push_str(&segment.text);
            out.push_str("**");
        } else {
            out.push_str(&segment.text);
        }
    }
    out
}
