//! Match highlighting with HTML-safe output.
//!
//! The query is located in the unescaped text and every segment is escaped on
//! its way out. Matching the raw query against already-escaped text would miss
//! queries containing `&`, `<`, `>`, `"` or `'`, and could mark a span that
//! starts or ends inside an entity such as `&amp;`.

use super::escape::escape_html;
use crate::search::Query;
use regex::{Regex, RegexBuilder};
use std::ops::Range;

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Escapes `text` and wraps every case-insensitive literal occurrence of
/// `query` in `<mark>` tags, keeping the matched text's original casing.
///
/// An empty query returns the escaped text unmarked.
pub fn highlight(text: &str, query: &str) -> String {
    if query.is_empty() {
        return escape_html(text).into_owned();
    }
    let Some(pattern) = literal_pattern(query) else {
        return escape_html(text).into_owned();
    };
    mark_spans(text, pattern.find_iter(text).map(|found| found.range()))
}

/// Highlights what `query` actually matched: in whole-word mode only the
/// accepted word occurrences, otherwise the same as [`highlight`].
pub fn highlight_query(text: &str, query: &Query) -> String {
    match query.word_matches(text) {
        Some(words) => mark_spans(text, words.map(|found| found.range())),
        None => highlight(text, query.as_str()),
    }
}

/// Escapes `text`, wrapping each of the ordered, non-overlapping `spans`.
fn mark_spans(text: &str, spans: impl Iterator<Item = Range<usize>>) -> String {
    let mut output = String::with_capacity(text.len() + 32);
    let mut last = 0;
    for span in spans {
        output.push_str(&escape_html(&text[last..span.start]));
        output.push_str(MARK_OPEN);
        output.push_str(&escape_html(&text[span.clone()]));
        output.push_str(MARK_CLOSE);
        last = span.end;
    }
    output.push_str(&escape_html(&text[last..]));
    output
}

/// Compiles `query` as a case-insensitive literal. `None` only when the query
/// exceeds the regex size limit.
fn literal_pattern(query: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .map_err(|e| tracing::debug!("Highlight pattern rejected: {}", e))
        .ok()
}
