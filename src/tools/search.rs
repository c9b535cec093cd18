//! Verse search handler.

use super::{EMPTY_QUERY_MESSAGE, LOADING_MESSAGE, NO_RESULTS_MESSAGE};
use crate::{
    corpus::Corpus,
    search::{Query, SearchOptions, SearchQuery, SearchResults},
    text::highlight_query,
    types::{BookFilter, MatchMode},
    worker::CorpusState,
};
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Word or phrase to search for
    pub query: String,
    /// Book to search within; omit or use "ALL" for every book
    #[serde(default)]
    pub book: Option<String>,
    /// Match whole words only (letter-only queries); defaults to the configured mode
    #[serde(default)]
    pub whole_word: Option<bool>,
    /// Maximum number of results to return (never above the configured cap)
    #[serde(default)]
    pub limit: Option<usize>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

/// What a search produced, keeping "not loaded yet" apart from "no matches".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    Loading,
    EmptyQuery,
    NoMatches,
    Found(SearchResults<'a>),
}

impl SearchOutcome<'_> {
    /// One-line status for the user.
    pub fn status(&self) -> String {
        match self {
            Self::Loading => LOADING_MESSAGE.to_string(),
            Self::EmptyQuery => EMPTY_QUERY_MESSAGE.to_string(),
            Self::NoMatches => NO_RESULTS_MESSAGE.to_string(),
            Self::Found(results) => results.status(),
        }
    }
}

/// Runs a search against `corpus`, or reports that it is not loaded yet.
pub fn run_search<'a>(
    corpus: Option<&'a Corpus>,
    request: &SearchRequest,
    options: &SearchOptions,
) -> SearchOutcome<'a> {
    let Some(corpus) = corpus else {
        return SearchOutcome::Loading;
    };

    let text = request.query.trim();
    if text.is_empty() {
        return SearchOutcome::EmptyQuery;
    }

    let query = SearchQuery::new(text)
        .with_book(BookFilter::parse(request.book.as_deref()))
        .with_mode(request_mode(request, options));

    let cap = options.result_cap();
    let options = SearchOptions {
        max_results: request.limit.map_or(cap, |limit| limit.clamp(1, cap)),
        ..options.clone()
    };

    let results = corpus.search(&query, &options);
    if results.total == 0 {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Found(results)
    }
}

fn request_mode(request: &SearchRequest, options: &SearchOptions) -> MatchMode {
    request
        .whole_word
        .map_or_else(|| options.default_mode(), MatchMode::from_whole_word)
}

/// Execute a search and format the outcome.
pub fn handle_search(state: &CorpusState, request: &SearchRequest) -> String {
    let corpus = state.corpus();
    let options = &state.config().search;
    match run_search(corpus.as_deref(), request, options) {
        SearchOutcome::Found(results) => {
            let mode = request_mode(request, options);
            match Query::with_options(&request.query, mode, options.skip_abbreviations) {
                Some(query) => format_search_results(&results, &query),
                None => results.status(),
            }
        }
        other => other.status(),
    }
}

/// Format search results: status line, then each reference with the spans the
/// query matched highlighted.
fn format_search_results(results: &SearchResults<'_>, query: &Query) -> String {
    let mut output = format!("{}\n\n", results.status());

    for (idx, verse) in results.matches.iter().enumerate() {
        let _ = writeln!(output, "{}. {}", idx + 1, verse.reference());
        let _ = writeln!(output, "   {}", highlight_query(&verse.text, query));
    }

    if results.truncated {
        let _ = writeln!(
            output,
            "\nShowing the first {} of {} matches. Narrow the search or pick a book.",
            results.len(),
            results.total
        );
    }

    output
}
