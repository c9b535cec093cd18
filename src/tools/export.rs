//! Export handler: the current match list as plain text.

use super::{LOADING_MESSAGE, NOTHING_TO_EXPORT_MESSAGE};
use super::search::{SearchOutcome, SearchRequest, run_search};
use crate::export::render_export;
use crate::worker::CorpusState;

/// The export body for a search outcome, or `None` when there is nothing to export.
pub fn export_text(outcome: &SearchOutcome<'_>) -> Option<String> {
    match outcome {
        SearchOutcome::Found(results) => Some(render_export(results.matches.iter().copied())),
        _ => None,
    }
}

/// Run the search and return its matches as export text.
pub fn handle_export(state: &CorpusState, request: &SearchRequest) -> String {
    let corpus = state.corpus();
    let outcome = run_search(corpus.as_deref(), request, &state.config().search);
    match (export_text(&outcome), outcome) {
        (Some(text), _) => text,
        (None, SearchOutcome::Loading) => LOADING_MESSAGE.to_string(),
        (None, _) => NOTHING_TO_EXPORT_MESSAGE.to_string(),
    }
}
