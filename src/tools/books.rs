//! Book listing handler.

use super::LOADING_MESSAGE;
use crate::worker::CorpusState;
use std::fmt::Write as _;

/// List the loaded books with their verse counts.
pub fn handle_list_books(state: &CorpusState) -> String {
    let Some(corpus) = state.corpus() else {
        return LOADING_MESSAGE.to_string();
    };

    let mut output = format!("Loaded {} verses.\n", corpus.len());
    let books = corpus.books();
    if books.is_empty() {
        return output;
    }

    output.push_str("\nBooks:\n");
    for book in books {
        let count = corpus.iter().filter(|v| v.book == book).count();
        let _ = writeln!(output, "• {} ({} verses)", book, count);
    }
    output
}
