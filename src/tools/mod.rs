//! Tool handlers shared by the MCP server and the command line.
//!
//! Handlers take the shared [`CorpusState`](crate::CorpusState) and return the
//! text shown to the user, including the status lines for "still loading",
//! "no query" and "no results".

pub mod books;
pub mod chapter;
pub mod export;
pub mod search;

pub use books::handle_list_books;
pub use chapter::{ReadChapterRequest, handle_read_chapter};
pub use export::{export_text, handle_export};
pub use search::{SearchOutcome, SearchRequest, handle_search, run_search};

/// Shown while the corpus load is still running.
pub const LOADING_MESSAGE: &str = "Loading books…";
/// Shown for a blank search box.
pub const EMPTY_QUERY_MESSAGE: &str = "Type a word or phrase, then search.";
/// Shown when a search completes without matches.
pub const NO_RESULTS_MESSAGE: &str = "No results found.";
/// Shown when the requested chapter has no verses.
pub const CHAPTER_NOT_FOUND_MESSAGE: &str = "Chapter not found.";
/// Shown when an export is requested without anything to export.
pub const NOTHING_TO_EXPORT_MESSAGE: &str = "Nothing to export yet. Run a search first.";
