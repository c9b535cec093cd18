//! Query matching, result capping and the chapter view.

pub(crate) mod chapter;
pub(crate) mod matcher;
pub(crate) mod results;

pub use chapter::{ChapterEntry, ChapterRequest, chapter_view};
pub use matcher::{Query, is_word, matches};
pub use results::{MAX_RESULTS, SearchOptions, SearchQuery, SearchResults};
