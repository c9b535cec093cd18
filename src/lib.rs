pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod export;
pub mod loader;
pub mod logging;
pub mod search;
pub mod server;
pub mod text;
pub mod tools;
pub mod types;
pub mod verse;
pub mod worker;

pub use config::{Config, LogFormat, SourceConfig};
pub use corpus::{Corpus, SourceBatch};
pub use error::{ConfigError, LoadError};
pub use search::{
    ChapterEntry, ChapterRequest, MAX_RESULTS, Query, SearchOptions, SearchQuery, SearchResults,
    chapter_view, matches,
};
pub use text::{clean_verse_text, escape_html, highlight, highlight_query};
pub use types::{ALL_BOOKS, BookFilter, MatchMode, UNKNOWN_BOOK, Verse};
pub use verse::{Normalizer, RawVerseRecord, normalize};
pub use worker::CorpusState;
