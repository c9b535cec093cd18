//! Chapter reading handler.

use super::{CHAPTER_NOT_FOUND_MESSAGE, LOADING_MESSAGE};
use crate::{
    search::{ChapterEntry, ChapterRequest, chapter_view},
    worker::CorpusState,
};
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct ReadChapterRequest {
    /// Book name, e.g. "Jubilees"
    pub book: String,
    /// Chapter number
    pub chapter: u32,
    /// Verse to emphasize; does not narrow the chapter
    #[serde(default)]
    pub verse: Option<u32>,
    /// Text to highlight; does not filter verses
    #[serde(default)]
    pub query: Option<String>,
}

impl From<ReadChapterRequest> for ChapterRequest {
    fn from(request: ReadChapterRequest) -> Self {
        Self {
            book: request.book.trim().to_string(),
            chapter: request.chapter,
            verse: request.verse,
            query: request.query,
        }
    }
}

/// Render one chapter, or a status line when it is unavailable.
pub fn handle_read_chapter(state: &CorpusState, request: ReadChapterRequest) -> String {
    let Some(corpus) = state.corpus() else {
        return LOADING_MESSAGE.to_string();
    };

    let request = ChapterRequest::from(request);
    let entries = chapter_view(&corpus, &request);
    if entries.is_empty() {
        return CHAPTER_NOT_FOUND_MESSAGE.to_string();
    }

    format_chapter(&request, &entries)
}

/// A heading, then one line per verse; the emphasized verse is quoted.
fn format_chapter(request: &ChapterRequest, entries: &[ChapterEntry]) -> String {
    let mut output = format!("{} {}\n\n", request.book, request.chapter);
    for entry in entries {
        let marker = if entry.emphasized { "> " } else { "" };
        let _ = writeln!(output, "{}**{}** {}", marker, entry.reference, entry.html);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, Corpus, Verse};
    use assert2::check;

    fn request(book: &str, chapter: u32) -> ReadChapterRequest {
        ReadChapterRequest {
            book: book.to_string(),
            chapter,
            verse: None,
            query: None,
        }
    }

    #[test]
    fn test_loading() {
        let state = CorpusState::new(Config::default());
        check!(handle_read_chapter(&state, request("Enoch", 1)) == LOADING_MESSAGE);
    }

    #[test]
    fn test_not_found() {
        let state = CorpusState::with_corpus(Config::default(), Corpus::default());
        check!(handle_read_chapter(&state, request("Enoch", 1)) == CHAPTER_NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_render() {
        let corpus = Corpus::from_verses(vec![
            Verse::new("Enoch", 1, 2, "2And the watchers"),
            Verse::new("Enoch", 1, 1, "The words of blessing"),
        ]);
        let state = CorpusState::with_corpus(Config::default(), corpus);
        let output = handle_read_chapter(
            &state,
            ReadChapterRequest {
                verse: Some(2),
                query: Some("watchers".to_string()),
                ..request(" Enoch ", 1)
            },
        );
        check!(
            output
                == "Enoch 1\n\n\
                    **Enoch 1:1** The words of blessing\n\
                    > **Enoch 1:2** And the <mark>watchers</mark>\n"
        );
    }
}
