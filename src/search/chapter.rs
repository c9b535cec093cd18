//! Chapter view: every verse of one chapter, cleaned and highlighted.

use crate::corpus::Corpus;
use crate::text::{clean_verse_text, highlight};

/// What the chapter page asks for.
///
/// `verse` only selects an entry for emphasis and `query` only drives
/// highlighting; neither narrows the chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRequest {
    pub book: String,
    pub chapter: u32,
    pub verse: Option<u32>,
    pub query: Option<String>,
}

impl ChapterRequest {
    pub fn new(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse: None,
            query: None,
        }
    }
}

/// One rendered verse of a chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterEntry {
    pub verse: u32,
    /// `Book chapter:verse`.
    pub reference: String,
    /// Cleaned, escaped and highlighted text.
    pub html: String,
    pub emphasized: bool,
}

/// Builds the entries of `request.book` chapter `request.chapter`, ordered by
/// verse number. Duplicates are all kept, in corpus order.
pub fn chapter_view(corpus: &Corpus, request: &ChapterRequest) -> Vec<ChapterEntry> {
    let query = request.query.as_deref().map_or("", str::trim);

    corpus
        .chapter(&request.book, request.chapter)
        .into_iter()
        .map(|verse| {
            let cleaned = clean_verse_text(Some(&verse.text), Some(verse.verse));
            ChapterEntry {
                verse: verse.verse,
                reference: verse.reference(),
                html: highlight(&cleaned, query),
                emphasized: request.verse == Some(verse.verse),
            }
        })
        .collect()
}
