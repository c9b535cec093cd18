//! Best-effort extraction of canonical verses from raw records.
//!
//! Each canonical field is resolved from an ordered list of sources; the first
//! one that yields a usable value wins:
//!
//! | field   | precedence                                                          |
//! |---------|---------------------------------------------------------------------|
//! | book    | `book` → source default → reference string → fallback label          |
//! | text    | `text` → `content` → `""`                                            |
//! | chapter | `chapter` → reference string → `0`                                   |
//! | verse   | `verse` → reference string → `0`                                     |
//!
//! The reference string is the first present field among [`REFERENCE_KEYS`],
//! with numbers stringified. If that field does not parse, later keys are not
//! consulted.

use super::raw::RawVerseRecord;
use super::reference::{ParsedReference, parse_reference};
use crate::types::{UNKNOWN_BOOK, Verse};
use std::borrow::Cow;

/// Fields that may hold a `Book chapter:verse` string, in lookup order.
pub(crate) const REFERENCE_KEYS: [&str; 4] = ["ref", "reference", "id", "verseRef"];

/// Fields that may hold the verse text, in lookup order.
const TEXT_KEYS: [&str; 2] = ["text", "content"];

/// Converts raw records into [`Verse`] values.
///
/// Normalization is total: every input produces a verse with a non-empty book,
/// non-negative chapter and verse numbers, and a (possibly empty) text.
#[derive(Debug, Clone)]
pub struct Normalizer {
    fallback_book: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            fallback_book: UNKNOWN_BOOK.to_string(),
        }
    }
}

impl Normalizer {
    /// Creates a normalizer with a custom last-resort book label. A blank label
    /// falls back to [`UNKNOWN_BOOK`].
    pub fn new(fallback_book: impl Into<String>) -> Self {
        let fallback_book = fallback_book.into();
        if fallback_book.trim().is_empty() {
            Self::default()
        } else {
            Self { fallback_book }
        }
    }

    pub fn fallback_book(&self) -> &str {
        &self.fallback_book
    }

    pub fn normalize(&self, raw: &RawVerseRecord, default_book: Option<&str>) -> Verse {
        let mut book = raw
            .text_field("book")
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .or_else(|| {
                default_book
                    .map(str::trim)
                    .filter(|b| !b.is_empty())
                    .map(str::to_string)
            });

        let text = TEXT_KEYS
            .iter()
            .find_map(|key| raw.text_field(key))
            .map(Cow::into_owned)
            .unwrap_or_default();

        let mut chapter = raw.number_field("chapter");
        let mut verse = raw.number_field("verse");

        if (book.is_none() || chapter.is_none() || verse.is_none())
            && let Some(parsed) = reference_of(raw)
        {
            book = book.or(parsed.book);
            chapter = chapter.or(Some(parsed.chapter));
            verse = verse.or(Some(parsed.verse));
        }

        Verse {
            book: book.unwrap_or_else(|| self.fallback_book.clone()),
            chapter: chapter.unwrap_or(0),
            verse: verse.unwrap_or(0),
            text,
        }
    }
}

/// Normalizes with the default fallback label.
pub fn normalize(raw: &RawVerseRecord, default_book: Option<&str>) -> Verse {
    Normalizer::default().normalize(raw, default_book)
}

fn reference_of(raw: &RawVerseRecord) -> Option<ParsedReference> {
    let key = REFERENCE_KEYS
        .into_iter()
        .find(|key| raw.get(key).is_some())?;
    raw.text_field(key)
        .and_then(|reference| parse_reference(&reference))
}
