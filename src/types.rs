//! Core value types shared by the normalizer, matcher and presentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Book label used when neither the record, the source, nor a reference string names one.
pub const UNKNOWN_BOOK: &str = "Unknown";

/// Book filter value meaning "search every book".
pub const ALL_BOOKS: &str = "ALL";

/// A verse in canonical shape.
///
/// `(book, chapter, verse)` identifies a verse for display and linking, but the
/// corpus does not enforce uniqueness: duplicate entries are kept and rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verse {
    pub book: String,
    /// Zero when the source gave no usable chapter.
    pub chapter: u32,
    /// Zero when the source gave no usable verse number.
    pub verse: u32,
    pub text: String,
}

impl Verse {
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32, text: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
            text: text.into(),
        }
    }

    /// `Book chapter:verse`, as shown next to each result.
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse)
    }
}

impl fmt::Display for Verse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.reference(), self.text)
    }
}

/// Restricts a search to one book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BookFilter {
    #[default]
    All,
    Book(String),
}

impl BookFilter {
    /// Reads a filter value as the presentation layer hands it over.
    ///
    /// Missing, blank and `"ALL"` values all mean no filter.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("" | ALL_BOOKS) => Self::All,
            Some(book) => Self::Book(book.to_string()),
        }
    }

    pub fn admits(&self, book: &str) -> bool {
        match self {
            Self::All => true,
            Self::Book(wanted) => wanted == book,
        }
    }
}

impl fmt::Display for BookFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_BOOKS),
            Self::Book(book) => f.write_str(book),
        }
    }
}

/// How a query is compared against verse text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Case-insensitive containment.
    #[default]
    Substring,
    /// Case-insensitive match bounded by non-letters on both sides.
    WholeWord,
}

impl MatchMode {
    pub const fn from_whole_word(whole_word: bool) -> Self {
        if whole_word {
            Self::WholeWord
        } else {
            Self::Substring
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case(None, BookFilter::All)]
    #[case(Some(""), BookFilter::All)]
    #[case(Some("ALL"), BookFilter::All)]
    #[case(Some(" Jasher "), BookFilter::Book("Jasher".to_string()))]
    fn test_book_filter_parse(#[case] input: Option<&str>, #[case] expected: BookFilter) {
        check!(BookFilter::parse(input) == expected);
    }

    #[test]
    fn test_book_filter_admits() {
        let filter = BookFilter::Book("Jasher".to_string());
        check!(filter.admits("Jasher"));
        check!(!filter.admits("jasher"));
        check!(!filter.admits("Enoch"));
        check!(BookFilter::All.admits("Enoch"));
    }

    #[test]
    fn test_reference_format() {
        let verse = Verse::new("Enoch", 7, 3, "hello");
        check!(verse.reference() == "Enoch 7:3");
        check!(verse.to_string() == "Enoch 7:3 hello");
    }
}
