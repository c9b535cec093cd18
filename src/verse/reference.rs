//! Parsing of `Book chapter:verse` reference strings found in legacy records.

use regex::Regex;
use std::sync::LazyLock;

/// Optional leading space, book name of letters and spaces, `chapter:verse`,
/// optional trailing space. Anchored at both ends.
static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s?([\p{L}\s]+)(\d+):(\d+)\s?$").expect("valid reference regex")
});

/// Fields recovered from a reference string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    /// Trimmed book name, `None` when the name was only whitespace.
    pub book: Option<String>,
    pub chapter: u32,
    pub verse: u32,
}

/// Parses strings like `"Jubilees 4:1"`.
///
/// Book names containing digits or punctuation (`"1 Enoch 1:1"`, `"St. John 3:16"`)
/// do not match and yield `None`.
pub fn parse_reference(input: &str) -> Option<ParsedReference> {
    let caps = REFERENCE.captures(input)?;
    let book = caps[1].trim();
    Some(ParsedReference {
        book: (!book.is_empty()).then(|| book.to_string()),
        chapter: caps[2].parse().ok()?,
        verse: caps[3].parse().ok()?,
    })
}
