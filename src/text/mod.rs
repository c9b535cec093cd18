//! Text surgery on verse bodies: editorial cleanup, HTML escaping and match highlighting.

pub(crate) mod clean;
pub(crate) mod escape;
pub(crate) mod highlight;

pub use clean::{
    clean_verse_text, collapse_whitespace, normalize_line_endings, split_digit_letter,
    strip_editorial_notes, strip_verse_number,
};
pub use escape::escape_html;
pub use highlight::{MARK_CLOSE, MARK_OPEN, highlight, highlight_query};
