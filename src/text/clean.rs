//! Removal of transcription artifacts from verse text.
//!
//! [`clean_verse_text`] runs the steps below in a fixed order; the later
//! regex-based removals assume line endings are already normalized and stray
//! verse numbers are already gone.
//!
//! 1. [`normalize_line_endings`]
//! 2. [`strip_verse_number`]
//! 3. [`split_digit_letter`]
//! 4. [`strip_editorial_notes`]
//! 5. [`collapse_whitespace`]

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Characters that may legitimately follow a duplicated verse number: any
/// letter, straight or curly quotes, or an opening parenthesis.
macro_rules! verse_start {
    () => {
        r#"[\p{L}"'(“‘]"#
    };
}

static NUMBER_AT_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(r"^\s*(\d+)\s*(", verse_start!(), ")")).expect("valid start regex")
});

static NUMBER_AFTER_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(r"\n[ \t]*(\d+)\s*(", verse_start!(), ")")).expect("valid break regex")
});

static NUMBER_AFTER_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(r"([.!?;:])\s*(\d+)\s*(", verse_start!(), ")"))
        .expect("valid punctuation regex")
});

static DIGIT_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)(\p{L})").expect("valid digit-letter regex"));

/// Cross-references, variant readings and corruption notes, each bounded so a
/// missing period cannot swallow the rest of the verse.
static EDITORIAL_NOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\bCf\.[^.]{0,200}\.",
        r"|\bRead\b[^.]{0,200}\.",
        r"|\bAccording\s+to\b[^.]{0,240}\.",
        r"|\bText\s+corrupt\.",
    ))
    .expect("valid editorial note regex")
});

static BRACKETED_ASIDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]{0,120}\]").expect("valid bracket regex"));

/// Cleans raw verse text for display.
///
/// `None` yields an empty string. `verse_number` enables removal of a
/// duplicated verse number; `None` or `Some(0)` skips that step.
pub fn clean_verse_text(raw: Option<&str>, verse_number: Option<u32>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    let text = normalize_line_endings(raw);
    let text = match verse_number {
        Some(number) => strip_verse_number(&text, number).into_owned(),
        None => text.into_owned(),
    };
    let text = split_digit_letter(&text);
    let text = strip_editorial_notes(&text);
    collapse_whitespace(&text)
}

/// Collapses CRLF and lone CR into LF.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Removes a copy of `number` that the source left inside the verse text.
///
/// The number is only removed at the start of the text, right after a line
/// break, or right after `. ! ? ; :`, and only when it is followed by optional
/// whitespace and then a letter, quote or opening parenthesis. Removal after
/// punctuation leaves a single space behind. A `number` of zero is ignored.
pub fn strip_verse_number(text: &str, number: u32) -> Cow<'_, str> {
    if number == 0 {
        return Cow::Borrowed(text);
    }
    let is_target = |caps: &Captures<'_>, group: usize| caps[group].parse::<u32>() == Ok(number);

    let text = NUMBER_AT_START.replace(text, |caps: &Captures<'_>| {
        if is_target(caps, 1) {
            caps[2].to_string()
        } else {
            caps[0].to_string()
        }
    });
    let text = replace_all_owned(text, &NUMBER_AFTER_BREAK, |caps| {
        if is_target(caps, 1) {
            format!("\n{}", &caps[2])
        } else {
            caps[0].to_string()
        }
    });
    replace_all_owned(text, &NUMBER_AFTER_PUNCTUATION, |caps| {
        if is_target(caps, 2) {
            format!("{} {}", &caps[1], &caps[3])
        } else {
            caps[0].to_string()
        }
    })
}

/// Separates a digit glued to a following letter (`3And` → `3 And`).
pub fn split_digit_letter(text: &str) -> Cow<'_, str> {
    DIGIT_LETTER.replace_all(text, "${1} ${2}")
}

/// Drops bracketed asides, `*` markers and footnote fragments.
///
/// Asides and markers go first so a note interrupted by one is still seen
/// whole. Note removal repeats until nothing matches, since removing one note
/// can close the gap inside another.
pub fn strip_editorial_notes(text: &str) -> Cow<'_, str> {
    let text = BRACKETED_ASIDE.replace_all(text, " ");
    let mut text = if text.contains('*') {
        Cow::Owned(text.replace('*', " "))
    } else {
        text
    };
    while EDITORIAL_NOTE.is_match(&text) {
        text = Cow::Owned(EDITORIAL_NOTE.replace_all(&text, " ").into_owned());
    }
    text
}

/// Collapses every whitespace run into one space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Applies `replace_all` to a `Cow` without giving up the borrow when nothing matches.
fn replace_all_owned<'t>(
    text: Cow<'t, str>,
    pattern: &Regex,
    replacer: impl FnMut(&Captures<'_>) -> String,
) -> Cow<'t, str> {
    match text {
        Cow::Borrowed(borrowed) => pattern.replace_all(borrowed, replacer),
        Cow::Owned(owned) => Cow::Owned(pattern.replace_all(&owned, replacer).into_owned()),
    }
}
