//! Search requests and capped result sets.

use crate::types::{BookFilter, MatchMode, Verse};
use serde::{Deserialize, Deserializer};

/// Maximum number of matches handed to the presentation layer.
pub const MAX_RESULTS: usize = 500;

/// Search tuning, read from the `[search]` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Cap on returned matches. Zero is read as one.
    #[serde(deserialize_with = "at_least_one")]
    pub max_results: usize,
    /// Default mode when a request does not say.
    pub whole_word: bool,
    /// Whether whole-word mode ignores `Word.`-before-capital occurrences.
    pub skip_abbreviations: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS,
            whole_word: false,
            skip_abbreviations: true,
        }
    }
}

impl SearchOptions {
    pub const fn default_mode(&self) -> MatchMode {
        MatchMode::from_whole_word(self.whole_word)
    }

    /// The effective cap, never below one.
    pub fn result_cap(&self) -> usize {
        self.max_results.max(1)
    }
}

fn at_least_one<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    usize::deserialize(deserializer).map(|n| n.max(1))
}

/// One search invocation. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub book: BookFilter,
    pub mode: MatchMode,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            book: BookFilter::All,
            mode: MatchMode::Substring,
        }
    }

    #[must_use]
    pub fn with_book(mut self, book: BookFilter) -> Self {
        self.book = book;
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Matches in corpus order, cut off at the cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults<'a> {
    pub matches: Vec<&'a Verse>,
    /// Number of matches before capping.
    pub total: usize,
    /// True when `total` exceeded the cap.
    pub truncated: bool,
}

impl<'a> SearchResults<'a> {
    /// Caps `matches` at `cap` entries, recording whether anything was dropped.
    pub fn capped(mut matches: Vec<&'a Verse>, cap: usize) -> Self {
        let total = matches.len();
        let truncated = total > cap;
        matches.truncate(cap);
        Self {
            matches,
            total,
            truncated,
        }
    }

    pub fn empty() -> Self {
        Self::capped(Vec::new(), 0)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// `Found N result(s).`, with a `+` after N when the list was truncated.
    pub fn status(&self) -> String {
        format!(
            "Found {}{} result(s).",
            self.matches.len(),
            if self.truncated { "+" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case(600, 500, 500, true)]
    #[case(501, 500, 500, true)]
    #[case(500, 500, 500, false)]
    #[case(3, 500, 3, false)]
    #[case(0, 500, 0, false)]
    fn test_capping(
        #[case] found: usize,
        #[case] cap: usize,
        #[case] kept: usize,
        #[case] truncated: bool,
    ) {
        let verse = Verse::new("Enoch", 1, 1, "x");
        let results = SearchResults::capped(vec![&verse; found], cap);
        check!(results.len() == kept);
        check!(results.total == found);
        check!(results.truncated == truncated);
    }

    #[test]
    fn test_status() {
        let verse = Verse::new("Enoch", 1, 1, "x");
        check!(SearchResults::capped(vec![&verse; 600], 500).status() == "Found 500+ result(s).");
        check!(SearchResults::capped(vec![&verse; 2], 500).status() == "Found 2 result(s).");
    }

    #[test]
    fn test_options_default_mode() {
        let options = SearchOptions {
            whole_word: true,
            ..SearchOptions::default()
        };
        check!(options.default_mode() == MatchMode::WholeWord);
        check!(SearchOptions::default().max_results == MAX_RESULTS);
    }

    #[test]
    fn test_zero_cap_is_one() {
        let options = SearchOptions {
            max_results: 0,
            ..SearchOptions::default()
        };
        check!(options.result_cap() == 1);
    }
}
