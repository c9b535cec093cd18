//! Substring and whole-word matching of a query against verse text.

use crate::types::{MatchMode, Verse};
use regex::{Match, Regex, RegexBuilder};

/// A query prepared for repeated matching across the corpus.
///
/// Whole-word mode only applies to letter-only queries; anything containing
/// digits, punctuation or whitespace silently falls back to substring
/// matching.
#[derive(Debug, Clone)]
pub struct Query {
    text: String,
    folded: String,
    kind: QueryKind,
}

#[derive(Debug, Clone)]
enum QueryKind {
    Substring,
    WholeWord {
        pattern: Regex,
        skip_abbreviations: bool,
    },
}

impl Query {
    /// Prepares `query` for matching. Returns `None` for a blank query, which
    /// matches nothing.
    ///
    /// In whole-word mode capitalized abbreviation-like occurrences are skipped;
    /// see [`Query::with_options`].
    pub fn compile(query: &str, mode: MatchMode) -> Option<Self> {
        Self::with_options(query, mode, true)
    }

    /// Like [`Query::compile`], choosing whether whole-word mode ignores
    /// occurrences shaped like a cross-reference abbreviation: a capitalized
    /// word directly followed by a period and then a capital letter or digit
    /// (`"Test. This"`, `"Gen. 4"`).
    pub fn with_options(query: &str, mode: MatchMode, skip_abbreviations: bool) -> Option<Self> {
        let text = query.trim();
        if text.is_empty() {
            return None;
        }

        let kind = match mode {
            MatchMode::WholeWord if is_word(text) => RegexBuilder::new(&regex::escape(text))
                .case_insensitive(true)
                .build()
                .map_or(QueryKind::Substring, |pattern| QueryKind::WholeWord {
                    pattern,
                    skip_abbreviations,
                }),
            _ => QueryKind::Substring,
        };

        Some(Self {
            text: text.to_string(),
            folded: text.to_lowercase(),
            kind,
        })
    }

    /// The trimmed query as entered.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The mode actually in effect after the letter-only check.
    pub const fn mode(&self) -> MatchMode {
        match self.kind {
            QueryKind::Substring => MatchMode::Substring,
            QueryKind::WholeWord { .. } => MatchMode::WholeWord,
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        match &self.kind {
            QueryKind::Substring => text.to_lowercase().contains(&self.folded),
            QueryKind::WholeWord { .. } => self.is_match_folded(text, ""),
        }
    }

    /// Matches against `text` whose lower-cased form has been computed ahead of
    /// time. Substring mode only reads `folded`; whole-word mode only reads `text`.
    pub(crate) fn is_match_folded(&self, text: &str, folded: &str) -> bool {
        match self.word_matches(text) {
            Some(mut words) => words.next().is_some(),
            None => folded.contains(&self.folded),
        }
    }

    /// The occurrences whole-word mode accepts, in order. `None` in substring
    /// mode, where every case-insensitive occurrence counts.
    pub fn word_matches<'t>(&self, text: &'t str) -> Option<impl Iterator<Item = Match<'t>>> {
        let QueryKind::WholeWord {
            pattern,
            skip_abbreviations,
        } = &self.kind
        else {
            return None;
        };
        let skip_abbreviations = *skip_abbreviations;

        Some(pattern.find_iter(text).filter(move |found| {
            let before = text[..found.start()].chars().next_back();
            let rest = &text[found.end()..];
            let after = rest.chars().next();
            let bounded = !before.is_some_and(char::is_alphabetic)
                && !after.is_some_and(char::is_alphabetic);
            bounded && !(skip_abbreviations && is_abbreviation(found.as_str(), rest))
        }))
    }
}

/// True when `query` is non-empty and made only of letters.
pub fn is_word(query: &str) -> bool {
    !query.is_empty() && query.chars().all(char::is_alphabetic)
}

fn is_abbreviation(word: &str, rest: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
        && rest.strip_prefix('.').is_some_and(|tail| {
            tail.trim_start()
                .chars()
                .next()
                .is_some_and(|c| c.is_uppercase() || c.is_ascii_digit())
        })
}

/// Decides whether `verse` matches `query` under `mode`.
///
/// Blank queries never match. Book filtering is the caller's precondition;
/// see [`Corpus::search`](crate::Corpus::search).
pub fn matches(verse: &Verse, query: &str, mode: MatchMode) -> bool {
    Query::compile(query, mode).is_some_and(|q| q.is_match(&verse.text))
}
