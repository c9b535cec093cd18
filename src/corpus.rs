//! The in-memory verse collection.

use crate::search::{Query, SearchOptions, SearchQuery, SearchResults};
use crate::types::Verse;
use crate::verse::{Normalizer, RawVerseRecord};
use std::collections::BTreeSet;

/// Raw records from one source file, tagged with that file's book label.
#[derive(Debug, Clone, Default)]
pub struct SourceBatch {
    pub default_book: Option<String>,
    pub records: Vec<RawVerseRecord>,
}

impl SourceBatch {
    pub fn new(default_book: Option<String>, records: Vec<RawVerseRecord>) -> Self {
        Self {
            default_book,
            records,
        }
    }
}

/// All normalized verses, in source order then record order.
///
/// Built once and never mutated; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    verses: Vec<Verse>,
    /// Lower-cased text of `verses[i]`, for substring search.
    folded: Vec<String>,
}

impl Corpus {
    pub fn from_verses(verses: Vec<Verse>) -> Self {
        let folded = verses.iter().map(|v| v.text.to_lowercase()).collect();
        Self { verses, folded }
    }

    /// Normalizes every record of every batch, keeping batch order.
    pub fn from_batches(
        batches: impl IntoIterator<Item = SourceBatch>,
        normalizer: &Normalizer,
    ) -> Self {
        let verses = batches
            .into_iter()
            .flat_map(move |batch| {
                let default_book = batch.default_book;
                batch
                    .records
                    .into_iter()
                    .map(move |raw| normalizer.normalize(&raw, default_book.as_deref()))
            })
            .collect();
        Self::from_verses(verses)
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Verse> {
        self.verses.iter()
    }

    /// Distinct book names, sorted.
    pub fn books(&self) -> Vec<&str> {
        self.verses
            .iter()
            .map(|v| v.book.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Verses of one chapter sorted by verse number; ties keep corpus order.
    pub fn chapter(&self, book: &str, chapter: u32) -> Vec<&Verse> {
        let mut verses: Vec<&Verse> = self
            .verses
            .iter()
            .filter(|v| v.book == book && v.chapter == chapter)
            .collect();
        verses.sort_by_key(|v| v.verse);
        verses
    }

    /// Applies the book filter, then the text match, and caps the result.
    ///
    /// A blank query yields an empty result.
    pub fn search(&self, query: &SearchQuery, options: &SearchOptions) -> SearchResults<'_> {
        let Some(compiled) =
            Query::with_options(&query.text, query.mode, options.skip_abbreviations)
        else {
            return SearchResults::empty();
        };

        let matches: Vec<&Verse> = self
            .verses
            .iter()
            .zip(&self.folded)
            .filter(|(verse, _)| query.book.admits(&verse.book))
            .filter(|(verse, folded)| compiled.is_match_folded(&verse.text, folded))
            .map(|(verse, _)| verse)
            .collect();

        let results = SearchResults::capped(matches, options.result_cap());
        tracing::debug!(
            "Search '{}' ({:?}, book {}): {} match(es), returning {}",
            compiled.as_str(),
            compiled.mode(),
            query.book,
            results.total,
            results.len()
        );
        results
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Verse;
    type IntoIter = std::slice::Iter<'a, Verse>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
