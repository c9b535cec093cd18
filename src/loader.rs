//! Reading the per-book JSON files into a [`Corpus`].
//!
//! Sources are read concurrently and joined before anything is normalized. A
//! source that cannot be read or parsed is logged and contributes nothing;
//! the remaining books still load.

use crate::config::Config;
use crate::corpus::{Corpus, SourceBatch};
use crate::error::LoadError;
use crate::verse::{Normalizer, RawVerseRecord};
use futures::future::join_all;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Parses a source file body. The top-level value must be an array; elements
/// that are not objects become empty records.
pub fn parse_records(path: &Path, bytes: &[u8]) -> Result<Vec<RawVerseRecord>, LoadError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Array(items) => Ok(items.into_iter().map(RawVerseRecord::from_value).collect()),
        _ => Err(LoadError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

/// Reads and parses one source file.
pub async fn load_source(path: &Path) -> Result<Vec<RawVerseRecord>, LoadError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    parse_records(path, &bytes)
}

/// Loads every configured source concurrently, in configuration order.
///
/// Never fails: a broken source becomes an empty batch.
pub async fn load_batches(config: &Config) -> Vec<SourceBatch> {
    let sources: Vec<(PathBuf, Option<String>)> = config
        .sources
        .iter()
        .map(|source| (config.source_path(source), source.default_book.clone()))
        .collect();

    let loads = sources.into_iter().map(|(path, default_book)| async move {
        let records = match load_source(&path).await {
            Ok(records) => {
                tracing::debug!("Read {} record(s) from {}", records.len(), path.display());
                records
            }
            Err(e) => {
                tracing::warn!("Skipping source: {}", e);
                Vec::new()
            }
        };
        SourceBatch::new(default_book, records)
    });

    join_all(loads).await
}

/// Loads and normalizes the whole corpus.
pub async fn load_corpus(config: &Config) -> Corpus {
    let start = Instant::now();
    let batches = load_batches(config).await;
    let corpus = Corpus::from_batches(batches, &Normalizer::new(config.fallback_book.clone()));

    tracing::info!(
        "Loaded {} verses from {} source(s) in {:?}",
        corpus.len(),
        config.sources.len(),
        start.elapsed()
    );
    corpus
}
