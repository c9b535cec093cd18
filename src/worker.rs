//! Background corpus loading and the shared state tool handlers read from.
//!
//! The corpus is loaded once, off the request path. Until the load finishes,
//! handlers see [`CorpusState::corpus`] return `None` and report "still
//! loading" rather than an empty result.

use crate::config::Config;
use crate::corpus::Corpus;
use crate::loader::load_corpus;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tokio::task::JoinHandle;

/// Shared, write-once corpus plus the configuration it was loaded with.
pub struct CorpusState {
    config: Config,
    corpus: OnceCell<Arc<Corpus>>,
}

impl std::fmt::Debug for CorpusState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorpusState")
            .field("sources", &self.config.sources.len())
            .field("loaded_verses", &self.corpus.get().map(|c| c.len()))
            .finish()
    }
}

impl CorpusState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            corpus: OnceCell::new(),
        }
    }

    /// State whose corpus is already available.
    pub fn with_corpus(config: Config, corpus: Corpus) -> Self {
        Self {
            config,
            corpus: OnceCell::new_with(Some(Arc::new(corpus))),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The corpus, or `None` while it is still loading.
    pub fn corpus(&self) -> Option<Arc<Corpus>> {
        self.corpus.get().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.corpus.initialized()
    }

    /// Loads the corpus if no load has completed yet, and returns it.
    pub async fn load(&self) -> Arc<Corpus> {
        self.corpus
            .get_or_init(|| async { Arc::new(load_corpus(&self.config).await) })
            .await
            .clone()
    }
}

/// Starts loading the corpus on the runtime without waiting for it.
pub fn spawn_load(state: Arc<CorpusState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let corpus = state.load().await;
        tracing::debug!("Corpus ready: {} verses", corpus.len());
    })
}
