//! Shared test fixtures and utilities for integration tests.
//!
//! # Test Isolation Strategy
//!
//! Each test gets a fresh temporary data directory holding the three book
//! files, written in the different record shapes the real sources use:
//! - `jubilees.json`: reference strings (`ref`) and numeric fields
//! - `jasher.json`: string chapter/verse numbers and `content` instead of `text`
//! - `enoch.json`: explicit fields, duplicated verse numbers and editorial notes
//!
//! # Available Fixtures
//!
//! - `library`: the three books plus a [`Config`] pointing at them

use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use verse_search::{Config, CorpusState, loader::load_corpus};

/// A temporary directory for test isolation, removed when dropped.
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content, creating parent directories as needed.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
    }

    pub fn remove_file(&self, path: &str) {
        std::fs::remove_file(self.root.join(path))
            .unwrap_or_else(|e| panic!("Failed to remove file '{}': {}", path, e));
    }
}

pub const JUBILEES: &str = r#"[
  { "ref": "Jubilees 1:1", "text": "In the first year of the exodus of the children of Israel out of Egypt" },
  { "ref": "Jubilees 1:2", "text": "And Moses went up into the mount of God" },
  { "chapter": 4, "verse": 1, "text": "And in the third week in the second jubilee she gave birth to Cain" },
  { "reference": "Jubilees 4:2", "text": "And in the first year of the third jubilee, Cain slew Abel" }
]"#;

pub const JASHER: &str = r#"[
  { "book": "Jasher", "chapter": "1", "verse": "1", "content": "And God said, Let us make man in our image" },
  { "book": "Jasher", "chapter": "1", "verse": "2", "content": "And God formed man from the ground" },
  { "chapter": "2", "verse": "1", "content": "And it was in the hundred and thirtieth year" }
]"#;

pub const ENOCH: &str = r#"[
  { "chapter": 1, "verse": 2, "text": "2And he took up his parable and said. Cf. Num xxiv 3. Enoch a righteous man" },
  { "chapter": 1, "verse": 1, "text": "The words of the blessing of Enoch, wherewith he blessed the elect [and] righteous" },
  { "chapter": 1, "verse": 3, "text": "Concerning the elect I said. 3And took up my parable concerning them" },
  { "chapter": 6, "verse": 1, "text": "Test. This is a test of the watchers" }
]"#;

/// The three books on disk and a config that loads them.
pub struct Library {
    pub workspace: TempWorkspace,
    pub config: Config,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl Library {
    /// Loads the corpus and wraps it in a ready state.
    pub async fn loaded_state(&self) -> CorpusState {
        let corpus = load_corpus(&self.config).await;
        CorpusState::with_corpus(self.config.clone(), corpus)
    }
}

#[fixture]
pub fn library() -> Library {
    let workspace = TempWorkspace::new();
    workspace.create_file("jubilees.json", JUBILEES);
    workspace.create_file("jasher.json", JASHER);
    workspace.create_file("enoch.json", ENOCH);

    let config = Config {
        data_dir: workspace.path().to_path_buf(),
        ..Config::default()
    };

    Library { workspace, config }
}
