//! Configuration file loading.

use crate::error::ConfigError;
use crate::search::SearchOptions;
use crate::types::UNKNOWN_BOOK;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Top-level configuration. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory that relative source paths are resolved against.
    pub data_dir: PathBuf,
    /// Book label for records that name no book and come from an unlabeled source.
    pub fallback_book: String,
    pub log_format: LogFormat,
    pub search: SearchOptions,
    /// Source files, concatenated in this order.
    pub sources: Vec<SourceConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub default_book: Option<String>,
}

impl SourceConfig {
    pub fn new(path: impl Into<PathBuf>, default_book: Option<&str>) -> Self {
        Self {
            path: path.into(),
            default_book: default_book.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            fallback_book: UNKNOWN_BOOK.to_string(),
            log_format: LogFormat::default(),
            search: SearchOptions::default(),
            sources: default_sources(),
        }
    }
}

fn default_sources() -> Vec<SourceConfig> {
    vec![
        SourceConfig::new("jubilees.json", Some("Jubilees")),
        SourceConfig::new("jasher.json", Some("Jasher")),
        SourceConfig::new("enoch.json", Some("Enoch")),
    ]
}

impl Config {
    /// Loads the config from wherever [`Config::resolve_path`] points, or
    /// returns built-in defaults when there is no file.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::resolve_path(path) {
            Some(path) => Self::load_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Picks the config file to read.
    ///
    /// An explicit `path` is always returned (after `~` expansion) and must
    /// exist when loaded. Without one, the default location
    /// (`~/.config/verse-search/config.toml` on Linux) is used if present.
    pub fn resolve_path(path: Option<&Path>) -> Option<PathBuf> {
        match path {
            Some(path) => Some(PathBuf::from(expand_tilde(&path.to_string_lossy()).as_ref())),
            None => Self::default_path().filter(|p| p.is_file()),
        }
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("verse-search").join("config.toml"))
    }

    /// Resolves a source path: `~` is expanded, relative paths are joined onto `data_dir`.
    pub fn source_path(&self, source: &SourceConfig) -> PathBuf {
        let path = PathBuf::from(expand_tilde(&source.path.to_string_lossy()).as_ref());
        if path.is_absolute() {
            path
        } else {
            let data_dir = expand_tilde(&self.data_dir.to_string_lossy()).into_owned();
            Path::new(&data_dir).join(path)
        }
    }
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
