//! Selecting and opening a store.

use std::path::PathBuf;

use crate::error::{StoreError, StoreResult};
use crate::file::FileStore;
use crate::kv::KvStore;
use crate::store::Backingstore;

/// Which storage backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// One JSON file per table in a directory.
    #[default]
    File,
    /// An embedded key-value database file.
    Kv,
}

impl Backend {
    /// Where this backend keeps its data unless told otherwise.
    pub fn default_location(self) -> PathBuf {
        match self {
            Self::File => PathBuf::from("tables"),
            Self::Kv => PathBuf::from("tables.redb"),
        }
    }
}

impl std::str::FromStr for Backend {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" | "json" => Ok(Self::File),
            "kv" | "redb" => Ok(Self::Kv),
            _ => Err(StoreError::UnknownBackend(s.to_string())),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Kv => write!(f, "kv"),
        }
    }
}

/// Configuration for opening a store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// The backend to use.
    pub backend: Backend,
    /// Directory (file backend) or database file (kv backend).
    pub location: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(Backend::default())
    }
}

impl StoreConfig {
    /// Configuration for `backend` at its default location.
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            location: backend.default_location(),
        }
    }

    /// Set the location.
    pub fn with_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.location = location.into();
        self
    }
}

/// Open the store described by `config`.
pub fn open_store(config: &StoreConfig) -> StoreResult<Box<dyn Backingstore>> {
    Ok(match config.backend {
        Backend::File => Box::new(FileStore::open(&config.location)?),
        Backend::Kv => Box::new(KvStore::open(&config.location)?),
    })
}
