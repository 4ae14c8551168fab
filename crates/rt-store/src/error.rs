//! Error types for table persistence.

use std::path::PathBuf;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while persisting or reading tables.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The table has no name and cannot be stored.
    #[error("table invalid")]
    TableInvalid,

    /// No table is stored under the name.
    #[error("table does not exist: {0}")]
    TableDoesNotExist(String),

    /// Another thread panicked while holding the store lock.
    #[error("store lock poisoned")]
    LockPoisoned,

    /// The backend name is not one of the supported ones.
    #[error("unknown store backend: {0} (expected file or kv)")]
    UnknownBackend(String),

    /// A file system operation failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// A table could not be encoded or decoded.
    #[error("table encoding: {0}")]
    Json(#[from] serde_json::Error),

    /// A CSV file could not be read or written.
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    /// The key-value database could not be opened.
    #[error("database: {0}")]
    Database(#[from] redb::DatabaseError),

    /// A key-value transaction could not be started.
    #[error("transaction: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// A key-value table could not be opened.
    #[error("database table: {0}")]
    Table(#[from] redb::TableError),

    /// A key-value read or write failed.
    #[error("storage: {0}")]
    Storage(#[from] redb::StorageError),

    /// A key-value transaction could not be committed.
    #[error("commit: {0}")]
    Commit(#[from] redb::CommitError),
}

impl StoreError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
