//! A store backed by an embedded `redb` key-value database.

use std::fs;
use std::path::{Path, PathBuf};

use redb::{Database, ReadableTable, TableDefinition};
use rt_core::{Meta, Table};
use serde::Deserialize;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::store::Backingstore;

/// Table name → JSON-encoded table.
const TABLES: TableDefinition<&str, &[u8]> = TableDefinition::new("tables");

/// Decodes only the metadata of a stored table.
#[derive(Deserialize)]
struct StoredMeta {
    meta: Meta,
}

/// Tables stored in a single database file.
///
/// Writes run in serialized transactions; reads see a consistent snapshot.
pub struct KvStore {
    db: Database,
    path: PathBuf,
}

impl KvStore {
    /// Open the database at `path`, creating it (and its directory) if needed.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(StoreError::io(parent))?;
        }

        let db = Database::create(&path)?;
        let write_txn = db.begin_write()?;
        write_txn.open_table(TABLES)?;
        write_txn.commit()?;

        debug!(path = %path.display(), "opened kv store");
        Ok(Self { db, path })
    }

    /// The database file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Backingstore for KvStore {
    fn save_table(&self, table: &Table) -> StoreResult<()> {
        if table.meta.name.is_empty() {
            return Err(StoreError::TableInvalid);
        }
        let encoded = serde_json::to_vec(table)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut tables = write_txn.open_table(TABLES)?;
            tables.insert(table.meta.name.as_str(), encoded.as_slice())?;
        }
        write_txn.commit()?;

        debug!(name = %table.meta.name, "saved table");
        Ok(())
    }

    fn get_table(&self, name: &str) -> StoreResult<Table> {
        let read_txn = self.db.begin_read()?;
        let tables = read_txn.open_table(TABLES)?;
        let table = match tables.get(name)? {
            Some(value) => serde_json::from_slice(value.value())?,
            None => return Err(StoreError::TableDoesNotExist(name.to_string())),
        };
        Ok(table)
    }

    fn delete_table(&self, name: &str) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        let removed = {
            let mut tables = write_txn.open_table(TABLES)?;
            tables.remove(name)?.is_some()
        };
        if !removed {
            write_txn.abort()?;
            return Err(StoreError::TableDoesNotExist(name.to_string()));
        }
        write_txn.commit()?;

        debug!(name, "deleted table");
        Ok(())
    }

    fn list_tables(&self) -> StoreResult<Vec<String>> {
        let read_txn = self.db.begin_read()?;
        let tables = read_txn.open_table(TABLES)?;

        let mut listing = Vec::new();
        for entry in tables.iter()? {
            let (_, value) = entry?;
            let stored: StoredMeta = serde_json::from_slice(value.value())?;
            listing.push(stored.meta.summary());
        }
        listing.sort();
        Ok(listing)
    }
}
