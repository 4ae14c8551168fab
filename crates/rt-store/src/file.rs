//! A store that keeps one JSON file per table in a directory.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use rt_core::Table;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::io::{read_table_json, write_table_json};
use crate::store::Backingstore;

/// A table and the file it was last read from or written to.
#[derive(Debug)]
struct Stored {
    path: PathBuf,
    table: Table,
}

type Index = HashMap<String, Stored>;

/// Tables stored as `<hash>.json` files in one directory.
///
/// All tables are read into memory when the store is opened. Saves and
/// deletes update the file and the in-memory index under one lock.
///
/// Tables found under any other `*.json` name are indexed too. Saving such a
/// table moves it to its `<hash>.json` file and deleting it removes the file
/// it came from.
#[derive(Debug)]
pub struct FileStore {
    location: PathBuf,
    tables: Mutex<Index>,
}

impl FileStore {
    /// Open the store in `location`, creating the directory if needed.
    ///
    /// JSON files that do not decode as a table are skipped. When two files
    /// hold the same table name, the `<hash>.json` file wins.
    pub fn open(location: impl Into<PathBuf>) -> StoreResult<Self> {
        let location = location.into();
        fs::create_dir_all(&location).map_err(StoreError::io(&location))?;

        let mut paths = Vec::new();
        let entries = fs::read_dir(&location).map_err(StoreError::io(&location))?;
        for entry in entries {
            let path = entry.map_err(StoreError::io(&location))?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        // read_dir order is unspecified
        paths.sort();

        let mut tables = Index::new();
        for path in paths {
            let table = match read_table_json(&path) {
                Ok(table) => table,
                Err(err) => {
                    warn!(path = %path.display(), %err, "skipping unreadable table file");
                    continue;
                }
            };
            let canonical = path == hash_path(&location, &table);
            match tables.entry(table.meta.name.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(Stored { path, table });
                }
                Entry::Occupied(mut slot) => {
                    let ignored = if canonical {
                        slot.insert(Stored { path, table }).path
                    } else {
                        path
                    };
                    warn!(
                        name = %slot.key(),
                        ignored = %ignored.display(),
                        "duplicate table name"
                    );
                }
            }
        }

        debug!(location = %location.display(), tables = tables.len(), "opened file store");
        Ok(Self {
            location,
            tables: Mutex::new(tables),
        })
    }

    /// The directory holding the table files.
    pub fn location(&self) -> &Path {
        &self.location
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Index>> {
        self.tables.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

fn hash_path(location: &Path, table: &Table) -> PathBuf {
    location.join(format!("{}.json", table.hash()))
}

impl Backingstore for FileStore {
    fn save_table(&self, table: &Table) -> StoreResult<()> {
        let mut tables = self.lock()?;
        if table.meta.name.is_empty() {
            return Err(StoreError::TableInvalid);
        }

        let path = hash_path(&self.location, table);
        write_table_json(&path, table)?;
        let previous = tables.insert(
            table.meta.name.clone(),
            Stored {
                path: path.clone(),
                table: table.clone(),
            },
        );
        if let Some(old) = previous.filter(|old| old.path != path) {
            match fs::remove_file(&old.path) {
                Err(err) if err.kind() != std::io::ErrorKind::NotFound => {
                    return Err(StoreError::io(&old.path)(err));
                }
                _ => debug!(path = %old.path.display(), "removed superseded table file"),
            }
        }
        debug!(name = %table.meta.name, "saved table");
        Ok(())
    }

    fn get_table(&self, name: &str) -> StoreResult<Table> {
        self.lock()?
            .get(name)
            .map(|stored| stored.table.clone())
            .ok_or_else(|| StoreError::TableDoesNotExist(name.to_string()))
    }

    fn delete_table(&self, name: &str) -> StoreResult<()> {
        let mut tables = self.lock()?;
        let stored = tables
            .get(name)
            .ok_or_else(|| StoreError::TableDoesNotExist(name.to_string()))?;

        fs::remove_file(&stored.path).map_err(StoreError::io(&stored.path))?;
        tables.remove(name);
        debug!(name, "deleted table");
        Ok(())
    }

    fn list_tables(&self) -> StoreResult<Vec<String>> {
        let mut listing: Vec<String> = self
            .lock()?
            .values()
            .map(|stored| stored.table.meta.summary())
            .collect();
        listing.sort();
        Ok(listing)
    }
}
