//! The storage contract shared by every backend.

use rt_core::Table;

use crate::error::StoreResult;

/// Persists whole tables by name.
///
/// Implementations serialize their own operations, so a store can be
/// shared between threads behind a plain reference.
pub trait Backingstore: Send + Sync {
    /// Insert or replace a table. Fails with
    /// [`StoreError::TableInvalid`](crate::StoreError::TableInvalid) if the
    /// table has no name; nothing is written in that case.
    fn save_table(&self, table: &Table) -> StoreResult<()>;

    /// Load a table by name.
    fn get_table(&self, name: &str) -> StoreResult<Table>;

    /// Remove a table by name.
    fn delete_table(&self, name: &str) -> StoreResult<()>;

    /// One `name,roll_expression,rollable` line per table, sorted.
    fn list_tables(&self) -> StoreResult<Vec<String>>;
}
