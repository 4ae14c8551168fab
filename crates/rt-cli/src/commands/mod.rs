pub mod delete;
pub mod dice;
pub mod export;
pub mod list;
pub mod load;
pub mod roll;
pub mod show;

use std::path::PathBuf;

use comfy_table::{ContentArrangement, Table};
use rt_core::{EngineConfig, RollEngine};
use rt_store::{Backend, Backingstore, StoreConfig};
use tracing::debug;

/// Settings shared by every command, resolved from the global flags.
pub struct Context {
    store: StoreConfig,
    engine: EngineConfig,
}

impl Context {
    pub fn new(backend: &str, location: Option<PathBuf>, seed: Option<u64>) -> Result<Self, String> {
        let backend: Backend = backend.parse().map_err(|e| format!("{e}"))?;
        let mut store = StoreConfig::new(backend);
        if let Some(location) = location {
            store = store.with_location(location);
        }
        let mut engine = EngineConfig::default();
        if let Some(seed) = seed {
            engine = engine.with_seed(seed);
        }
        Ok(Self { store, engine })
    }

    /// Open the configured backing store.
    fn open_store(&self) -> Result<Box<dyn Backingstore>, String> {
        debug!(
            backend = %self.store.backend,
            location = %self.store.location.display(),
            "opening table store"
        );
        rt_store::open_store(&self.store).map_err(|e| format!("{e}"))
    }

    fn engine(&self) -> RollEngine {
        RollEngine::new(&self.engine)
    }
}

/// Render records as a text table; the first record becomes the header.
fn grid(records: &[Vec<String>]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((header, rows)) = records.split_first() {
        table.set_header(header);
        for row in rows {
            table.add_row(row);
        }
    }
    table
}
