//! Roll tables: the data model and the engine that evaluates them.
//!
//! A [`Table`] is built once from CSV-like records with [`Table::load`] and
//! is immutable afterwards. Lookups go through a [`RollEngine`], which owns
//! the dice roller and the compiled placeholder matcher, so no state is
//! shared between engines.
//!
//! ```
//! use rt_core::{EngineConfig, RollEngine, Table};
//!
//! let mut engine = RollEngine::new(&EngineConfig::default().with_seed(7));
//! let records = vec![
//!     vec!["D2", "Result"],
//!     vec!["1", "{{1d1+1}} goblins"],
//!     vec!["2", "Nothing"],
//! ];
//! let table = Table::load(records, "encounters", "d2", &engine).unwrap();
//! assert_eq!(table.get_row(1, &mut engine).unwrap()[1], "2 goblins");
//!
//! let rows = table.expression("1#encounters", &mut engine).unwrap();
//! assert_eq!(rows.len(), 2);
//! ```

/// Engine configuration.
pub mod config;
/// The roll engine: dice roller plus placeholder substitution.
pub mod engine;
/// Error types used throughout the crate.
pub mod error;
/// Table expression evaluation.
pub mod expression;
/// Building tables from records.
pub mod load;
/// Table expression parsing.
pub mod query;
/// The table data model and row resolution.
pub mod table;

/// Re-export engine types.
pub use config::EngineConfig;
pub use engine::RollEngine;
/// Re-export error types.
pub use error::{TableError, TableResult};
/// Re-export query types.
pub use query::{Request, TableQuery};
/// Re-export the data model.
pub use table::{Meta, Row, Table};
