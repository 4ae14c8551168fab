//! Persistence for roll tables.
//!
//! Every backend implements [`Backingstore`], which saves, loads, lists and
//! deletes whole tables by name. Pick one at runtime with [`StoreConfig`]
//! and [`open_store`]; table logic never needs to know which is active.

pub mod config;
pub mod error;
pub mod file;
pub mod io;
pub mod kv;
pub mod store;

pub use config::{Backend, StoreConfig, open_store};
pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use kv::KvStore;
pub use store::Backingstore;
