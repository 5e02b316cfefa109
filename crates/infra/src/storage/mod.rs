//! Durable key-value storage adapters
//!
//! Backs the credential and theme slots. [`FileStore`] survives restarts;
//! [`MemoryStore`] is for tests and ephemeral sessions.

pub mod file;
pub mod memory;

use std::sync::Arc;

pub use file::FileStore;
use labelprint_core::KeyValueStore;
use labelprint_domain::{Result, StorageConfig};
pub use memory::MemoryStore;

/// Open the store selected by configuration.
///
/// # Errors
/// Returns a storage error when the configured file exists but cannot be read.
pub fn open_store(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>> {
    match &config.path {
        Some(path) => Ok(Arc::new(FileStore::open(path)?)),
        None => Ok(Arc::new(MemoryStore::new())),
    }
}
