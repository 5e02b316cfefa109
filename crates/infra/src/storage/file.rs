//! JSON file backed key-value store

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use labelprint_core::KeyValueStore;
use labelprint_domain::{LabelPrintError, Result};
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::errors::InfraError;

/// Persists every write to a single JSON object on disk.
///
/// The file is read once at [`FileStore::open`]; afterwards the in-memory
/// map is authoritative. Writes go to a sibling temp file that is renamed
/// over the target.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open `path`, creating no file until the first write.
    ///
    /// # Errors
    /// Returns a storage or serialization error when an existing file cannot
    /// be read or is not a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values: BTreeMap<String, String> = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(InfraError::from)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw).map_err(InfraError::from)?
            }
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), entries = values.len(), "opened key-value store");
        Ok(Self { path, values: RwLock::new(values) })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(InfraError::from)?;
        }
        let json = serde_json::to_string_pretty(values).map_err(InfraError::from)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(InfraError::from)?;
        fs::rename(&tmp, &self.path).map_err(|err| {
            warn!(path = %self.path.display(), error = %err, "failed to replace store file");
            LabelPrintError::from(InfraError::from(err))
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write();
        values.insert(key.to_string(), value.to_string());
        self.persist(&values)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.write();
        if values.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&values)
    }
}
