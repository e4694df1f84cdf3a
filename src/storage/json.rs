//! JSON file-based storage backend.
//!
//! This module provides a simple, human-readable preference store using JSON
//! serialization. It uses atomic file writes (write-to-temp + rename) to prevent
//! corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(log n) in-memory lookup, the file is loaded once on open
//! - **Write**: O(n), serializes and writes the whole file
//! - **Best for**: a handful of preference slots written on user action

use crate::domain::error::{DesignKitError, Result};
use crate::storage::backend::Storage;
use crate::storage::models::PreferenceRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Preference slots keyed by name.
    #[serde(default)]
    entries: BTreeMap<String, PreferenceRecord>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// The entire file is kept in memory and persisted on every modification.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`; it has a single owner.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "theme": { "value": "dark", "updated_at": 1760000000 }
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: StorageData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonStorage {
    /// Creates or opens a JSON storage file.
    ///
    /// If the file exists, loads existing data. Otherwise starts empty; the file
    /// is created on the first write. Parent directories are created eagerly.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "storage initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Returns the stored record for `key`, including its timestamp.
    #[must_use]
    pub fn record(&self, key: &str) -> Option<&PreferenceRecord> {
        self.data.entries.get(key)
    }

    /// Loads storage data from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| DesignKitError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version > FORMAT_VERSION {
            return Err(DesignKitError::Storage(format!(
                "unsupported storage version {}",
                data.version
            )));
        }

        tracing::debug!(
            version = data.version,
            entries = data.entries.len(),
            "loaded storage data"
        );

        Ok(data)
    }

    /// Saves storage data to disk using atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target path,
    /// so the file is never left half-written.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write, or the rename fails.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving storage data");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| DesignKitError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!("storage saved successfully");
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self.data.entries.get(key).map(|record| record.value.clone());
        tracing::trace!(key = %key, found = value.is_some(), "preference lookup");
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set", key = %key, value = %value).entered();

        self.data
            .entries
            .insert(key.to_string(), PreferenceRecord::new(value));
        self.dirty = true;
        self.save_to_file()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_remove", key = %key).entered();

        if self.data.entries.remove(key).is_none() {
            return Ok(());
        }
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonStorage {
    /// Retries a failed save one last time.
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}
