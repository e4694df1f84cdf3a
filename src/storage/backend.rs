//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait: a small key-value slot map for user
//! preferences. The theme store reads and writes a single slot through it; the
//! trait is deliberately minimal so alternative backends (browser storage
//! bridges, config services) can be dropped in.

use crate::domain::error::Result;

/// Abstraction over persistent preference backends.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes
/// - [`MemoryStorage`](crate::storage::MemoryStorage): process-local map, used in
///   tests and as the fallback when no file can be opened
///
/// # Examples
///
/// ```no_run
/// use designkit::storage::{JsonStorage, Storage};
/// use std::path::PathBuf;
///
/// let mut storage = JsonStorage::new(PathBuf::from("/tmp/preferences.json"))?;
/// storage.set("theme", "dark")?;
/// assert_eq!(storage.get("theme")?.as_deref(), Some("dark"));
/// # Ok::<(), designkit::DesignKitError>(())
/// ```
pub trait Storage: Send {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. Backends may keep the new value in
    /// memory even when persisting it failed.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Clears the slot under `key`. Clearing an empty slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
