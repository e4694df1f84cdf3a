//! Storage record models for the persistence layer.

use serde::{Deserialize, Serialize};

/// A stored preference value with its last write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    /// The stored value, e.g. `"dark"`.
    pub value: String,

    /// Unix timestamp of the last write.
    pub updated_at: i64,
}

impl PreferenceRecord {
    /// Creates a record stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use designkit::storage::PreferenceRecord;
    ///
    /// let record = PreferenceRecord::new("dark");
    /// assert_eq!(record.value, "dark");
    /// assert!(record.updated_at > 0);
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            updated_at: chrono::Utc::now().timestamp(),
        }
    }
}
