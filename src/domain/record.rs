//! Row abstraction for the table engine.
//!
//! The engine is generic over any row type implementing [`Record`]: a stable
//! unique identifier plus the list of all field values (used by the filter
//! stage, which matches against every field, not only the displayed columns).
//!
//! [`JsonRecord`] is a ready-made implementation for heterogeneous rows decoded
//! from JSON objects, used by the command-line front end.

use crate::domain::error::{DesignKitError, Result};
use crate::domain::value::CellValue;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// A row that can be displayed by the table engine.
///
/// # Examples
///
/// ```
/// use designkit::domain::{CellValue, Record};
///
/// struct Person {
///     id: u32,
///     name: String,
/// }
///
/// impl Record for Person {
///     type Id = u32;
///
///     fn id(&self) -> u32 {
///         self.id
///     }
///
///     fn field_values(&self) -> Vec<CellValue> {
///         vec![self.id.into(), self.name.clone().into()]
///     }
/// }
/// ```
pub trait Record {
    /// Identifier type. Must be unique within a dataset.
    type Id: Clone + Eq + Hash + fmt::Debug + fmt::Display;

    /// Returns the row's stable identifier.
    fn id(&self) -> Self::Id;

    /// Returns every field value of the row, in field order.
    fn field_values(&self) -> Vec<CellValue>;
}

/// Identifier of a [`JsonRecord`]: either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A row backed by a JSON object.
///
/// The object must carry an `id` field holding an integer or a string. All
/// fields, including `id`, take part in filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRecord {
    id: RecordId,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl JsonRecord {
    /// Builds a record from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`DesignKitError::Data`] if the value is not an object or its
    /// `id` is missing or not an integer/string.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let serde_json::Value::Object(fields) = value else {
            return Err(DesignKitError::Data("row is not a JSON object".to_string()));
        };

        let id = match fields.get("id") {
            Some(serde_json::Value::Number(n)) => n
                .as_i64()
                .map(RecordId::Number)
                .ok_or_else(|| DesignKitError::Data(format!("row id {n} is not an integer")))?,
            Some(serde_json::Value::String(s)) => RecordId::Text(s.clone()),
            Some(other) => {
                return Err(DesignKitError::Data(format!("row id {other} is not a number or string")))
            }
            None => return Err(DesignKitError::Data("row has no id field".to_string())),
        };

        Ok(Self { id, fields })
    }

    /// Parses a JSON array of objects into records.
    ///
    /// # Errors
    ///
    /// Returns [`DesignKitError::Data`] if the text is not a JSON array, any
    /// element is not a valid row, or two rows share an id.
    pub fn parse_array(json: &str) -> Result<Vec<Self>> {
        let _span = tracing::debug_span!("parse_records", bytes = json.len()).entered();

        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| DesignKitError::Data(format!("failed to parse JSON: {e}")))?;

        let serde_json::Value::Array(items) = value else {
            return Err(DesignKitError::Data("dataset must be a JSON array".to_string()));
        };

        let records = items
            .into_iter()
            .map(Self::from_value)
            .collect::<Result<Vec<_>>>()?;

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(&record.id) {
                return Err(DesignKitError::Data(format!("duplicate row id: {}", record.id)));
            }
        }

        tracing::debug!(count = records.len(), "records parsed");
        Ok(records)
    }

    /// Returns the value of a field, or [`CellValue::Null`] if absent.
    #[must_use]
    pub fn get(&self, key: &str) -> CellValue {
        self.fields.get(key).map_or(CellValue::Null, CellValue::from)
    }

    /// Returns field names in object order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl Record for JsonRecord {
    type Id = RecordId;

    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn field_values(&self) -> Vec<CellValue> {
        self.fields.values().map(CellValue::from).collect()
    }
}
