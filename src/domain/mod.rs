//! Domain layer for designkit.
//!
//! Core types shared by the table engine and the theme store, independent of
//! storage, terminal rendering, or any particular UI runtime.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`value`]: Heterogeneous cell values with a natural total ordering
//! - [`record`]: The row trait and a JSON-backed row type
//! - [`column`]: Column descriptors with typed accessors

pub mod column;
pub mod error;
pub mod record;
pub mod value;

pub use column::Column;
pub use error::{DesignKitError, Result};
pub use record::{JsonRecord, Record, RecordId};
pub use value::CellValue;
