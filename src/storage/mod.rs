//! Storage layer for persistent user preferences.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `memory`: In-memory storage implementation
//! - `models`: Storage record types

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::Storage;
pub use json::JsonStorage;
pub use memory::MemoryStorage;
pub use models::PreferenceRecord;
