//! Tabular data view engine.
//!
//! Derives the rows a table should display from a fixed dataset, column
//! descriptors, and mutable view state. State changes are driven either through
//! the engine's methods directly or through [`TableEvent`]s.
//!
//! # Modules
//!
//! - [`options`]: Capabilities and page size
//! - [`sort`]: Sort key/direction state and toggle rule
//! - [`engine`]: The filter → sort → paginate pipeline
//! - [`handler`]: Event dispatch for filter input, header clicks, and page buttons
//! - [`pagination`]: Page selector entries and the row-range summary
//! - [`viewmodel`]: Display-ready snapshot of the current page

pub mod engine;
pub mod handler;
pub mod options;
pub mod pagination;
pub mod sort;
pub mod viewmodel;

pub use engine::TableView;
pub use handler::{handle_event, TableEvent};
pub use options::{TableOptions, DEFAULT_PAGE_SIZE};
pub use pagination::{page_items, PageItem, PageSummary};
pub use sort::{SortDirection, SortState};
pub use viewmodel::{EmptyState, HeaderCell, PaginationInfo, RenderedRow, TableViewModel};
