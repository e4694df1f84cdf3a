//! Event handling for table interactions.
//!
//! UI layers translate user input (typing in the filter box, clicking a column
//! header, pressing a pagination button) into [`TableEvent`]s and feed them to
//! [`handle_event`]. The handler mutates the engine's view state and reports
//! whether anything changed, so the caller knows when to re-read the view.
//!
//! # Example
//!
//! ```rust
//! use designkit::domain::{Column, JsonRecord};
//! use designkit::table::{handle_event, TableEvent, TableOptions, TableView};
//!
//! let rows = JsonRecord::parse_array(r#"[{"id": 1}, {"id": 2}, {"id": 3}]"#)?;
//! let mut table = TableView::new(rows, vec![Column::field("id", "ID")], TableOptions::with_page_size(2))?;
//!
//! assert!(handle_event(&mut table, &TableEvent::NextPage));
//! assert!(!handle_event(&mut table, &TableEvent::NextPage));
//! assert_eq!(table.current_page(), 2);
//! # Ok::<(), designkit::DesignKitError>(())
//! ```

use super::engine::TableView;
use crate::domain::Record;

/// User interactions with a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// The filter input's text changed.
    FilterChanged(String),
    /// A column header was clicked.
    HeaderClicked(String),
    /// A page number was clicked.
    PageRequested(usize),
    /// "First page" button.
    FirstPage,
    /// "Previous page" button.
    PreviousPage,
    /// "Next page" button.
    NextPage,
    /// "Last page" button.
    LastPage,
}

/// Applies an event to the table and returns whether its view state changed.
///
/// Navigation events that would leave `1..=total_pages` are ignored, matching
/// disabled pagination buttons. Header clicks are ignored when sorting is
/// disabled.
pub fn handle_event<R: Record>(table: &mut TableView<R>, event: &TableEvent) -> bool {
    let _span = tracing::debug_span!("handle_table_event", event = ?event).entered();

    match event {
        TableEvent::FilterChanged(text) => {
            let changed = table.filter_text() != text || table.current_page() != 1;
            table.set_filter_text(text.clone());
            changed
        }
        TableEvent::HeaderClicked(key) => {
            if !table.options().sortable {
                tracing::debug!("sorting disabled, ignoring header click");
                return false;
            }
            table.toggle_sort(key)
        }
        TableEvent::PageRequested(page) => table.set_page(*page),
        TableEvent::FirstPage => table.set_page(1),
        TableEvent::PreviousPage => table
            .current_page()
            .checked_sub(1)
            .is_some_and(|page| table.set_page(page)),
        TableEvent::NextPage => table.set_page(table.current_page() + 1),
        TableEvent::LastPage => table.set_page(table.total_pages()),
    }
}
