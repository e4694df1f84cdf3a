//! The table view engine: filter, sort, and paginate an in-memory dataset.
//!
//! [`TableView`] owns an immutable dataset, its column descriptors, and the
//! mutable view state (filter text, sort, current page). Every read derives the
//! result from scratch in a fixed pipeline:
//!
//! ```text
//! rows ──filter──▶ filtered ──sort──▶ sorted ──paginate──▶ visible
//! ```
//!
//! Nothing is cached, so a read after any mutation always reflects the current
//! state. There are no change notifications: callers re-read after mutating.
//!
//! # Example
//!
//! ```rust
//! use designkit::domain::{Column, JsonRecord};
//! use designkit::table::{TableOptions, TableView};
//!
//! let rows = JsonRecord::parse_array(r#"[{"id": 1, "name": "Bob"}, {"id": 2, "name": "Amy"}]"#)?;
//! let columns = vec![Column::field("name", "Name")];
//! let mut table = TableView::new(rows, columns, TableOptions::default())?;
//!
//! table.toggle_sort("name");
//! let names: Vec<String> = table
//!     .visible_rows()
//!     .iter()
//!     .map(|row| row.get("name").to_string())
//!     .collect();
//! assert_eq!(names, ["Amy", "Bob"]);
//! # Ok::<(), designkit::DesignKitError>(())
//! ```

use super::options::TableOptions;
use super::sort::SortState;
use crate::domain::error::{DesignKitError, Result};
use crate::domain::{CellValue, Column, Record};
use std::collections::HashSet;

/// Filter/sort/paginate engine over a fixed dataset.
#[derive(Debug)]
pub struct TableView<R: Record> {
    /// Source dataset. Never mutated; derived views borrow from it.
    rows: Vec<R>,

    /// Column descriptors in render order. Keys are unique.
    columns: Vec<Column<R>>,

    options: TableOptions,

    /// Free-text filter. Empty means no filtering.
    filter_text: String,

    /// Active sort, `None` keeps dataset order.
    sort: Option<SortState>,

    /// One-based page index.
    current_page: usize,
}

impl<R: Record> TableView<R> {
    /// Creates an engine over `rows` with the given columns and options.
    ///
    /// # Errors
    ///
    /// Returns [`DesignKitError::Config`] if `options.page_size` is zero or two
    /// columns share a key.
    pub fn new(rows: Vec<R>, columns: Vec<Column<R>>, options: TableOptions) -> Result<Self> {
        options.validate()?;

        let mut keys = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !keys.insert(column.key()) {
                return Err(DesignKitError::Config(format!(
                    "duplicate column key: {}",
                    column.key()
                )));
            }
        }

        tracing::debug!(
            rows = rows.len(),
            columns = columns.len(),
            page_size = options.page_size,
            "table view created"
        );

        Ok(Self {
            rows,
            columns,
            options,
            filter_text: String::new(),
            sort: None,
            current_page: 1,
        })
    }

    /// Replaces the filter text and returns to the first page.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        self.current_page = 1;
        tracing::debug!(filter_len = self.filter_text.len(), "filter text set");
    }

    /// Sorts by column `key`, or flips the direction if already sorted by it.
    ///
    /// Unknown keys are ignored. The current page is left untouched. Returns
    /// `true` if the sort state changed.
    pub fn toggle_sort(&mut self, key: &str) -> bool {
        if self.column(key).is_none() {
            tracing::debug!(key = %key, "ignoring sort on unknown column");
            return false;
        }

        let next = SortState::toggled(self.sort.as_ref(), key);
        tracing::debug!(key = %next.key, direction = %next.direction, "sort toggled");
        self.sort = Some(next);
        true
    }

    /// Drops the active sort, returning to dataset order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Moves to page `page` if it lies within `1..=total_pages()`.
    ///
    /// Out-of-range requests are ignored. Returns `true` if the page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        let total = self.total_pages();
        if page == 0 || page > total {
            tracing::debug!(page, total_pages = total, "ignoring out-of-range page");
            return false;
        }

        let changed = page != self.current_page;
        self.current_page = page;
        changed
    }

    /// Swaps in a new dataset, keeping the view state.
    ///
    /// If the current page no longer exists it falls back to the first page.
    pub fn replace_data(&mut self, rows: Vec<R>) {
        self.rows = rows;
        if self.current_page > self.total_pages().max(1) {
            self.current_page = 1;
        }
        tracing::debug!(rows = self.rows.len(), page = self.current_page, "data replaced");
    }

    /// Rows passing the filter stage, in dataset order.
    #[must_use]
    pub fn filtered_rows(&self) -> Vec<&R> {
        let _span = tracing::debug_span!("filter_rows",
            total_rows = self.rows.len(),
            filter_len = self.filter_text.len()
        )
        .entered();

        if !self.options.filterable || self.filter_text.is_empty() {
            return self.rows.iter().collect();
        }

        let needle = self.filter_text.to_lowercase();
        let filtered: Vec<&R> = self
            .rows
            .iter()
            .filter(|row| {
                row.field_values()
                    .iter()
                    .any(|value| value.contains_lowercase(&needle))
            })
            .collect();

        tracing::debug!(filtered_count = filtered.len(), "filter applied");
        filtered
    }

    /// Rows after the filter and sort stages.
    #[must_use]
    pub fn sorted_rows(&self) -> Vec<&R> {
        let filtered = self.filtered_rows();

        let Some(sort) = self.sort.as_ref().filter(|_| self.options.sortable) else {
            return filtered;
        };
        let Some(column) = self.column(&sort.key) else {
            return filtered;
        };

        let _span = tracing::debug_span!("sort_rows",
            key = %sort.key,
            direction = %sort.direction,
            count = filtered.len()
        )
        .entered();

        let mut keyed: Vec<(CellValue, &R)> = filtered
            .into_iter()
            .map(|row| (column.value(row), row))
            .collect();

        // `sort_by` is stable: ties keep their filtered order in both directions.
        keyed.sort_by(|(a, _), (b, _)| sort.direction.apply(a.cmp(b)));

        keyed.into_iter().map(|(_, row)| row).collect()
    }

    /// Rows of the current page, in render order.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<&R> {
        let sorted = self.sorted_rows();
        if !self.options.pagination {
            return sorted;
        }

        let start = (self.current_page - 1).saturating_mul(self.options.page_size);
        sorted
            .into_iter()
            .skip(start)
            .take(self.options.page_size)
            .collect()
    }

    /// Number of rows passing the filter.
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        if !self.options.filterable || self.filter_text.is_empty() {
            return self.rows.len();
        }
        self.filtered_rows().len()
    }

    /// Number of pages, zero when no row passes the filter.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(self.options.page_size)
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    #[must_use]
    pub const fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// The full source dataset.
    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    #[must_use]
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Looks up a column by key.
    #[must_use]
    pub fn column(&self, key: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|column| column.key() == key)
    }
}
