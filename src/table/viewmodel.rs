//! Renderable table view model.
//!
//! The view model is an immutable, display-ready snapshot computed from a
//! [`TableView`]: header cells with sort indicators, the current page's rows
//! already rendered to text, and the footer's pagination data. Renderers
//! consume it without touching engine state.

use super::engine::TableView;
use super::pagination::{page_items, PageItem, PageSummary};
use super::sort::SortDirection;
use crate::domain::Record;
use serde::Serialize;

/// Complete table view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableViewModel {
    /// Column headers in render order.
    pub headers: Vec<HeaderCell>,

    /// Current page rows in render order.
    pub rows: Vec<RenderedRow>,

    /// Current filter text, shown in the filter input when filtering is enabled.
    pub filter: Option<String>,

    /// Footer data, present only when pagination is on and there is more than one page.
    pub pagination: Option<PaginationInfo>,

    /// Message shown instead of rows.
    pub empty_state: Option<EmptyState>,
}

/// A column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub key: String,
    pub title: String,
    /// Direction of the active sort if this column is sorted.
    pub sort: Option<SortDirection>,
}

/// A row rendered to text, one cell per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    pub id: String,
    pub cells: Vec<String>,
}

/// Pagination footer data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub summary: Option<PageSummary>,
    pub items: Vec<PageItem>,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Empty state message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

impl EmptyState {
    fn no_data() -> Self {
        Self {
            message: "No data available".to_string(),
            subtitle: "Try adjusting your filters or check back later.".to_string(),
        }
    }

    fn no_matches(filter: &str) -> Self {
        Self {
            message: "No matching rows".to_string(),
            subtitle: format!("Nothing matches \"{filter}\"."),
        }
    }
}

impl<R: Record> TableView<R> {
    /// Computes a view model of the current page.
    ///
    /// `page_siblings` is the number of page buttons shown on each side of the
    /// current page in the selector.
    #[must_use]
    pub fn compute_viewmodel(&self, page_siblings: usize) -> TableViewModel {
        let _span = tracing::debug_span!("compute_table_viewmodel",
            page = self.current_page()
        )
        .entered();

        let options = self.options();
        let sort = self.sort().filter(|_| options.sortable);

        let headers = self
            .columns()
            .iter()
            .map(|column| HeaderCell {
                key: column.key().to_string(),
                title: column.title().to_string(),
                sort: sort
                    .filter(|state| state.key == column.key())
                    .map(|state| state.direction),
            })
            .collect();

        let rows = self
            .visible_rows()
            .into_iter()
            .map(|row| RenderedRow {
                id: row.id().to_string(),
                cells: self.columns().iter().map(|column| column.render_cell(row)).collect(),
            })
            .collect();

        let filtered_count = self.filtered_count();
        let total_pages = self.total_pages();
        let current_page = self.current_page();

        let pagination = (options.pagination && total_pages > 1).then(|| PaginationInfo {
            current_page,
            total_pages,
            summary: PageSummary::new(current_page, options.page_size, filtered_count),
            items: page_items(current_page, total_pages, page_siblings),
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        });

        let empty_state = if self.rows().is_empty() {
            Some(EmptyState::no_data())
        } else if filtered_count == 0 {
            Some(EmptyState::no_matches(self.filter_text()))
        } else {
            None
        };

        TableViewModel {
            headers,
            rows,
            filter: options.filterable.then(|| self.filter_text().to_string()),
            pagination,
            empty_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Column, JsonRecord};
    use crate::table::TableOptions;

    fn table(page_size: usize) -> TableView<JsonRecord> {
        let rows = JsonRecord::parse_array(
            r#"[
                {"id": 1, "name": "Bob", "active": true},
                {"id": 2, "name": "Amy", "active": false},
                {"id": 3, "name": "Cleo", "active": true}
            ]"#,
        )
        .unwrap();
        let columns = vec![
            Column::field("name", "Name"),
            Column::field("active", "Active").with_render(|value, _| {
                if value.to_string() == "true" { "yes".to_string() } else { "no".to_string() }
            }),
        ];
        TableView::new(rows, columns, TableOptions::with_page_size(page_size)).unwrap()
    }

    #[test]
    fn headers_show_active_sort() {
        let mut table = table(10);
        table.toggle_sort("name");
        table.toggle_sort("name");
        let vm = table.compute_viewmodel(1);
        assert_eq!(vm.headers[0].sort, Some(SortDirection::Desc));
        assert_eq!(vm.headers[1].sort, None);
        assert_eq!(vm.headers[1].title, "Active");
    }

    #[test]
    fn rows_use_custom_renderers() {
        let vm = table(10).compute_viewmodel(1);
        assert_eq!(vm.rows[1].id, "2");
        assert_eq!(vm.rows[1].cells, vec!["Amy".to_string(), "no".to_string()]);
        assert!(vm.pagination.is_none());
        assert!(vm.empty_state.is_none());
        assert_eq!(vm.filter.as_deref(), Some(""));
    }

    #[test]
    fn pagination_footer_when_multiple_pages() {
        let mut table = table(2);
        table.set_page(2);
        let vm = table.compute_viewmodel(1);
        let pagination = vm.pagination.unwrap();
        assert_eq!(pagination.total_pages, 2);
        assert!(pagination.has_previous);
        assert!(!pagination.has_next);
        assert_eq!(pagination.summary.unwrap().to_string(), "Showing 3 to 3 of 3 results");
        assert_eq!(pagination.items, vec![PageItem::Page(1), PageItem::Page(2)]);
    }

    #[test]
    fn empty_states() {
        let mut table = table(10);
        table.set_filter_text("zzz");
        let vm = table.compute_viewmodel(1);
        assert_eq!(vm.empty_state.unwrap().message, "No matching rows");

        table.replace_data(Vec::new());
        let vm = table.compute_viewmodel(1);
        assert_eq!(vm.empty_state.unwrap().message, "No data available");
        assert!(vm.rows.is_empty());
    }
}
