//! Page selector model.
//!
//! Computes the list of page buttons a pagination control shows: the first and
//! last pages always, a window of sibling pages around the current one, and an
//! ellipsis wherever pages are skipped. Also computes the "Showing X to Y of Z"
//! summary for a table footer.

use serde::Serialize;
use std::fmt;

/// One entry of a page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageItem {
    /// A clickable page number.
    Page(usize),
    /// A gap of skipped pages.
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => f.write_str("..."),
        }
    }
}

/// Builds the page selector entries for `current` out of `total` pages.
///
/// Returns an empty list when there is at most one page (no selector needed).
///
/// # Examples
///
/// ```
/// use designkit::table::{page_items, PageItem};
///
/// let items = page_items(5, 10, 1);
/// assert_eq!(
///     items,
///     vec![
///         PageItem::Page(1),
///         PageItem::Ellipsis,
///         PageItem::Page(4),
///         PageItem::Page(5),
///         PageItem::Page(6),
///         PageItem::Ellipsis,
///         PageItem::Page(10),
///     ]
/// );
/// ```
#[must_use]
pub fn page_items(current: usize, total: usize, siblings: usize) -> Vec<PageItem> {
    if total <= 1 {
        return Vec::new();
    }

    let left = current.saturating_sub(siblings).max(2);
    let right = current.saturating_add(siblings).min(total - 1);

    let mut items = vec![PageItem::Page(1)];
    if left > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((left..=right).map(PageItem::Page));
    if right < total - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));

    items
}

/// Range of rows shown on the current page, one-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl PageSummary {
    /// Computes the summary for a page, or `None` when there are no rows.
    #[must_use]
    pub fn new(current_page: usize, page_size: usize, total: usize) -> Option<Self> {
        if total == 0 || page_size == 0 || current_page == 0 {
            return None;
        }

        let start = (current_page - 1).saturating_mul(page_size) + 1;
        if start > total {
            return None;
        }

        Some(Self {
            start,
            end: current_page.saturating_mul(page_size).min(total),
            total,
        })
    }
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} to {} of {} results", self.start, self.end, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn single_page_needs_no_selector() {
        assert!(page_items(1, 0, 1).is_empty());
        assert!(page_items(1, 1, 1).is_empty());
    }

    #[test]
    fn small_totals_list_every_page() {
        assert_eq!(page_items(1, 2, 1), vec![Page(1), Page(2)]);
        assert_eq!(page_items(2, 3, 1), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn ellipsis_only_on_skipped_side() {
        assert_eq!(
            page_items(1, 10, 1),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_items(10, 10, 1),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
        assert_eq!(
            page_items(3, 10, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn wider_sibling_window() {
        assert_eq!(
            page_items(6, 12, 2),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Page(7), Page(8), Ellipsis, Page(12)]
        );
    }

    #[test]
    fn summary_covers_last_partial_page() {
        let summary = PageSummary::new(3, 10, 25).unwrap();
        assert_eq!((summary.start, summary.end, summary.total), (21, 25, 25));
        assert_eq!(summary.to_string(), "Showing 21 to 25 of 25 results");
        assert!(PageSummary::new(1, 10, 0).is_none());
        assert!(PageSummary::new(4, 10, 25).is_none());
    }
}
