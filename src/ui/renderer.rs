//! Plain-text table and theme status rendering.
//!
//! Turns a [`TableViewModel`] into a block of text for a terminal. Styling
//! comes from a [`Palette`]; [`Renderer::plain`] drops all escape sequences.
//!
//! ```text
//! Filter: ali
//! NAME ↑      AGE
//! ───────────────
//! Alice       30
//! Alicia      41
//! Showing 1 to 2 of 12 results
//! ‹ Prev  1 [2] 3 … 6  Next ›
//! ```

use super::palette::Palette;
use crate::table::{PageItem, PaginationInfo, TableViewModel};
use crate::theme::{ResolutionSource, ThemeMode};
use std::fmt::Write as _;

/// Cells wider than this are truncated with an ellipsis.
const MAX_CELL_WIDTH: usize = 40;

const COLUMN_GAP: &str = "  ";

/// Renders view models to strings.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    palette: &'a Palette,
    color: bool,
    /// Maximum width of separator lines.
    width: usize,
}

impl<'a> Renderer<'a> {
    #[must_use]
    pub const fn new(palette: &'a Palette, width: usize) -> Self {
        Self {
            palette,
            color: true,
            width,
        }
    }

    /// Disables ANSI styling.
    #[must_use]
    pub const fn plain(mut self) -> Self {
        self.color = false;
        self
    }

    fn paint(&self, text: &str, style: &str) -> String {
        if self.color {
            format!("{style}{text}{}", Palette::reset())
        } else {
            text.to_string()
        }
    }

    fn fg(&self, hex: &str) -> String {
        Palette::fg(hex)
    }

    /// Renders the filter line, headers, rows (or empty state), and the
    /// pagination footer.
    #[must_use]
    pub fn render_table(&self, vm: &TableViewModel) -> String {
        let _span = tracing::debug_span!("render_table", rows = vm.rows.len()).entered();
        let colors = &self.palette.colors;
        let mut out = String::new();

        if let Some(filter) = vm.filter.as_deref().filter(|f| !f.is_empty()) {
            let label = self.paint("Filter:", &self.fg(&colors.text_dim));
            let _ = writeln!(out, "{label} {filter}");
        }

        let labels: Vec<String> = vm
            .headers
            .iter()
            .map(|header| match header.sort {
                Some(direction) => format!("{} {}", header.title, direction.indicator()),
                None => header.title.clone(),
            })
            .collect();

        let widths: Vec<usize> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                vm.rows
                    .iter()
                    .filter_map(|row| row.cells.get(i))
                    .map(|cell| display_width(cell))
                    .chain(std::iter::once(display_width(label)))
                    .max()
                    .unwrap_or(0)
                    .min(MAX_CELL_WIDTH)
            })
            .collect();

        let header_style = format!("{}{}", Palette::bold(), self.fg(&colors.header_fg));
        let header_line = join_cells(labels.iter().map(String::as_str), &widths);
        let _ = writeln!(out, "{}", self.paint(&header_line, &header_style));

        let rule_width = display_width(&header_line).clamp(1, self.width.max(1));
        let _ = writeln!(out, "{}", self.paint(&"─".repeat(rule_width), &self.fg(&colors.border)));

        if let Some(empty) = &vm.empty_state {
            let title_style = format!("{}{}", Palette::bold(), self.fg(&colors.empty_state_fg));
            let _ = writeln!(out, "{}", self.paint(&empty.message, &title_style));
            let _ = writeln!(out, "{}", self.paint(&empty.subtitle, Palette::dim()));
        } else {
            let text_style = self.fg(&colors.text_normal);
            for row in &vm.rows {
                let line = join_cells(row.cells.iter().map(String::as_str), &widths);
                let _ = writeln!(out, "{}", self.paint(&line, &text_style));
            }
        }

        if let Some(pagination) = &vm.pagination {
            self.render_pagination(&mut out, pagination);
        }

        out
    }

    fn render_pagination(&self, out: &mut String, pagination: &PaginationInfo) {
        let colors = &self.palette.colors;
        let dim = self.fg(&colors.text_dim);

        if let Some(summary) = &pagination.summary {
            let _ = writeln!(out, "{}", self.paint(&summary.to_string(), &dim));
        }

        let mut parts = Vec::with_capacity(pagination.items.len() + 2);
        parts.push(self.nav_button("‹ Prev", pagination.has_previous));
        for item in &pagination.items {
            parts.push(match item {
                PageItem::Page(page) if *page == pagination.current_page => {
                    let style = format!("{}{}", Palette::bold(), self.fg(&colors.accent));
                    self.paint(&format!("[{page}]"), &style)
                }
                PageItem::Page(page) => page.to_string(),
                PageItem::Ellipsis => self.paint("…", &dim),
            });
        }
        parts.push(self.nav_button("Next ›", pagination.has_next));

        let _ = writeln!(out, "{}", parts.join(" "));
    }

    fn nav_button(&self, label: &str, enabled: bool) -> String {
        if enabled {
            label.to_string()
        } else {
            self.paint(label, Palette::dim())
        }
    }

    /// One-line summary of the active theme.
    #[must_use]
    pub fn render_theme_status(&self, mode: ThemeMode, source: ResolutionSource, degraded: bool) -> String {
        let colors = &self.palette.colors;
        let mut line = format!(
            "theme: {} ({source})",
            self.paint(mode.as_str(), &format!("{}{}", Palette::bold(), self.fg(&colors.accent)))
        );
        if degraded {
            let _ = write!(
                line,
                " {}",
                self.paint("[not persisted]", &self.fg(&colors.text_dim))
            );
        }
        line
    }
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}

fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

fn join_cells<'s>(cells: impl Iterator<Item = &'s str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| {
            let cell = truncate(cell, width);
            let pad = width.saturating_sub(display_width(&cell));
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Column, JsonRecord};
    use crate::table::{TableOptions, TableView};
    use serde_json::json;

    fn people(count: usize) -> TableView<JsonRecord> {
        let rows = (1..=count)
            .map(|i| JsonRecord::from_value(json!({"id": i, "name": format!("Person {i}")})).unwrap())
            .collect();
        TableView::new(
            rows,
            vec![Column::field("name", "Name")],
            TableOptions::with_page_size(2),
        )
        .unwrap()
    }

    #[test]
    fn plain_table_with_pagination() {
        let mut view = people(5);
        view.toggle_sort("name");
        view.set_page(2);

        let palette = Palette::light();
        let text = Renderer::new(&palette, 80).plain().render_table(&view.compute_viewmodel(1));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name ↑");
        assert_eq!(lines[2], "Person 3");
        assert_eq!(lines[3], "Person 4");
        assert_eq!(lines[4], "Showing 3 to 4 of 5 results");
        assert_eq!(lines[5], "‹ Prev 1 [2] 3 Next ›");
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn empty_state_replaces_rows() {
        let mut view = people(3);
        view.set_filter_text("nobody");

        let palette = Palette::dark();
        let text = Renderer::new(&palette, 80).plain().render_table(&view.compute_viewmodel(1));

        assert!(text.starts_with("Filter: nobody\n"));
        assert!(text.contains("No matching rows"));
        assert!(!text.contains("Showing"));
    }

    #[test]
    fn colored_output_uses_palette() {
        let view = people(1);
        let palette = Palette::dark();
        let text = Renderer::new(&palette, 80).render_table(&view.compute_viewmodel(1));
        assert!(text.contains(&Palette::fg(&palette.colors.header_fg)));
    }

    #[test]
    fn long_cells_are_truncated() {
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 4), "abc");
    }

    #[test]
    fn theme_status_line() {
        let palette = Palette::light();
        let renderer = Renderer::new(&palette, 80).plain();
        assert_eq!(
            renderer.render_theme_status(ThemeMode::Dark, ResolutionSource::Persisted, false),
            "theme: dark (persisted)"
        );
        assert_eq!(
            renderer.render_theme_status(ThemeMode::Light, ResolutionSource::Default, true),
            "theme: light (default) [not persisted]"
        );
    }
}
