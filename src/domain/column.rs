//! Column descriptors.
//!
//! A [`Column`] pairs a unique key and a display title with a typed accessor
//! that extracts the column's value from a row, and an optional render function
//! that turns the value into display text. Column order defines render order
//! only; it has no effect on filtering or sorting.

use crate::domain::record::JsonRecord;
use crate::domain::value::CellValue;
use std::fmt;

type Accessor<R> = Box<dyn Fn(&R) -> CellValue>;
type Renderer<R> = Box<dyn Fn(&CellValue, &R) -> String>;

/// Describes one table column.
///
/// # Examples
///
/// ```
/// use designkit::domain::{CellValue, Column};
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let age = Column::new("age", "Age", |p: &Person| CellValue::from(p.age))
///     .with_render(|value, _row| format!("{value} yrs"));
///
/// let bob = Person { name: "Bob".into(), age: 41 };
/// assert_eq!(age.render_cell(&bob), "41 yrs");
/// ```
pub struct Column<R> {
    key: String,
    title: String,
    accessor: Accessor<R>,
    render: Option<Renderer<R>>,
}

impl<R> Column<R> {
    /// Creates a column with a typed accessor and default rendering.
    pub fn new<F>(key: impl Into<String>, title: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> CellValue + 'static,
    {
        Self {
            key: key.into(),
            title: title.into(),
            accessor: Box::new(accessor),
            render: None,
        }
    }

    /// Attaches a custom cell renderer.
    ///
    /// The renderer must be pure: it receives the cell value and the full row.
    #[must_use]
    pub fn with_render<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellValue, &R) -> String + 'static,
    {
        self.render = Some(Box::new(render));
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Extracts this column's value from a row.
    #[must_use]
    pub fn value(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }

    /// Produces the display text of this column for a row.
    ///
    /// Uses the custom renderer when present, otherwise the value's string form.
    #[must_use]
    pub fn render_cell(&self, row: &R) -> String {
        let value = self.value(row);
        self.render
            .as_ref()
            .map_or_else(|| value.to_string(), |render| render(&value, row))
    }

    #[must_use]
    pub const fn has_custom_render(&self) -> bool {
        self.render.is_some()
    }
}

impl Column<JsonRecord> {
    /// Creates a column reading the JSON field named `key`.
    pub fn field(key: impl Into<String>, title: impl Into<String>) -> Self {
        let key = key.into();
        let field = key.clone();
        Self::new(key, title, move |row: &JsonRecord| row.get(&field))
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("has_custom_render", &self.render.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_render_uses_string_form() {
        let rows = JsonRecord::parse_array(r#"[{"id": 1, "score": 9.0}]"#).unwrap();
        let column = Column::field("score", "Score");
        assert_eq!(column.key(), "score");
        assert_eq!(column.title(), "Score");
        assert_eq!(column.render_cell(&rows[0]), "9");
        assert!(!column.has_custom_render());
    }

    #[test]
    fn custom_render_sees_value_and_row() {
        let rows = JsonRecord::parse_array(r#"[{"id": 3, "active": true}]"#).unwrap();
        let column = Column::field("active", "Active")
            .with_render(|value, row| format!("#{} {}", row.get("id"), if value == &CellValue::Bool(true) { "yes" } else { "no" }));
        assert_eq!(column.render_cell(&rows[0]), "#3 yes");
    }
}
