//! Cell values extracted from table rows.
//!
//! Rows are heterogeneous: one field may be text, another a number or a flag.
//! [`CellValue`] is the common currency the table engine works with. It has a
//! string form (used for filtering and default display) and a total natural
//! ordering (used for sorting).
//!
//! # Ordering
//!
//! Values of the same kind compare naturally. `Integer` and `Float` are both
//! numbers and compare with each other exactly, without rounding large
//! integers through `f64`. Across kinds the rank is
//! `Null < Bool < number < Text`, so a column mixing kinds still sorts
//! deterministically.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A single field value of a row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing value.
    #[default]
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Whole number.
    Integer(i64),
    /// Floating point number.
    Float(f64),
    /// Free text.
    Text(String),
}

impl CellValue {
    /// Rank of the value's kind in the cross-kind ordering.
    const fn kind_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Integer(_) | Self::Float(_) => 2,
            Self::Text(_) => 3,
        }
    }

    /// Returns the lower-cased string form used by the filter stage.
    #[must_use]
    pub fn search_text(&self) -> String {
        self.to_string().to_lowercase()
    }

    /// Returns `true` if the lower-cased string form contains `needle`.
    ///
    /// `needle` is expected to be lower-cased already.
    #[must_use]
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.search_text().contains(needle)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// 2^63 as `f64`: the first float past `i64::MAX`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

fn compare_numbers(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Integer(x), CellValue::Integer(y)) => x.cmp(y),
        (CellValue::Integer(x), CellValue::Float(y)) => compare_int_float(*x, *y),
        (CellValue::Float(x), CellValue::Integer(y)) => compare_int_float(*y, *x).reverse(),
        (CellValue::Float(x), CellValue::Float(y)) => compare_floats(*x, *y),
        _ => Ordering::Equal,
    }
}

/// `-0.0 == 0.0`; otherwise `total_cmp`, which puts positive NaN above and
/// negative NaN below every number.
#[allow(clippy::float_cmp)]
fn compare_floats(x: f64, y: f64) -> Ordering {
    if x == y {
        Ordering::Equal
    } else {
        x.total_cmp(&y)
    }
}

/// Exact comparison without rounding `x` through `f64`.
#[allow(clippy::cast_possible_truncation)]
fn compare_int_float(x: i64, y: f64) -> Ordering {
    if y.is_nan() {
        return if y.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if y >= I64_LIMIT {
        return Ordering::Less;
    }
    if y < -I64_LIMIT {
        return Ordering::Greater;
    }

    let whole = y.trunc();
    // `whole` is integral and within i64 range, so the cast is exact.
    match x.cmp(&(whole as i64)) {
        Ordering::Equal => whole.partial_cmp(&y).unwrap_or(Ordering::Equal),
        unequal => unequal,
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (a, b) if a.kind_rank() == 2 && b.kind_rank() == 2 => compare_numbers(a, b),
            (a, b) => a.kind_rank().cmp(&b.kind_rank()),
        }
    }
}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CellValue {}

impl fmt::Display for CellValue {
    #[allow(clippy::float_cmp)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) if x.is_nan() => f.write_str("NaN"),
            Self::Float(x) if x.is_infinite() => {
                f.write_str(if x.is_sign_positive() { "Infinity" } else { "-Infinity" })
            }
            // Integral floats print without a fractional part: 3.0 -> "3"
            Self::Float(x) if x.fract() == 0.0 && x.abs() < 1e15 => write!(f, "{x:.0}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<&serde_json::Value> for CellValue {
    /// Converts a JSON value. Arrays and objects keep their compact JSON text.
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Integer)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Null),
            Value::String(s) => Self::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => Self::Text(value.to_string()),
        }
    }
}
