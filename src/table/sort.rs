//! Sort state: a column key and a direction.
//!
//! Toggling follows the header-click convention: clicking the sorted column
//! flips its direction, clicking another column sorts it ascending.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Direction of a single-column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Applies this direction to an ascending comparison result.
    ///
    /// Reversing the comparator (rather than the sorted sequence) keeps ties in
    /// their original relative order for both directions.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    /// Arrow shown next to a sorted column header.
    #[must_use]
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// The active sort: which column and which way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    #[must_use]
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Computes the next sort state after a click on column `key`.
    #[must_use]
    pub fn toggled(current: Option<&Self>, key: &str) -> Self {
        match current {
            Some(state) if state.key == key => Self {
                key: state.key.clone(),
                direction: state.direction.reversed(),
            },
            _ => Self::ascending(key),
        }
    }
}
