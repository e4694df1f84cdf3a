//! Table engine configuration.

use crate::domain::error::{DesignKitError, Result};
use serde::{Deserialize, Serialize};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Capabilities and page size of a table engine.
///
/// Fixed for the engine's lifetime. Disabling a capability turns the matching
/// pipeline stage into the identity; its view state is still recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    pub sortable: bool,
    pub filterable: bool,
    pub pagination: bool,
    pub page_size: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            sortable: true,
            filterable: true,
            pagination: true,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableOptions {
    /// Returns default options with the given page size.
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    /// Checks that the options describe a usable engine.
    ///
    /// # Errors
    ///
    /// Returns [`DesignKitError::Config`] if `page_size` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(DesignKitError::Config("page_size must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let options = TableOptions::default();
        assert!(options.sortable && options.filterable && options.pagination);
        assert_eq!(options.page_size, 10);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = TableOptions::with_page_size(0).validate().unwrap_err();
        assert!(matches!(err, DesignKitError::Config(_)));
    }
}
