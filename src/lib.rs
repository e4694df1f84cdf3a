//! designkit: the stateful core of a themed UI component library.
//!
//! designkit provides:
//! - A tabular data view engine: text filter, single-key stable sort, and
//!   fixed-size pagination over an in-memory dataset
//! - A light/dark theme preference store with persistence and environment
//!   detection
//! - A terminal renderer and a small CLI for exercising both

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Table Engine  │   │ Theme Store   │   │ UI Layer      │
//! │ (table/)      │   │ (theme/)      │   │ (ui/)         │
//! │ - Filter      │   │ - Resolution  │   │ - Palettes    │
//! │ - Sort        │   │ - Toggle      │   │ - Rendering   │
//! │ - Paginate    │   │ - Surface     │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Storage (storage/), Infrastructure & Domain        │
//! │  - Preference backends (JSON file, memory)          │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Cell values, records, columns, errors (domain/)  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber with rotating log file        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Core types (cell values, records, columns, errors)
//! - [`table`]: Filter → sort → paginate pipeline, events, view model
//! - [`theme`]: Theme mode resolution and persistence
//! - [`storage`]: Preference storage backends
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Terminal rendering with palettes
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! Loaded from a TOML file (all keys optional):
//!
//! ```toml
//! page_size = 25
//! page_siblings = 1
//! sortable = true
//! filterable = true
//! pagination = true
//! persist_on_auto_resolve = false
//! storage_path = "~/.config/designkit/preferences.json"
//! light_palette_file = "~/.config/designkit/light.toml"
//! dark_palette_file = "~/.config/designkit/dark.toml"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use designkit::domain::{Column, JsonRecord};
//! use designkit::table::{TableOptions, TableView};
//!
//! let rows = JsonRecord::parse_array(r#"[{"id": 1, "name": "Bob"}, {"id": 2, "name": "Amy"}]"#)?;
//! let mut view = TableView::new(
//!     rows,
//!     vec![Column::field("name", "Name")],
//!     TableOptions::default(),
//! )?;
//!
//! view.toggle_sort("name");
//! let names: Vec<String> = view
//!     .visible_rows()
//!     .iter()
//!     .map(|row| row.get("name").to_string())
//!     .collect();
//! assert_eq!(names, ["Amy", "Bob"]);
//! # Ok::<(), designkit::DesignKitError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Derived Views
//!
//! The engine stores only the dataset and the view state (filter text, sort,
//! page). Filtered, sorted, and visible rows are recomputed on every read, so
//! they can never go stale.
//!
//! ## Injected Side Effects
//!
//! The theme store reads its environment through a [`theme::ColorSchemeProbe`]
//! and publishes the mode through a [`theme::DisplaySurface`]. Nothing touches
//! process-global state, and several stores can coexist.

pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod table;
pub mod theme;
pub mod ui;

pub use domain::{CellValue, Column, DesignKitError, JsonRecord, Record, RecordId, Result};
pub use table::{handle_event, TableEvent, TableOptions, TableView};
pub use theme::{ThemeMode, ThemeOptions, ThemeStore};
pub use ui::Palette;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use storage::{JsonStorage, MemoryStorage, Storage};
use table::DEFAULT_PAGE_SIZE;

/// Default number of page buttons on each side of the current page.
pub const DEFAULT_PAGE_SIBLINGS: usize = 1;

/// Runtime configuration.
///
/// Every key is optional; missing keys take the values from [`Config::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows per page. Must be positive. Default: 10
    pub page_size: usize,

    /// Page buttons shown on each side of the current page. Default: 1
    pub page_siblings: usize,

    pub sortable: bool,
    pub filterable: bool,
    pub pagination: bool,

    /// Persist a theme resolved from the environment or the default right
    /// away. Default: `false`
    pub persist_on_auto_resolve: bool,

    /// Preference file location. `~` is expanded. Default: `preferences.json`
    /// in the data directory.
    pub storage_path: Option<String>,

    /// Custom palette TOML file for light mode. Default: built-in light palette.
    pub light_palette_file: Option<String>,

    /// Custom palette TOML file for dark mode. Default: built-in dark palette.
    pub dark_palette_file: Option<String>,

    /// Tracing filter directive, e.g. `debug` or `designkit=trace`.
    /// Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_siblings: DEFAULT_PAGE_SIBLINGS,
            sortable: true,
            filterable: true,
            pagination: true,
            persist_on_auto_resolve: false,
            storage_path: None,
            light_palette_file: None,
            dark_palette_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Unparseable values fall back to their defaults. Booleans accept
    /// `true`/`false`, `yes`/`no`, `on`/`off`, and `1`/`0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use designkit::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "25".to_string());
    /// map.insert("sortable".to_string(), "no".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, 25);
    /// assert!(!config.sortable);
    /// assert!(config.filterable);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let number = |key: &str, default: usize| {
            map.get(key)
                .and_then(|s| s.trim().parse::<usize>().ok())
                .unwrap_or(default)
        };
        let flag = |key: &str, default: bool| map.get(key).and_then(|s| parse_bool(s)).unwrap_or(default);
        let text = |key: &str| {
            map.get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        Self {
            page_size: number("page_size", defaults.page_size),
            page_siblings: number("page_siblings", defaults.page_siblings),
            sortable: flag("sortable", defaults.sortable),
            filterable: flag("filterable", defaults.filterable),
            pagination: flag("pagination", defaults.pagination),
            persist_on_auto_resolve: flag("persist_on_auto_resolve", defaults.persist_on_auto_resolve),
            storage_path: text("storage_path"),
            light_palette_file: text("light_palette_file"),
            dark_palette_file: text("dark_palette_file"),
            trace_level: text("trace_level"),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DesignKitError::Io`] if the file cannot be read and
    /// [`DesignKitError::Config`] if it is not valid TOML for this struct.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| DesignKitError::Config(format!("{}: {e}", path.display())))
    }

    /// Table engine options.
    ///
    /// # Errors
    ///
    /// Returns [`DesignKitError::Config`] if `page_size` is zero.
    pub fn table_options(&self) -> Result<TableOptions> {
        let options = TableOptions {
            sortable: self.sortable,
            filterable: self.filterable,
            pagination: self.pagination,
            page_size: self.page_size,
        };
        options.validate()?;
        Ok(options)
    }

    #[must_use]
    pub const fn theme_options(&self) -> ThemeOptions {
        ThemeOptions {
            persist_on_auto_resolve: self.persist_on_auto_resolve,
        }
    }

    /// Resolved preference file location.
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.storage_path.as_deref().map_or_else(
            infrastructure::default_preferences_path,
            infrastructure::expand_tilde,
        )
    }

    /// Palette for `mode`: that mode's custom file if configured and
    /// loadable, otherwise the built-in one.
    #[must_use]
    pub fn palette(&self, mode: ThemeMode) -> Palette {
        let file = match mode {
            ThemeMode::Light => self.light_palette_file.as_deref(),
            ThemeMode::Dark => self.dark_palette_file.as_deref(),
        };
        file.map_or_else(
            || Palette::for_mode(mode),
            |file| {
                Palette::from_file(infrastructure::expand_tilde(file)).unwrap_or_else(|e| {
                    tracing::debug!(palette_file = %file, error = %e, "failed to load palette, using built-in");
                    Palette::for_mode(mode)
                })
            },
        )
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Opens the preference store at the configured path.
///
/// Falls back to [`MemoryStorage`] if the file cannot be opened, so the theme
/// store still works for the rest of the process.
#[must_use]
pub fn open_storage(config: &Config) -> Box<dyn Storage> {
    let path = config.storage_path();
    match JsonStorage::new(path.clone()) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to open preference store, using memory");
            Box::new(MemoryStorage::new())
        }
    }
}
