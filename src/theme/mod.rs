//! Theme preference store and its seams.
//!
//! # Modules
//!
//! - [`mode`]: The light/dark enum and its persisted literals
//! - [`probe`]: Environment dark-mode signal
//! - [`surface`]: Display-surface capability the store applies modes to
//! - [`store`]: Resolution, toggle, and persistence

pub mod mode;
pub mod probe;
pub mod store;
pub mod surface;

pub use mode::{ParseThemeModeError, ThemeMode};
pub use probe::{ColorSchemeProbe, EnvColorScheme, COLOR_SCHEME_ENV};
pub use store::{ResolutionSource, ThemeOptions, ThemeStore, THEME_STORAGE_KEY};
pub use surface::{DarkModeFlag, DisplaySurface};
