//! Display-surface capability.
//!
//! The theme store never touches global state. Whatever hosts the UI (a DOM
//! root, a terminal renderer, a native window) injects a [`DisplaySurface`]
//! and the store calls it each time the mode takes effect.

use super::mode::ThemeMode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Receives the active display mode.
pub trait DisplaySurface {
    /// Applies `mode`: presence/absence of the "dark" marker on the surface root.
    fn apply_mode(&mut self, mode: ThemeMode);
}

impl<F> DisplaySurface for F
where
    F: FnMut(ThemeMode),
{
    fn apply_mode(&mut self, mode: ThemeMode) {
        self(mode);
    }
}

/// A shared "dark" marker.
///
/// Clones share the same flag: hand one clone to the theme store as its
/// surface and read the other from the rendering side.
///
/// # Examples
///
/// ```
/// use designkit::theme::{DarkModeFlag, DisplaySurface, ThemeMode};
///
/// let flag = DarkModeFlag::default();
/// let mut surface = flag.clone();
/// surface.apply_mode(ThemeMode::Dark);
/// assert!(flag.is_dark());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DarkModeFlag {
    dark: Arc<AtomicBool>,
}

impl DarkModeFlag {
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark.load(Ordering::Acquire)
    }

    /// The mode currently marked on the surface.
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        if self.is_dark() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

impl DisplaySurface for DarkModeFlag {
    fn apply_mode(&mut self, mode: ThemeMode) {
        self.dark.store(mode.is_dark(), Ordering::Release);
    }
}
