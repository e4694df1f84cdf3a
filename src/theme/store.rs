//! Theme preference store.
//!
//! Resolves the initial display mode once, exposes it, and persists explicit
//! changes. The mode is applied to an injected [`DisplaySurface`] at
//! initialization and after every change.
//!
//! # Resolution Precedence
//!
//! 1. A valid persisted value under the `"theme"` key
//! 2. The environment's dark-mode signal → [`ThemeMode::Dark`]
//! 3. [`ThemeMode::Light`]
//!
//! # Failure Semantics
//!
//! Persistence is best-effort. Read and write failures are logged at `warn`
//! and the store carries on with its in-memory value ([`ThemeStore::is_degraded`]
//! reports the last outcome). Every change tries to persist again.
//!
//! # Example
//!
//! ```rust
//! use designkit::storage::MemoryStorage;
//! use designkit::theme::{DarkModeFlag, ThemeMode, ThemeOptions, ThemeStore};
//!
//! let flag = DarkModeFlag::default();
//! let mut store = ThemeStore::initialize(
//!     MemoryStorage::new(),
//!     &|| true,
//!     flag.clone(),
//!     ThemeOptions::default(),
//! );
//!
//! assert_eq!(store.theme(), ThemeMode::Dark);
//! assert_eq!(store.toggle_theme(), ThemeMode::Light);
//! assert!(!flag.is_dark());
//! ```

use super::mode::ThemeMode;
use super::probe::ColorSchemeProbe;
use super::surface::DisplaySurface;
use crate::storage::Storage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage slot holding the persisted mode.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Store behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOptions {
    /// Persist a mode resolved from the environment or the default right away,
    /// instead of waiting for the user's first explicit choice.
    pub persist_on_auto_resolve: bool,
}

/// Which precedence step produced the initial mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionSource {
    Persisted,
    Environment,
    Default,
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Persisted => "persisted",
            Self::Environment => "environment",
            Self::Default => "default",
        })
    }
}

/// Light/dark preference with persistence and a display side effect.
pub struct ThemeStore {
    mode: ThemeMode,
    source: ResolutionSource,
    storage: Box<dyn Storage>,
    surface: Box<dyn DisplaySurface>,
    /// Last persistence attempt failed.
    degraded: bool,
}

impl ThemeStore {
    /// Resolves the initial mode and applies it to `surface`.
    ///
    /// `probe` is consulted only when no valid value is persisted. A mode that
    /// did not come from storage is written back only if
    /// `options.persist_on_auto_resolve` is set.
    pub fn initialize<S, P, D>(storage: S, probe: &P, surface: D, options: ThemeOptions) -> Self
    where
        S: Storage + 'static,
        P: ColorSchemeProbe + ?Sized,
        D: DisplaySurface + 'static,
    {
        let _span = tracing::debug_span!("theme_initialize",
            persist_on_auto_resolve = options.persist_on_auto_resolve
        )
        .entered();

        let mut degraded = false;
        let persisted = storage.get(THEME_STORAGE_KEY).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to read theme preference, ignoring it");
            degraded = true;
            None
        });

        let (mode, source) = match persisted.as_deref().map(|raw| (raw, ThemeMode::from_persisted(raw))) {
            Some((_, Some(mode))) => (mode, ResolutionSource::Persisted),
            unresolved => {
                if let Some((raw, None)) = unresolved {
                    tracing::debug!(value = %raw, "ignoring unrecognized persisted theme");
                }
                if probe.prefers_dark() {
                    (ThemeMode::Dark, ResolutionSource::Environment)
                } else {
                    (ThemeMode::Light, ResolutionSource::Default)
                }
            }
        };

        let mut store = Self {
            mode,
            source,
            storage: Box::new(storage),
            surface: Box::new(surface),
            degraded,
        };

        store.surface.apply_mode(mode);
        if source != ResolutionSource::Persisted && options.persist_on_auto_resolve {
            store.persist();
        }

        tracing::info!(theme = %mode, source = %source, "theme resolved");
        store
    }

    /// Current mode. No I/O.
    #[must_use]
    pub const fn theme(&self) -> ThemeMode {
        self.mode
    }

    /// Flips light ↔ dark, applies and persists the new mode, and returns it.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        let next = self.mode.toggled();
        self.commit(next);
        next
    }

    /// Switches to `mode` as an explicit user choice.
    ///
    /// Returns `false` without side effects if `mode` is already active.
    pub fn set_theme(&mut self, mode: ThemeMode) -> bool {
        if mode == self.mode {
            return false;
        }
        self.commit(mode);
        true
    }

    /// Where the initial mode came from.
    #[must_use]
    pub const fn source(&self) -> ResolutionSource {
        self.source
    }

    /// Whether the last storage read or write failed.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }

    fn commit(&mut self, mode: ThemeMode) {
        tracing::debug!(from = %self.mode, to = %mode, "theme changed");
        self.mode = mode;
        self.surface.apply_mode(mode);
        self.persist();
    }

    fn persist(&mut self) {
        match self.storage.set(THEME_STORAGE_KEY, self.mode.as_str()) {
            Ok(()) => self.degraded = false,
            Err(e) => {
                tracing::warn!(error = %e, theme = %self.mode, "failed to persist theme, keeping it in memory");
                self.degraded = true;
            }
        }
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode)
            .field("source", &self.source)
            .field("degraded", &self.degraded)
            .finish_non_exhaustive()
    }
}
