//! Environment dark-mode signal.
//!
//! The theme store consults a [`ColorSchemeProbe`] only when no preference has
//! been persisted. Closures implement the trait, so tests and embedders can
//! inject the signal directly.

use std::env;

/// Environment variable overriding the detected color scheme (`dark`/`light`).
pub const COLOR_SCHEME_ENV: &str = "DESIGNKIT_COLOR_SCHEME";

/// Answers "does the user's platform prefer dark mode?".
pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> bool;
}

impl<F> ColorSchemeProbe for F
where
    F: Fn() -> bool,
{
    fn prefers_dark(&self) -> bool {
        self()
    }
}

/// Reads the dark-mode signal from the process environment.
///
/// Detection order:
/// 1. `DESIGNKIT_COLOR_SCHEME` set to `dark` or `light`
/// 2. `COLORFGBG` (`"fg;bg"` ANSI indices): a background other than 7 or 15
///    means a dark terminal
/// 3. No signal: not dark
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvColorScheme;

impl EnvColorScheme {
    fn detect(scheme: Option<&str>, colorfgbg: Option<&str>) -> bool {
        if let Some(scheme) = scheme {
            match scheme.trim().to_ascii_lowercase().as_str() {
                "dark" => return true,
                "light" => return false,
                other => tracing::debug!(value = %other, "ignoring unknown color scheme override"),
            }
        }

        colorfgbg
            .and_then(|value| value.split(';').next_back())
            .and_then(|bg| bg.trim().parse::<u8>().ok())
            .is_some_and(|bg| bg != 7 && bg != 15)
    }
}

impl ColorSchemeProbe for EnvColorScheme {
    fn prefers_dark(&self) -> bool {
        let dark = Self::detect(
            env::var(COLOR_SCHEME_ENV).ok().as_deref(),
            env::var("COLORFGBG").ok().as_deref(),
        );
        tracing::debug!(prefers_dark = dark, "probed environment color scheme");
        dark
    }
}
