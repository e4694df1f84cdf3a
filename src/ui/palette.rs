//! Color palettes and ANSI escape sequence generation.
//!
//! Each [`ThemeMode`] has a built-in palette. A custom palette can be loaded
//! from a TOML file:
//!
//! ```toml
//! name = "my-palette"
//!
//! [colors]
//! header_fg = "#4c4f69"
//! text_normal = "#4c4f69"
//! text_dim = "#9ca0b0"
//! border = "#ccd0da"
//! accent = "#1e66f5"
//! empty_state_fg = "#1e66f5"
//! ```

use crate::domain::error::{DesignKitError, Result};
use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Named set of colors used by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Palette {
    pub name: String,
    pub colors: PaletteColors,
}

/// Hex color strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaletteColors {
    pub header_fg: String,
    pub text_normal: String,
    /// Footer, summary, and secondary text.
    pub text_dim: String,
    pub border: String,
    /// Sort indicators and the current page.
    pub accent: String,
    pub empty_state_fg: String,
}

impl Palette {
    /// Built-in palette for `mode`.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            colors: PaletteColors {
                header_fg: "#4c4f69".to_string(),
                text_normal: "#4c4f69".to_string(),
                text_dim: "#9ca0b0".to_string(),
                border: "#ccd0da".to_string(),
                accent: "#1e66f5".to_string(),
                empty_state_fg: "#1e66f5".to_string(),
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            colors: PaletteColors {
                header_fg: "#cdd6f4".to_string(),
                text_normal: "#cdd6f4".to_string(),
                text_dim: "#6c7086".to_string(),
                border: "#45475a".to_string(),
                accent: "#f5c2e7".to_string(),
                empty_state_fg: "#89b4fa".to_string(),
            },
        }
    }

    /// Loads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DesignKitError::Io`] if the file cannot be read and
    /// [`DesignKitError::Config`] if it does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| DesignKitError::Config(format!("Failed to parse palette TOML: {e}")))
    }

    /// Strips `#`, parses six hex digits, falls back to white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn hex_colors_become_truecolor_escapes() {
        assert_eq!(Palette::fg("#1e66f5"), "\u{1b}[38;2;30;102;245m");
        assert_eq!(Palette::fg("cdd6f4"), "\u{1b}[38;2;205;214;244m");
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Palette::fg("#abc"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Palette::fg("#zzzzzz"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn mode_selects_builtin() {
        assert_eq!(Palette::for_mode(ThemeMode::Dark).name, "dark");
        assert_eq!(Palette::for_mode(ThemeMode::Light), Palette::default());
    }

    #[test]
    fn loads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"name = "custom"

[colors]
header_fg = "#000000"
text_normal = "#111111"
text_dim = "#222222"
border = "#333333"
accent = "#444444"
empty_state_fg = "#555555"
"##
        )
        .unwrap();

        let palette = Palette::from_file(file.path()).unwrap();
        assert_eq!(palette.name, "custom");
        assert_eq!(palette.colors.accent, "#444444");
    }

    #[test]
    fn rejects_incomplete_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"broken\"\n").unwrap();
        assert!(matches!(Palette::from_file(file.path()), Err(DesignKitError::Config(_))));
    }
}
