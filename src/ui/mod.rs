//! Terminal rendering layer.
//!
//! ```text
//! TableView → compute_viewmodel → TableViewModel → Renderer → String
//! ```
//!
//! # Modules
//!
//! - [`palette`]: Light/dark color palettes and ANSI escape sequence generation
//! - [`renderer`]: Table and theme status rendering

pub mod palette;
pub mod renderer;

pub use palette::{Palette, PaletteColors};
pub use renderer::Renderer;
