//! Visual styling utilities.
//!
//! Themes are the color schemes applied to both panels and the status bar.

/// The `theme` submodule contains the theme type and the built-in schemes.
pub mod theme;

pub use theme::{Theme, ThemeDefinition, builtin_themes, by_name, default_theme, names};
