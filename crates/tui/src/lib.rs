//! Interactive terminal front end for `dualist`.
//!
//! This crate is the presentation layer around [`dualist_core::TransferList`]:
//! it renders the two panels, translates mouse drags and key presses into
//! drop gestures and batch commands, and reports errors in a status bar.

mod app;
pub mod components;
mod config;
mod outcome;
mod runtime;
pub mod style;

pub use app::App;
pub use config::{PaneLabels, UiLabels};
pub use outcome::TransferOutcome;
pub use runtime::run;

pub use crate::style::{Theme, ThemeDefinition, builtin_themes, by_name, default_theme, names};
