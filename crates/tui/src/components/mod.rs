//! UI building blocks shared across rendering and state modules.

/// Item row construction.
pub mod rows;
/// Scrollbar for panels that overflow.
pub mod scrollbar;
/// Status bar rendering.
pub mod status;
/// Table rendering and configuration.
pub mod tables;

pub use rows::build_item_rows;
pub use scrollbar::{point_in_rect, render_scrollbar};
pub use status::{StatusLevel, StatusMessage, render_status};
pub use tables::{TableSpec, render_table};
