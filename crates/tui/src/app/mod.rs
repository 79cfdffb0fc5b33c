//! Core application state and behavior for the two-panel transfer UI.
//!
//! The [`App`] type owns the [`dualist_core::TransferList`] together with
//! per-panel view state. Supporting modules partition the implementation into
//! input handling (actions), rendering, and panel geometry.

mod actions;
mod pane;
mod render;
mod state;

pub use state::App;

#[cfg(test)]
mod tests;
