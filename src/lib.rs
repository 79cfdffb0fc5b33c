//! Library half of the `dualist` binary.
//!
//! Directory discovery, logging setup and seed loading live here so that they
//! can be reused and tested outside of `main`. The list model and the terminal
//! front end are re-exported from their own crates.

pub mod app_dirs;
pub mod logging;
pub mod seed;

pub use dualist_core::{Item, ItemId, Side, TransferError, TransferList};
pub use dualist_tui::{App, TransferOutcome, UiLabels, run};
pub use seed::{SeedData, SeedError};
