//! Configuration loading and resolution utilities.
//!
//! Config files, `DUALIST__*` environment variables and CLI flags are layered
//! with the `config` crate. `load` is the primary entry point and returns a
//! validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::{ResolvedConfig, SeedOrigin};
