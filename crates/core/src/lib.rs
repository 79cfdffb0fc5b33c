//! Selection-aware list transfer engine behind `dualist`.
//!
//! A [`TransferList`] owns two ordered item sequences (the left and right
//! panels) together with one selection set per panel. Drag gestures are applied
//! with [`TransferList::drop`], explicit batch moves with
//! [`TransferList::move_all_selected_to_other_side`]. Every move clears both
//! selection sets once it succeeds; rejected operations leave the state as it
//! was.

mod batch;
pub mod error;
mod item;
mod list;
mod selection;
mod store;
mod transfer;

pub use error::TransferError;
pub use item::{Item, ItemId, Side};
pub use list::TransferList;
pub use selection::SelectionState;
pub use store::{ListStore, seed_items};
pub use transfer::{DropGesture, DropKind, DropOutcome};
