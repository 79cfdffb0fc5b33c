use thiserror::Error;

use crate::item::{ItemId, Side};

/// Reasons a list operation was rejected.
///
/// Every variant is recoverable: the operation that produced it did not touch
/// the lists or the selections.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransferError {
	/// An index fell outside the bounds of the named panel.
	#[error("index {index} is out of bounds for the {side} list (length {len})")]
	InvalidIndex { side: Side, index: usize, len: usize },

	/// The referenced item is not where the caller expected it to be.
	#[error("item {id} is not present in the {side} list")]
	UnknownItem { side: Side, id: ItemId },

	/// The same id was supplied more than once while building the lists.
	#[error("item id {id} appears more than once")]
	DuplicateId { id: ItemId },
}
