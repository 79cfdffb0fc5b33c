use dualist_core::{Item, TransferList};
use serde::{Deserialize, Serialize};

/// Final partition reported when the interactive session ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOutcome {
	/// Whether the user confirmed the result instead of cancelling.
	pub accepted: bool,
	pub left: Vec<Item>,
	pub right: Vec<Item>,
}

impl TransferOutcome {
	pub(crate) fn from_list(list: &TransferList, accepted: bool) -> Self {
		Self {
			accepted,
			left: list.left_items().to_vec(),
			right: list.right_items().to_vec(),
		}
	}
}
