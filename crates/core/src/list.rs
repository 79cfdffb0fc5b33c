//! The [`TransferList`] aggregate that owns both panels and their selections.

use tracing::{debug, warn};

use crate::batch::append_selected;
use crate::error::TransferError;
use crate::item::{Item, ItemId, Side};
use crate::selection::SelectionState;
use crate::store::ListStore;
use crate::transfer::{
	DropGesture, DropKind, DropOutcome, move_within, transfer_batch, transfer_one,
};

/// Two item panels plus the selection sets used for batch operations.
///
/// Every public mutation is a self-contained transaction: it either applies
/// completely and clears the selections, or returns an error and leaves the
/// lists and selections untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferList {
	store: ListStore,
	selection: SelectionState,
}

impl TransferList {
	pub fn new(store: ListStore) -> Self {
		Self {
			store,
			selection: SelectionState::new(),
		}
	}

	/// Build a list from an initial partition, rejecting duplicate ids.
	pub fn from_items(left: Vec<Item>, right: Vec<Item>) -> Result<Self, TransferError> {
		ListStore::new(left, right).map(Self::new)
	}

	/// List populated with the built-in seed data.
	pub fn seeded() -> Self {
		Self::new(ListStore::seeded())
	}

	pub fn store(&self) -> &ListStore {
		&self.store
	}

	pub fn selection(&self) -> &SelectionState {
		&self.selection
	}

	pub fn items(&self, side: Side) -> &[Item] {
		self.store.items(side)
	}

	pub fn left_items(&self) -> &[Item] {
		self.store.items(Side::Left)
	}

	pub fn right_items(&self) -> &[Item] {
		self.store.items(Side::Right)
	}

	/// Flip the selection state of `item` on `side`.
	///
	/// Returns whether the item is selected afterwards. Items that do not live
	/// on `side` cannot be selected there and yield
	/// [`TransferError::UnknownItem`]. [`SelectionState::toggle`] is the
	/// infallible primitive underneath.
	pub fn toggle_select(&mut self, item: &Item, side: Side) -> Result<bool, TransferError> {
		if !self.store.contains(side, item.id) {
			return Err(TransferError::UnknownItem { side, id: item.id });
		}
		let selected = self.selection.toggle(side, item.id);
		debug!(id = item.id, %side, selected, "toggled selection");
		Ok(selected)
	}

	pub fn is_selected(&self, item: &Item, side: Side) -> bool {
		self.selection.contains(side, item.id)
	}

	pub fn has_selected_items(&self, side: Side) -> bool {
		self.selection.has_any(side)
	}

	pub fn selected_count(&self, side: Side) -> usize {
		self.selection.len(side)
	}

	/// Ids selected on `side`, in the order the items appear in that panel.
	pub fn selected_ids(&self, side: Side) -> Vec<ItemId> {
		self.store
			.items(side)
			.iter()
			.filter(|item| self.selection.contains(side, item.id))
			.map(|item| item.id)
			.collect()
	}

	pub fn clear_selections(&mut self) {
		self.selection.clear();
	}

	/// Apply a completed drag gesture.
	///
	/// Within one panel the item is simply repositioned. Across panels, the
	/// whole source selection moves when the dragged item is part of it;
	/// otherwise only the dragged item moves. Selections are cleared after
	/// any successful drop.
	pub fn drop(&mut self, gesture: DropGesture) -> Result<DropOutcome, TransferError> {
		if let Err(err) = self.check_gesture(&gesture) {
			warn!(?gesture, %err, "rejected drop");
			return Err(err);
		}

		let DropGesture {
			source,
			target,
			source_index,
			target_index,
			item,
		} = gesture;

		let outcome = if gesture.is_reorder() {
			move_within(self.store.items_mut(source), source_index, target_index);
			DropOutcome {
				kind: DropKind::Reorder,
				moved: vec![item],
			}
		} else if self.selection.is_single_drag(source, item) {
			let (from, to) = self.store.pair_mut(source);
			transfer_one(from, to, source_index, target_index);
			DropOutcome {
				kind: DropKind::Single,
				moved: vec![item],
			}
		} else {
			let (from, to) = self.store.pair_mut(source);
			let moved = transfer_batch(from, to, self.selection.ids(source), target_index);
			DropOutcome {
				kind: DropKind::Batch,
				moved,
			}
		};

		debug!(
			kind = ?outcome.kind,
			%source,
			%target,
			source_index,
			target_index,
			moved = outcome.moved.len(),
			"applied drop"
		);
		self.selection.clear();
		Ok(outcome)
	}

	/// Move every selected item of `from` to the end of the other panel.
	///
	/// Returns the number of items moved. With nothing selected on `from`
	/// this is a no-op and the selections are left alone.
	pub fn move_all_selected_to_other_side(&mut self, from: Side) -> usize {
		if !self.selection.has_any(from) {
			return 0;
		}

		let (source, target) = self.store.pair_mut(from);
		let moved = append_selected(source, target, self.selection.ids(from));
		debug!(%from, to = %from.other(), moved = moved.len(), "moved selection");
		self.selection.clear();
		moved.len()
	}

	pub fn move_selected_to_right(&mut self) -> usize {
		self.move_all_selected_to_other_side(Side::Left)
	}

	pub fn move_selected_to_left(&mut self) -> usize {
		self.move_all_selected_to_other_side(Side::Right)
	}

	fn check_gesture(&self, gesture: &DropGesture) -> Result<(), TransferError> {
		let source_len = self.store.len(gesture.source);
		if gesture.source_index >= source_len {
			return Err(TransferError::InvalidIndex {
				side: gesture.source,
				index: gesture.source_index,
				len: source_len,
			});
		}

		if self.store.items(gesture.source)[gesture.source_index].id != gesture.item {
			return Err(TransferError::UnknownItem {
				side: gesture.source,
				id: gesture.item,
			});
		}

		// A reorder never grows the panel, so its last valid slot is len - 1.
		let (target_len, max_index) = if gesture.is_reorder() {
			(source_len, source_len - 1)
		} else {
			let len = self.store.len(gesture.target);
			(len, len)
		};
		if gesture.target_index > max_index {
			return Err(TransferError::InvalidIndex {
				side: gesture.target,
				index: gesture.target_index,
				len: target_len,
			});
		}

		Ok(())
	}
}
