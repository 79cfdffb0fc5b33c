use std::collections::HashSet;

use crate::item::{ItemId, Side};

/// Per-panel sets of selected item ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
	left: HashSet<ItemId>,
	right: HashSet<ItemId>,
}

impl SelectionState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Flip membership of `id` on `side`. Returns whether it is now selected.
	pub fn toggle(&mut self, side: Side, id: ItemId) -> bool {
		let set = self.set_mut(side);
		if set.remove(&id) {
			false
		} else {
			set.insert(id);
			true
		}
	}

	pub fn contains(&self, side: Side, id: ItemId) -> bool {
		self.set(side).contains(&id)
	}

	pub fn has_any(&self, side: Side) -> bool {
		!self.set(side).is_empty()
	}

	pub fn len(&self, side: Side) -> usize {
		self.set(side).len()
	}

	pub fn ids(&self, side: Side) -> &HashSet<ItemId> {
		self.set(side)
	}

	/// Empty both sets.
	pub fn clear(&mut self) {
		self.left.clear();
		self.right.clear();
	}

	/// Whether both sets are empty.
	pub fn is_clear(&self) -> bool {
		self.left.is_empty() && self.right.is_empty()
	}

	/// A drag of `id` out of `source` moves only that item unless it is part
	/// of a non-empty selection.
	pub(crate) fn is_single_drag(&self, source: Side, id: ItemId) -> bool {
		!self.contains(source, id) || !self.has_any(source)
	}

	fn set(&self, side: Side) -> &HashSet<ItemId> {
		match side {
			Side::Left => &self.left,
			Side::Right => &self.right,
		}
	}

	fn set_mut(&mut self, side: Side) -> &mut HashSet<ItemId> {
		match side {
			Side::Left => &mut self.left,
			Side::Right => &mut self.right,
		}
	}
}
