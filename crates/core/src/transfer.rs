//! Drag-and-drop gesture types and the sequence surgery behind them.

use std::collections::HashSet;

use serde::Serialize;

use crate::item::{Item, ItemId, Side};

/// A completed drag gesture as reported by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropGesture {
	/// Panel the drag started in.
	pub source: Side,
	/// Panel the item was released over.
	pub target: Side,
	/// Position of the dragged item in `source` when the drag started.
	pub source_index: usize,
	/// Insertion position in `target`.
	pub target_index: usize,
	/// Id of the item under the pointer.
	pub item: ItemId,
}

impl DropGesture {
	/// Drag within a single panel.
	pub fn reorder(side: Side, from: usize, to: usize, item: ItemId) -> Self {
		Self {
			source: side,
			target: side,
			source_index: from,
			target_index: to,
			item,
		}
	}

	/// Drag from `source` into the opposite panel.
	pub fn transfer(source: Side, from: usize, to: usize, item: ItemId) -> Self {
		Self {
			source,
			target: source.other(),
			source_index: from,
			target_index: to,
			item,
		}
	}

	pub fn is_reorder(&self) -> bool {
		self.source == self.target
	}
}

/// Which branch a drop took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DropKind {
	Reorder,
	Single,
	Batch,
}

/// What a successful drop did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropOutcome {
	pub kind: DropKind,
	/// Ids that changed position, in their new order.
	pub moved: Vec<ItemId>,
}

/// Remove the item at `from` and reinsert it at `to` within one sequence.
pub(crate) fn move_within(items: &mut Vec<Item>, from: usize, to: usize) {
	let item = items.remove(from);
	items.insert(to, item);
}

/// Move a single item between sequences.
pub(crate) fn transfer_one(source: &mut Vec<Item>, target: &mut Vec<Item>, from: usize, to: usize) {
	let item = source.remove(from);
	target.insert(to, item);
}

/// Move every item of `source` whose id is in `selected` into `target`.
///
/// The batch lands contiguously starting at `drop_at`, in the order the items
/// had in `source`. Ids that are no longer present in `source` are skipped.
pub(crate) fn transfer_batch(
	source: &mut Vec<Item>,
	target: &mut Vec<Item>,
	selected: &HashSet<ItemId>,
	drop_at: usize,
) -> Vec<ItemId> {
	let mut indices: Vec<usize> = selected
		.iter()
		.filter_map(|id| source.iter().position(|item| item.id == *id))
		.collect();
	indices.sort_unstable();

	let mut moved = Vec::with_capacity(indices.len());
	for (removed, index) in indices.into_iter().enumerate() {
		// Earlier removals shift every later index down by one.
		let item = source.remove(index - removed);
		moved.push(item.id);
		target.insert(drop_at + removed, item);
	}
	moved
}
