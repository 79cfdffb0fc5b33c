//! Ordered storage for the two panels.

use std::collections::HashSet;

use crate::error::TransferError;
use crate::item::{Item, ItemId, Side};

const SEED_LEFT: usize = 8;
const SEED_RIGHT: usize = 2;

/// The built-in startup partition: `Item 1` to `Item 8` on the left,
/// `Item 9` and `Item 10` on the right.
#[must_use]
pub fn seed_items() -> (Vec<Item>, Vec<Item>) {
	let make = |id: usize| Item::new(id as ItemId, format!("Item {id}"));
	let left = (1..=SEED_LEFT).map(make).collect();
	let right = (SEED_LEFT + 1..=SEED_LEFT + SEED_RIGHT).map(make).collect();
	(left, right)
}

/// Two ordered item sequences, one per [`Side`].
///
/// An id never appears twice, neither within one sequence nor across both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStore {
	left: Vec<Item>,
	right: Vec<Item>,
}

impl ListStore {
	/// Build a store from an initial partition, rejecting duplicate ids.
	pub fn new(left: Vec<Item>, right: Vec<Item>) -> Result<Self, TransferError> {
		let mut seen = HashSet::with_capacity(left.len() + right.len());
		for item in left.iter().chain(right.iter()) {
			if !seen.insert(item.id) {
				return Err(TransferError::DuplicateId { id: item.id });
			}
		}
		Ok(Self { left, right })
	}

	/// Store populated with [`seed_items`].
	#[must_use]
	pub fn seeded() -> Self {
		let (left, right) = seed_items();
		Self { left, right }
	}

	pub fn items(&self, side: Side) -> &[Item] {
		match side {
			Side::Left => &self.left,
			Side::Right => &self.right,
		}
	}

	pub fn len(&self, side: Side) -> usize {
		self.items(side).len()
	}

	/// Position of `id` within the given side, if present.
	pub fn position(&self, side: Side, id: ItemId) -> Option<usize> {
		self.items(side).iter().position(|item| item.id == id)
	}

	pub fn contains(&self, side: Side, id: ItemId) -> bool {
		self.position(side, id).is_some()
	}

	/// Total number of items across both sides.
	pub fn total_len(&self) -> usize {
		self.left.len() + self.right.len()
	}

	pub(crate) fn items_mut(&mut self, side: Side) -> &mut Vec<Item> {
		match side {
			Side::Left => &mut self.left,
			Side::Right => &mut self.right,
		}
	}

	/// Borrow `source` and its opposite side mutably at the same time.
	pub(crate) fn pair_mut(&mut self, source: Side) -> (&mut Vec<Item>, &mut Vec<Item>) {
		match source {
			Side::Left => (&mut self.left, &mut self.right),
			Side::Right => (&mut self.right, &mut self.left),
		}
	}
}
