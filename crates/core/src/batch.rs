use std::collections::HashSet;

use crate::item::{Item, ItemId};

/// Append the selected items of `source` to the end of `target`, keeping their
/// order from `source`.
pub(crate) fn append_selected(
	source: &mut Vec<Item>,
	target: &mut Vec<Item>,
	selected: &HashSet<ItemId>,
) -> Vec<ItemId> {
	let (moving, staying): (Vec<Item>, Vec<Item>) = std::mem::take(source)
		.into_iter()
		.partition(|item| selected.contains(&item.id));
	*source = staying;

	let moved = moving.iter().map(|item| item.id).collect();
	target.extend(moving);
	moved
}

#[cfg(test)]
mod tests {
	use super::*;

	fn items(ids: &[ItemId]) -> Vec<Item> {
		ids.iter().map(|&id| Item::new(id, format!("Item {id}"))).collect()
	}

	fn ids(items: &[Item]) -> Vec<ItemId> {
		items.iter().map(|item| item.id).collect()
	}

	#[test]
	fn appends_in_source_order_regardless_of_set_order() {
		let mut source = items(&[5, 1, 4, 2]);
		let mut target = items(&[9]);
		let selected: HashSet<ItemId> = [2, 5, 4].into_iter().collect();

		let moved = append_selected(&mut source, &mut target, &selected);

		assert_eq!(moved, vec![5, 4, 2]);
		assert_eq!(ids(&source), vec![1]);
		assert_eq!(ids(&target), vec![9, 5, 4, 2]);
	}

	#[test]
	fn stale_ids_move_nothing() {
		let mut source = items(&[1, 2]);
		let mut target = Vec::new();
		let selected: HashSet<ItemId> = [42].into_iter().collect();

		let moved = append_selected(&mut source, &mut target, &selected);

		assert!(moved.is_empty());
		assert_eq!(ids(&source), vec![1, 2]);
		assert!(target.is_empty());
	}
}
