use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Stable identity of an [`Item`].
pub type ItemId = u64;

/// A single entry in one of the two panels.
///
/// Identity is carried by `id` alone: two items compare equal whenever their
/// ids match, even if the names differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
	pub id: ItemId,
	pub name: String,
}

impl Item {
	pub fn new(id: ItemId, name: impl Into<String>) -> Self {
		Self {
			id,
			name: name.into(),
		}
	}
}

impl PartialEq for Item {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for Item {}

impl Hash for Item {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

/// One of the two panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
	Left,
	Right,
}

impl Side {
	/// The opposite panel.
	#[must_use]
	pub fn other(self) -> Self {
		match self {
			Self::Left => Self::Right,
			Self::Right => Self::Left,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Left => "left",
			Self::Right => "right",
		}
	}
}

impl fmt::Display for Side {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn items_compare_by_id_only() {
		assert_eq!(Item::new(1, "one"), Item::new(1, "renamed"));
		assert_ne!(Item::new(1, "same"), Item::new(2, "same"));
	}

	#[test]
	fn side_other_flips() {
		assert_eq!(Side::Left.other(), Side::Right);
		assert_eq!(Side::Right.other(), Side::Left);
	}

	#[test]
	fn side_serializes_lowercase() {
		let json = serde_json::to_string(&Side::Right).unwrap();
		assert_eq!(json, "\"right\"");
	}
}
