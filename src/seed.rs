//! Initial contents of the two panels.
//!
//! The lists come from the built-in seed, the `[lists]` configuration table or
//! a JSON file passed with `--seed`.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use dualist_core::{Item, ItemId, TransferError, TransferList, seed_items};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures while loading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
	#[error("failed to read seed file {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("seed file {path} is not valid JSON")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
	#[error("seed file {path} is inconsistent")]
	Invalid {
		path: PathBuf,
		#[source]
		source: TransferError,
	},
}

/// Items for the left and right panel, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
	pub left: Vec<Item>,
	pub right: Vec<Item>,
}

impl SeedData {
	pub fn new(left: Vec<Item>, right: Vec<Item>) -> Self {
		Self { left, right }
	}

	/// `Item 1`..`Item 8` on the left, `Item 9` and `Item 10` on the right.
	pub fn builtin() -> Self {
		let (left, right) = seed_items();
		Self { left, right }
	}

	pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Read and validate a JSON seed file.
	pub fn load(path: &Path) -> Result<Self, SeedError> {
		let text = fs::read_to_string(path).map_err(|source| SeedError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let seed = Self::from_json_str(&text).map_err(|source| SeedError::Parse {
			path: path.to_path_buf(),
			source,
		})?;
		if let Some(id) = seed.duplicate_id() {
			return Err(SeedError::Invalid {
				path: path.to_path_buf(),
				source: TransferError::DuplicateId { id },
			});
		}
		Ok(seed)
	}

	/// First id that occurs more than once across both panels.
	pub fn duplicate_id(&self) -> Option<ItemId> {
		let mut seen = HashSet::new();
		self.left
			.iter()
			.chain(&self.right)
			.map(|item| item.id)
			.find(|id| !seen.insert(*id))
	}

	pub fn len(&self) -> usize {
		self.left.len() + self.right.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn into_list(self) -> Result<TransferList, TransferError> {
		TransferList::from_items(self.left, self.right)
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use tempfile::NamedTempFile;

	use super::*;

	fn write_seed(contents: &str) -> NamedTempFile {
		let mut file = NamedTempFile::new().expect("temp file");
		file.write_all(contents.as_bytes()).expect("write seed");
		file
	}

	#[test]
	fn builtin_matches_the_core_seed() {
		let seed = SeedData::builtin();
		assert_eq!(seed.left.len(), 8);
		assert_eq!(seed.right.len(), 2);
		assert_eq!(seed.into_list().expect("valid"), TransferList::seeded());
	}

	#[test]
	fn loads_json_with_a_missing_side() {
		let file = write_seed(r#"{"left": [{"id": 4, "name": "Four"}]}"#);
		let seed = SeedData::load(file.path()).expect("loads");
		assert_eq!(seed.left, vec![Item::new(4, "Four")]);
		assert!(seed.right.is_empty());
	}

	#[test]
	fn rejects_duplicate_ids() {
		let file = write_seed(
			r#"{"left": [{"id": 1, "name": "a"}], "right": [{"id": 1, "name": "b"}]}"#,
		);
		let err = SeedData::load(file.path()).expect_err("duplicate");
		assert!(matches!(
			err,
			SeedError::Invalid {
				source: TransferError::DuplicateId { id: 1 },
				..
			}
		));
	}

	#[test]
	fn reports_malformed_json_and_missing_files() {
		let file = write_seed("{ not json");
		assert!(matches!(
			SeedData::load(file.path()),
			Err(SeedError::Parse { .. })
		));

		let missing = Path::new("/definitely/not/here/seed.json");
		assert!(matches!(SeedData::load(missing), Err(SeedError::Read { .. })));
	}
}
