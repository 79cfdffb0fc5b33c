use std::path::Path;

use anyhow::{Context, Result};
use dualist::{Item, SeedData};
use serde::Deserialize;

use super::super::resolved::SeedOrigin;

/// Inline `[lists]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ListsSection {
	pub(super) left: Option<Vec<Item>>,
	pub(super) right: Option<Vec<Item>>,
}

impl ListsSection {
	pub(super) fn is_set(&self) -> bool {
		self.left.is_some() || self.right.is_some()
	}

	/// Pick the initial lists: a `--seed` file wins over the table, which wins
	/// over the built-in items. A table that names only one side leaves the
	/// other one empty.
	pub(super) fn resolve(self, seed_file: Option<&Path>) -> Result<(SeedData, SeedOrigin)> {
		if let Some(path) = seed_file {
			let seed = SeedData::load(path).context("failed to load --seed file")?;
			return Ok((seed, SeedOrigin::File(path.to_path_buf())));
		}

		if self.is_set() {
			let seed = SeedData::new(
				self.left.unwrap_or_default(),
				self.right.unwrap_or_default(),
			);
			return Ok((seed, SeedOrigin::Config));
		}

		Ok((SeedData::builtin(), SeedOrigin::Builtin))
	}
}
