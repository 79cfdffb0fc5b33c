use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

/// `[logging]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) file: Option<PathBuf>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.log_file.clone() {
			self.file = Some(path);
		}
	}
}
