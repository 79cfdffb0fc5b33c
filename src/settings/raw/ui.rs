use dualist::UiLabels;
use serde::Deserialize;

use super::super::util::trimmed;
use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "slate";

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) left_title: Option<String>,
	pub(super) right_title: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) theme: String,
	pub(super) labels: UiLabels,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(title) = cli.left_title.clone() {
			self.left_title = Some(title);
		}
		if let Some(title) = cli.right_title.clone() {
			self.right_title = Some(title);
		}
	}

	/// Fill defaults. Blank titles survive as empty strings so validation can
	/// report where they came from.
	pub(super) fn finalize(self) -> UiResolution {
		let mut labels = UiLabels::default();
		if let Some(title) = self.left_title {
			labels.left.title = trimmed(title);
		}
		if let Some(title) = self.right_title {
			labels.right.title = trimmed(title);
		}

		let theme = self
			.theme
			.map(trimmed)
			.unwrap_or_else(|| DEFAULT_THEME.to_string());

		UiResolution { theme, labels }
	}
}
