use std::path::PathBuf;

use dualist::{SeedData, UiLabels};
use dualist_tui::{Theme, default_theme};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Where the initial lists came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOrigin {
	Builtin,
	Config,
	File(PathBuf),
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	/// Theme name as configured; validated against the built-in themes.
	pub theme: String,
	pub labels: UiLabels,
	pub seed: SeedData,
	pub seed_origin: SeedOrigin,
	/// Explicit log file, `None` for the default location.
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Theme selected by name, falling back to the default theme.
	pub fn resolved_theme(&self) -> Theme {
		dualist_tui::by_name(&self.theme).unwrap_or_else(default_theme)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
