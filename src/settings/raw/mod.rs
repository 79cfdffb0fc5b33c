use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod lists;
mod logging;
mod ui;

use lists::ListsSection;
use logging::LoggingSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	lists: ListsSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			ui_theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"DUALIST__UI__THEME",
				"--theme",
				"ui.theme",
			),
			ui_left_title: detect_source(
				cli.left_title.is_some(),
				self.ui.left_title.is_some(),
				"DUALIST__UI__LEFT_TITLE",
				"--left-title",
				"ui.left_title",
			),
			ui_right_title: detect_source(
				cli.right_title.is_some(),
				self.ui.right_title.is_some(),
				"DUALIST__UI__RIGHT_TITLE",
				"--right-title",
				"ui.right_title",
			),
			lists: detect_source(
				cli.seed.is_some(),
				cli.seed.is_some() || self.lists.is_set(),
				"DUALIST__LISTS__LEFT",
				"--seed",
				"lists",
			),
		};

		let ui = self.ui.finalize();
		let (seed, seed_origin) = self.lists.resolve(cli.seed.as_deref())?;

		let config = ResolvedConfig {
			theme: ui.theme,
			labels: ui.labels,
			seed,
			seed_origin,
			log_file: self.logging.file,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
