use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Origin of every setting that validation can reject.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) ui_theme: Option<SettingSource>,
	pub(crate) ui_left_title: Option<SettingSource>,
	pub(crate) ui_right_title: Option<SettingSource>,
	pub(crate) lists: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.ui_theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}

	pub(crate) fn source_for_left_title(&self) -> SettingSource {
		self.ui_left_title
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.left_title"))
	}

	pub(crate) fn source_for_right_title(&self) -> SettingSource {
		self.ui_right_title
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.right_title"))
	}

	pub(crate) fn source_for_lists(&self) -> SettingSource {
		self.lists
			.clone()
			.unwrap_or(SettingSource::ConfigKey("lists"))
	}
}
