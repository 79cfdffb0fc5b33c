use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if dualist_tui::by_name(&config.theme).is_none() {
		let known = dualist_tui::names().collect::<Vec<_>>().join(", ");
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme, expected one of: {known}"),
		));
	}

	if config.labels.left.title.is_empty() {
		return Err(ConfigError::invalid(
			"ui.left_title",
			config.labels.left.title.clone(),
			sources.source_for_left_title(),
			"must not be blank",
		));
	}

	if config.labels.right.title.is_empty() {
		return Err(ConfigError::invalid(
			"ui.right_title",
			config.labels.right.title.clone(),
			sources.source_for_right_title(),
			"must not be blank",
		));
	}

	if let Some(id) = config.seed.duplicate_id() {
		return Err(ConfigError::invalid(
			"lists",
			id.to_string(),
			sources.source_for_lists(),
			"item ids must be unique across both lists",
		));
	}

	Ok(())
}
