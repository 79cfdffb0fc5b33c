mod builtins;
mod types;

pub use types::{Theme, ThemeDefinition};

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeDefinition] {
	builtins::BUILT_IN_DEFINITIONS
}

/// The theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	builtins::SLATE
}

/// Canonical names of the built-in themes.
pub fn names() -> impl Iterator<Item = &'static str> {
	builtin_themes().iter().map(|definition| definition.name)
}

/// Look a theme up by name or alias, ignoring case and surrounding whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	builtin_themes()
		.iter()
		.find(|definition| definition.matches(&wanted))
		.map(|definition| definition.theme)
}

pub(crate) fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_is_case_insensitive_and_honours_aliases() {
		assert!(by_name("Slate").is_some());
		assert!(by_name("  DARK ").is_some());
		assert!(by_name("solarized").is_some());
		assert!(by_name("neon").is_none());
	}

	#[test]
	fn names_lists_every_builtin_once() {
		let all: Vec<_> = names().collect();
		assert_eq!(all, vec!["slate", "light", "solarized"]);
	}
}
