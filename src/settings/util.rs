use std::path::Path;

/// Trim surrounding whitespace, keeping the value even when it ends up empty.
pub(super) fn trimmed(value: String) -> String {
	let trimmed = value.trim();
	if trimmed.len() == value.len() {
		value
	} else {
		trimmed.to_string()
	}
}

/// Render `path` relative to `home` as `~/...` when it lives below it.
pub(super) fn display_path(path: &Path, home: Option<&Path>) -> String {
	if let Some(home) = home
		&& let Ok(rel) = path.strip_prefix(home)
	{
		if rel.components().next().is_none() {
			return "~".to_string();
		}
		let sep = std::path::MAIN_SEPARATOR;
		return format!("~{}{}", sep, rel.display());
	}
	path.display().to_string()
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;

	#[test]
	fn trimming_strips_whitespace_only() {
		assert_eq!(trimmed("  Pool ".into()), "Pool");
		assert_eq!(trimmed("Pool".into()), "Pool");
		assert_eq!(trimmed("   ".into()), "");
	}

	#[test]
	fn display_path_prefers_home_relative_paths() {
		let home = PathBuf::from("/home/someone");
		let inside = home.join("logs").join("dualist.log");

		let shown = display_path(&inside, Some(&home));
		assert!(shown.starts_with('~'));
		assert!(shown.ends_with("dualist.log"));

		assert_eq!(display_path(&home, Some(&home)), "~");
		assert_eq!(
			display_path(Path::new("/var/log/dualist.log"), Some(&home)),
			"/var/log/dualist.log"
		);
		assert_eq!(display_path(&inside, None), inside.display().to_string());
	}
}
