use std::env;
use std::fmt::Write;
use std::path::{Path, PathBuf};

use super::super::util::display_path;
use super::{ResolvedConfig, SeedOrigin};

pub(super) fn print_summary(config: &ResolvedConfig) {
	let home = env::var_os("HOME").map(PathBuf::from);
	print!("{}", format_summary(config, home.as_deref()));
}

fn format_summary(config: &ResolvedConfig, home: Option<&Path>) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  UI theme: {}", config.theme);
	let _ = writeln!(out, "  Left title: {}", config.labels.left.title);
	let _ = writeln!(out, "  Right title: {}", config.labels.right.title);
	let origin = match &config.seed_origin {
		SeedOrigin::Builtin => "built-in items".to_string(),
		SeedOrigin::Config => "[lists] table".to_string(),
		SeedOrigin::File(path) => display_path(path, home),
	};
	let _ = writeln!(out, "  Seed: {origin}");
	let _ = writeln!(
		out,
		"  Items: {} left, {} right",
		config.seed.left.len(),
		config.seed.right.len()
	);
	match &config.log_file {
		Some(path) => {
			let _ = writeln!(out, "  Log file: {}", display_path(path, home));
		}
		None => {
			let _ = writeln!(out, "  Log file: (data directory default)");
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use dualist::{SeedData, UiLabels};

	use super::*;

	#[test]
	fn summary_lists_every_setting() {
		let config = ResolvedConfig {
			theme: "light".into(),
			labels: UiLabels::default().with_titles("Pool", "Team"),
			seed: SeedData::builtin(),
			seed_origin: SeedOrigin::File(PathBuf::from("/home/me/seed.json")),
			log_file: Some(PathBuf::from("/tmp/dualist.log")),
		};

		let text = format_summary(&config, Some(Path::new("/home/me")));
		assert!(text.contains("UI theme: light"));
		assert!(text.contains("Left title: Pool"));
		assert!(text.contains("Right title: Team"));
		assert!(text.contains("Seed: ~"));
		assert!(text.contains("Items: 8 left, 2 right"));
		assert!(text.contains("Log file: /tmp/dualist.log"));
	}

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			theme: "slate".into(),
			labels: UiLabels::default(),
			seed: SeedData::default(),
			seed_origin: SeedOrigin::Builtin,
			log_file: None,
		};

		print_summary(&config);
	}
}
