use std::fs;
use std::path::PathBuf;

use clap::Parser;
use dualist::{Item, SeedData};
use tempfile::tempdir;

use super::RawConfig;
use crate::cli::CliArgs;
use crate::settings::SeedOrigin;

fn raw_from_toml(text: &str) -> RawConfig {
	config::Config::builder()
		.add_source(config::File::from_str(text, config::FileFormat::Toml))
		.build()
		.expect("builds")
		.try_deserialize()
		.expect("deserializes")
}

#[test]
fn cli_overrides_take_precedence() {
	let mut cli = CliArgs::parse_from(["dualist", "--theme", "light"]);
	cli.left_title = Some("Pool".into());
	cli.right_title = Some("Team".into());
	cli.log_file = Some(PathBuf::from("/tmp/dualist.log"));

	let mut config = raw_from_toml("[ui]\ntheme = \"solarized\"\nleft_title = \"From file\"\n");
	config.apply_cli_overrides(&cli);

	assert_eq!(config.ui.theme, cli.theme);
	assert_eq!(config.ui.left_title, cli.left_title);
	assert_eq!(config.ui.right_title, cli.right_title);
	assert_eq!(config.logging.file, cli.log_file);
}

#[test]
fn defaults_resolve_to_builtin_seed() {
	let cli = CliArgs::parse_from(["dualist", "--no-config"]);
	let resolved = RawConfig::default().resolve(&cli).expect("resolves");

	assert_eq!(resolved.theme, "slate");
	assert_eq!(resolved.labels.left.title, "Available");
	assert_eq!(resolved.labels.right.title, "Assigned");
	assert_eq!(resolved.seed, SeedData::builtin());
	assert_eq!(resolved.seed_origin, SeedOrigin::Builtin);
	assert_eq!(resolved.log_file, None);
}

#[test]
fn lists_table_replaces_builtin_seed() {
	let cli = CliArgs::parse_from(["dualist"]);
	let raw = raw_from_toml(
		"[lists]\nleft = [{ id = 1, name = \"One\" }, { id = 2, name = \"Two\" }]\n",
	);
	let resolved = raw.resolve(&cli).expect("resolves");

	assert_eq!(
		resolved.seed.left,
		vec![Item::new(1, "One"), Item::new(2, "Two")]
	);
	assert!(resolved.seed.right.is_empty());
	assert_eq!(resolved.seed_origin, SeedOrigin::Config);
}

#[test]
fn seed_file_wins_over_lists_table() {
	let dir = tempdir().expect("tempdir");
	let path = dir.path().join("seed.json");
	fs::write(&path, r#"{"left": [], "right": [{"id": 5, "name": "Five"}]}"#).expect("write");

	let cli = CliArgs::parse_from(["dualist", "--seed", path.to_str().expect("utf-8 path")]);
	let raw = raw_from_toml("[lists]\nleft = [{ id = 1, name = \"One\" }]\n");
	let resolved = raw.resolve(&cli).expect("resolves");

	assert!(resolved.seed.left.is_empty());
	assert_eq!(resolved.seed.right, vec![Item::new(5, "Five")]);
	assert_eq!(resolved.seed_origin, SeedOrigin::File(path));
}

#[test]
fn duplicate_ids_in_lists_table_are_rejected() {
	let cli = CliArgs::parse_from(["dualist"]);
	let raw = raw_from_toml(
		"[lists]\nleft = [{ id = 3, name = \"a\" }]\nright = [{ id = 3, name = \"b\" }]\n",
	);
	let err = raw.resolve(&cli).expect_err("duplicate ids");
	assert!(err.to_string().contains("lists"));
}

#[test]
fn blank_cli_title_names_the_flag() {
	let cli = CliArgs::parse_from(["dualist", "--left-title", "   "]);
	let mut raw = RawConfig::default();
	raw.apply_cli_overrides(&cli);

	let err = raw.resolve(&cli).expect_err("blank title");
	let message = err.to_string();
	assert!(message.contains("ui.left_title"));
	assert!(message.contains("--left-title"));
}

#[test]
fn unknown_theme_from_config_names_the_key() {
	let cli = CliArgs::parse_from(["dualist"]);
	let raw = raw_from_toml("[ui]\ntheme = \"neon\"\n");
	let err = raw.resolve(&cli).expect_err("unknown theme");
	let message = err.to_string();
	assert!(message.contains("configuration key `ui.theme`"));
}
