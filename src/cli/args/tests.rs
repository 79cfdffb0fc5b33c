use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	let command = CliArgs::command();
	assert!(command.get_about().is_some());
	command.debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["dualist"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.seed.is_none());
	assert!(!parsed.no_config);
}

#[test]
fn config_flag_can_repeat() {
	let parsed = CliArgs::try_parse_from([
		"dualist",
		"--config",
		"a.toml",
		"-c",
		"b.toml",
		"--output",
		"json",
	])
	.expect("parses");
	assert_eq!(
		parsed.config,
		vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
	);
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn unknown_output_format_is_rejected() {
	assert!(CliArgs::try_parse_from(["dualist", "--output", "yaml"]).is_err());
}
