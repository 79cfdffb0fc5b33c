use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `dualist` binary.
#[derive(Parser, Debug)]
#[command(
	name = "dualist",
	version,
	long_version = long_version(),
	about = "Move items between two lists with the mouse or the keyboard",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "DUALIST_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 's',
		long,
		value_name = "FILE",
		help = "Load the initial lists from a JSON file (default: [lists] table or built-in items)"
	)]
	pub(crate) seed: Option<PathBuf>,
	#[arg(
		long = "left-title",
		value_name = "TITLE",
		help = "Title of the left panel (default: Available)"
	)]
	pub(crate) left_title: Option<String>,
	#[arg(
		long = "right-title",
		value_name = "TITLE",
		help = "Title of the right panel (default: Assigned)"
	)]
	pub(crate) right_title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Append log output to FILE (default: dualist.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
