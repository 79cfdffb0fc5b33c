mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use dualist::logging;
use settings::ResolvedConfig;
use tracing::info;
use workflow::TransferWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in dualist_tui::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if let Some(path) = logging::initialize_or_warn(resolved.log_file.as_deref()) {
		info!(log_file = %path.display(), theme = %resolved.theme, "starting dualist");
	}

	run_transfer(cli.output, resolved)
}

/// Execute the transfer workflow and print output in the chosen format.
fn run_transfer(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = TransferWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;
	info!(accepted = outcome.accepted, "transfer session ended");

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
