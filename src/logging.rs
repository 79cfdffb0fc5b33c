//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI while a session runs, so log lines are
//! appended to a file instead of being written to stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Environment variable holding the `tracing` filter directives.
pub const LOG_ENV: &str = "DUALIST_LOG";
const DEFAULT_FILTER: &str = "info";
const LOG_FILE_NAME: &str = "dualist.log";

/// Default location of the log file inside the data directory.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Filter from `DUALIST_LOG`, or `info` when unset or unparsable.
pub fn env_filter() -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global subscriber that appends to `path`.
pub fn initialize(path: &Path) -> Result<()> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}

	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	tracing_subscriber::fmt()
		.with_env_filter(env_filter())
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(true)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

/// Set up logging, printing a warning and carrying on without it on failure.
///
/// Uses `path` when given, the default log file otherwise. Returns the file
/// that receives log output, if any.
pub fn initialize_or_warn(path: Option<&Path>) -> Option<PathBuf> {
	let path = match path {
		Some(path) => path.to_path_buf(),
		None => match default_log_file() {
			Ok(path) => path,
			Err(err) => {
				eprintln!("warning: logging disabled: {err:#}");
				return None;
			}
		},
	};

	match initialize(&path) {
		Ok(()) => Some(path),
		Err(err) => {
			eprintln!("warning: logging disabled: {err:#}");
			None
		}
	}
}
