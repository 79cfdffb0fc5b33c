use anyhow::{Context, Result};
use dualist::{App, TransferOutcome};
use tracing::info;

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive transfer session.
pub(crate) struct TransferWorkflow {
	app: App,
}

impl TransferWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let theme = config.resolved_theme();
		let ResolvedConfig { labels, seed, .. } = config;

		let list = seed
			.into_list()
			.context("initial lists are inconsistent")?;
		info!(
			left = list.left_items().len(),
			right = list.right_items().len(),
			"seeded transfer lists"
		);

		let app = App::new(list).with_labels(labels).with_theme(theme);
		Ok(Self { app })
	}

	pub(crate) fn run(self) -> Result<TransferOutcome> {
		dualist::run(self.app)
	}
}
