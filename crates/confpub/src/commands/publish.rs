//! Publish command implementation.

use std::path::PathBuf;

use clap::Args;
use confpub_config::{CONFIG_FILENAME, Config};
use confpub_confluence::{
    ConfluenceClient, DEFAULT_TEMPLATE_PATH, DataSource, PageRenderer, Publisher, StubSource,
};
use tracing::debug;

use crate::error::CliError;

/// Arguments for publishing pages.
#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Path to configuration file.
    #[arg(short, long, default_value = CONFIG_FILENAME)]
    config: PathBuf,

    /// Path to the page body template.
    #[arg(short, long, default_value = DEFAULT_TEMPLATE_PATH)]
    template: PathBuf,

    /// Log the requests that would be sent without sending them.
    #[arg(long)]
    dry_run: bool,
}

impl PublishArgs {
    /// Publish every record from the data source, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or a page hits
    /// a fatal error. Pages rejected by the server are only logged.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        self.run(&StubSource)
    }

    /// Publish every record from `source` with these arguments.
    fn run(self, source: &dyn DataSource) -> Result<(), CliError> {
        let config = Config::load(Some(&self.config))?;
        debug!("Loaded configuration from {}", self.config.display());

        let client = ConfluenceClient::from_config(&config);
        let publisher = Publisher::new(&client, &config, PageRenderer::new(self.template))
            .dry_run(self.dry_run);

        let records = source.fetch();
        debug!("Publishing {} page(s)", records.len());

        let outcomes = publisher.publish_all(&records)?;
        debug!("Finished {} page(s)", outcomes.len());

        Ok(())
    }
}
