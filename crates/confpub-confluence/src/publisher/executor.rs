//! Publisher implementation.

use confpub_config::Config;
use tracing::{error, info};

use crate::client::ConfluenceClient;
use crate::renderer::{PageRenderer, local_now};
use crate::source::PageContent;
use crate::types::Page;

use super::error::PublishError;
use super::plan::{PublishAction, PublishPlan};
use super::result::PublishOutcome;

/// Publishes page content records to Confluence.
pub struct Publisher<'a> {
    client: &'a ConfluenceClient,
    config: &'a Config,
    renderer: PageRenderer,
    dry_run: bool,
}

impl<'a> Publisher<'a> {
    /// Create a new publisher.
    #[must_use]
    pub fn new(client: &'a ConfluenceClient, config: &'a Config, renderer: PageRenderer) -> Self {
        Self {
            client,
            config,
            renderer,
            dry_run: false,
        }
    }

    /// Log the planned request instead of sending it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Publish one page.
    ///
    /// This method:
    /// 1. Looks up an existing page with the same title in the space
    /// 2. Renders the page body from the template
    /// 3. Creates the page, or updates it with the next version number
    ///
    /// A non-200 answer is logged together with the request body and
    /// returned as [`PublishOutcome::Rejected`]; it does not stop the run.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the lookup response cannot be decoded
    /// - the template cannot be loaded or expanded
    /// - the existing page version cannot be incremented
    /// - the payload cannot be encoded or the request cannot be sent
    pub fn publish(&self, content: &PageContent) -> Result<PublishOutcome, PublishError> {
        let existing = self
            .client
            .find_page_by_title(&self.config.space_key, &content.title)?;

        let body = self.renderer.render(content, &local_now())?;
        let plan = PublishPlan::new(self.config, &content.title, body, existing.as_ref())?;
        let payload = serde_json::to_string(&plan.page)?;

        if self.dry_run {
            let page_id = match &plan.action {
                PublishAction::Create => None,
                PublishAction::Update { page_id } => Some(page_id.as_str()),
            };
            info!(
                "[dry run] {} {}",
                plan.action.method(),
                self.client.content_url(page_id)
            );
            info!("[dry run] Request: {}", payload);
            return Ok(PublishOutcome::DryRun);
        }

        let response = match &plan.action {
            PublishAction::Create => {
                info!("Creating page '{}'", content.title);
                self.client.create_page(&payload)?
            }
            PublishAction::Update { page_id } => {
                info!(
                    "Updating page '{}' (id={}) from version {} to {}",
                    content.title,
                    page_id,
                    existing.as_ref().map_or(0, Page::version_number),
                    plan.page.version_number()
                );
                self.client.update_page(page_id, &payload)?
            }
        };

        if !response.is_ok() {
            error!("Error creating confluence page: {}", content.title);
            error!("Response: {}", response.body);
            error!("Request: {}", payload);
            return Ok(PublishOutcome::Rejected {
                status: response.status,
                body: response.body,
            });
        }

        match plan.action {
            PublishAction::Create => {
                info!("Created confluence page: {}", content.title);
                Ok(PublishOutcome::Created)
            }
            PublishAction::Update { .. } => {
                info!("Updated confluence page: {}", content.title);
                Ok(PublishOutcome::Updated {
                    version: plan.page.version_number(),
                })
            }
        }
    }

    /// Publish every record in order, one at a time.
    ///
    /// Rejected pages do not stop the remaining records.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error; records after it are not published.
    pub fn publish_all(
        &self,
        contents: &[PageContent],
    ) -> Result<Vec<PublishOutcome>, PublishError> {
        contents.iter().map(|content| self.publish(content)).collect()
    }
}
