//! Page publisher for Confluence.
//!
//! This module provides the [`Publisher`] struct that encapsulates the
//! workflow for publishing one page:
//!
//! 1. Look up an existing page by title in the configured space
//! 2. Render the page body from the template
//! 3. Create the page (`POST`) or update it with the next version (`PUT`)
//! 4. Log the result
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use confpub_config::Config;
//! use confpub_confluence::{ConfluenceClient, DataSource, PageRenderer, Publisher, StubSource};
//!
//! let config = Config::load(None)?;
//! let client = ConfluenceClient::from_config(&config);
//! let publisher = Publisher::new(&client, &config, PageRenderer::default());
//!
//! for content in StubSource.fetch() {
//!     publisher.publish(&content)?;
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod executor;
mod plan;
mod result;

pub use error::PublishError;
pub use executor::Publisher;
pub use plan::{PublishAction, PublishPlan};
pub use result::PublishOutcome;
