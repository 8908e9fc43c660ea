//! Confluence publishing for confpub.
//!
//! This crate provides:
//! - [`ConfluenceClient`]: REST API client with basic authentication
//! - [`PageRenderer`]: storage-format body rendering from a template file
//! - [`Publisher`]: create-or-update workflow for one page at a time
//! - [`DataSource`]: source of page content records

// API client
mod client;
pub use client::{ApiResponse, ConfluenceClient};

// Page body rendering
mod renderer;
pub use renderer::{DEFAULT_TEMPLATE_PATH, PageRenderer, STORAGE_REPRESENTATION, local_now};

// Content records
mod source;
pub use source::{DataSource, PageContent, StubSource};

// API types
pub mod types;

// Publisher
pub mod publisher;
pub use publisher::{PublishError, PublishOutcome, Publisher};

// Errors
pub mod error;
pub use error::{ConfluenceError, RenderError};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
