//! Error types for publish operations.

use crate::error::{ConfluenceError, RenderError};

/// Error that stops a publish run.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// Confluence API error.
    #[error("Confluence API error: {0}")]
    Confluence(#[from] ConfluenceError),

    /// Page body could not be rendered.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Existing page is already at the highest representable version.
    #[error("page {page_id} is at version {version} and cannot be updated")]
    VersionOverflow {
        /// Existing page ID.
        page_id: String,
        /// Version reported by Confluence.
        version: u32,
    },

    /// Payload could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
