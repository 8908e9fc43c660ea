//! Error types for Confluence integration.

use std::path::PathBuf;

/// Error from Confluence API operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfluenceError {
    /// HTTP request failed (network error, unreadable body, etc).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error while producing a page body.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Template file could not be read.
    #[error("failed to read template {}", path.display())]
    Load {
        /// Template path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Template could not be parsed or expanded.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}
