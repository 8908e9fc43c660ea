//! Result types for publish operations.

/// What happened to one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// New page accepted by the server.
    Created,
    /// Existing page replaced; `version` is the number that was sent.
    Updated {
        /// New version number.
        version: u32,
    },
    /// Server answered with a status other than 200.
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },
    /// Plan built and logged but not sent.
    DryRun,
}
