//! CLI error types.

use confpub_config::ConfigError;
use confpub_confluence::PublishError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Publish(#[from] PublishError),
}
