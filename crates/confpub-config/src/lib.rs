//! Configuration loading for confpub.
//!
//! Reads `conf.json` (or an explicit path) into a [`Config`] value that is
//! constructed once per run and passed to every operation that needs it.
//!
//! The file is a flat JSON object:
//!
//! ```json
//! {
//!   "ConfluenceUser": "admin",
//!   "ConfluencePassword": "hunter2",
//!   "ConfluenceSpaceKey": "DOC",
//!   "ConfluenceParentPageId": "98765",
//!   "ConfluenceHost": "https://confluence.example.com/"
//! }
//! ```
//!
//! Missing fields decode to empty strings and unknown fields are ignored.
//! Values are taken as written, with no variable substitution. Field
//! contents are not validated: bad credentials surface as authentication
//! failures from the server.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename looked up in the current directory.
pub const CONFIG_FILENAME: &str = "conf.json";

/// Publishing configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Basic-auth user name.
    #[serde(rename = "ConfluenceUser")]
    pub user: String,
    /// Basic-auth password.
    #[serde(rename = "ConfluencePassword")]
    pub password: String,
    /// Key of the space pages are published into.
    #[serde(rename = "ConfluenceSpaceKey")]
    pub space_key: String,
    /// ID of the page every published page is placed under.
    #[serde(rename = "ConfluenceParentPageId")]
    pub parent_page_id: String,
    /// Server URL, e.g. `https://confluence.example.com/`.
    ///
    /// The trailing slash is optional: the client trims it before joining
    /// `/rest/api/...` paths.
    #[serde(rename = "ConfluenceHost")]
    pub host: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON decoding error.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Config {
    /// Load configuration from `config_path`, or `conf.json` in the current
    /// directory when no path is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file does not exist, and
    /// [`ConfigError::Parse`] if it is not a JSON object of the expected shape.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = config_path.unwrap_or(Path::new(CONFIG_FILENAME));
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Self::load_from_file(path)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Decode configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }
}
