//! Confluence page types.
//!
//! The same [`Page`] shape is decoded from search results and encoded as the
//! create/update payload. Serde ignores unknown fields from the API response.

use serde::{Deserialize, Serialize};

/// Confluence page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Page {
    /// Page ID (empty for a page that does not exist yet).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Content type (always "page").
    #[serde(rename = "type")]
    pub content_type: String,
    /// Page title.
    pub title: String,
    /// Space the page lives in.
    pub space: Space,
    /// Parent pages.
    pub ancestors: Vec<Ancestor>,
    /// Page body content.
    pub body: Body,
    /// Version information (omitted when creating a page).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
}

impl Page {
    /// Version number, or 0 when the server did not report one.
    pub fn version_number(&self) -> u32 {
        self.version.as_ref().map_or(0, |v| v.number)
    }
}

/// Space reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Space {
    /// Space key.
    pub key: String,
}

/// Ancestor (parent page) reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Ancestor {
    /// Ancestor page ID.
    pub id: String,
}

/// Page body content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Body {
    /// Storage format content.
    pub storage: Storage,
}

/// Storage format representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Storage {
    /// HTML content in Confluence storage format.
    pub value: String,
    /// Content representation (always "storage").
    pub representation: String,
}

/// Page version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Version {
    /// Version number.
    pub number: u32,
}

/// Content search response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageResults {
    /// Matching pages.
    pub results: Vec<Page>,
    /// Number of results in this response.
    pub size: u32,
    /// Offset of the first result.
    pub start: u32,
}
