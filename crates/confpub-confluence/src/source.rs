//! Page content records to publish.

use serde::Serialize;

/// Input data for one published page.
///
/// Serialized as the template context: `Title` and `ListOfData`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageContent {
    /// Page title, also used to look up an existing page.
    #[serde(rename = "Title")]
    pub title: String,
    /// Auxiliary strings available to the template.
    #[serde(rename = "ListOfData")]
    pub list_of_data: Vec<String>,
}

impl PageContent {
    /// Create content with a title and no auxiliary data.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            list_of_data: Vec::new(),
        }
    }
}

/// Source of page content records.
///
/// Each record is published independently, in the order returned.
pub trait DataSource {
    /// Produce zero or more records to publish.
    fn fetch(&self) -> Vec<PageContent>;
}

/// Placeholder source yielding a single fixed record.
#[derive(Debug, Default)]
pub struct StubSource;

impl DataSource for StubSource {
    fn fetch(&self) -> Vec<PageContent> {
        vec![PageContent::new("fake title")]
    }
}
