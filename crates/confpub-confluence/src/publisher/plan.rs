//! Create-or-update decision and payload construction.

use confpub_config::Config;

use crate::renderer::STORAGE_REPRESENTATION;
use crate::types::{Ancestor, Body, Page, Space, Storage, Version};

use super::error::PublishError;

/// Content type of every published page.
const PAGE_TYPE: &str = "page";

/// Whether the payload creates a new page or replaces an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishAction {
    /// `POST` to the content collection.
    Create,
    /// `PUT` to the existing page.
    Update {
        /// Existing page ID.
        page_id: String,
    },
}

impl PublishAction {
    /// HTTP method for this action.
    pub fn method(&self) -> &'static str {
        match self {
            Self::Create => "POST",
            Self::Update { .. } => "PUT",
        }
    }
}

/// Request to send for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishPlan {
    /// Create or update.
    pub action: PublishAction,
    /// Payload page.
    pub page: Page,
}

impl PublishPlan {
    /// Build the plan for `title` with rendered `body`.
    ///
    /// A page found by lookup turns the plan into an update carrying its ID
    /// and the next version number; otherwise a create without ID or version.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::VersionOverflow`] if the existing version has
    /// no successor.
    pub fn new(
        config: &Config,
        title: &str,
        body: String,
        existing: Option<&Page>,
    ) -> Result<Self, PublishError> {
        let (action, id, version) = match existing {
            Some(old) => {
                let number = old.version_number().checked_add(1).ok_or_else(|| {
                    PublishError::VersionOverflow {
                        page_id: old.id.clone(),
                        version: old.version_number(),
                    }
                })?;
                (
                    PublishAction::Update {
                        page_id: old.id.clone(),
                    },
                    old.id.clone(),
                    Some(Version { number }),
                )
            }
            None => (PublishAction::Create, String::new(), None),
        };

        let page = Page {
            id,
            content_type: PAGE_TYPE.to_owned(),
            title: title.to_owned(),
            space: Space {
                key: config.space_key.clone(),
            },
            ancestors: vec![Ancestor {
                id: config.parent_page_id.clone(),
            }],
            body: Body {
                storage: Storage {
                    value: body,
                    representation: STORAGE_REPRESENTATION.to_owned(),
                },
            },
            version,
        };

        Ok(Self { action, page })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn config() -> Config {
        Config {
            space_key: "DOC".to_owned(),
            parent_page_id: "98765".to_owned(),
            host: "https://wiki.example.com/".to_owned(),
            ..Config::default()
        }
    }

    #[test]
    fn test_plan_without_existing_page_creates() {
        let plan = PublishPlan::new(&config(), "fake title", "<p>x</p>".to_owned(), None).unwrap();

        assert_eq!(plan.action, PublishAction::Create);
        assert_eq!(plan.action.method(), "POST");
        assert_eq!(
            serde_json::to_value(&plan.page).unwrap(),
            json!({
                "type": "page",
                "title": "fake title",
                "space": {"key": "DOC"},
                "ancestors": [{"id": "98765"}],
                "body": {"storage": {"value": "<p>x</p>", "representation": "storage"}}
            })
        );
    }

    #[test]
    fn test_plan_with_existing_page_updates() {
        let existing = Page {
            id: "123".to_owned(),
            version: Some(Version { number: 4 }),
            ..Page::default()
        };

        let plan =
            PublishPlan::new(&config(), "fake title", "<p>x</p>".to_owned(), Some(&existing))
                .unwrap();

        assert_eq!(
            plan.action,
            PublishAction::Update {
                page_id: "123".to_owned()
            }
        );
        assert_eq!(plan.action.method(), "PUT");
        let value = serde_json::to_value(&plan.page).unwrap();
        assert_eq!(value["id"], "123");
        assert_eq!(value["version"], json!({"number": 5}));
        assert_eq!(value["ancestors"], json!([{"id": "98765"}]));
        assert_eq!(value["space"]["key"], "DOC");
    }

    #[test]
    fn test_plan_existing_page_without_version_starts_at_one() {
        let existing = Page {
            id: "9".to_owned(),
            ..Page::default()
        };

        let plan = PublishPlan::new(&config(), "t", String::new(), Some(&existing)).unwrap();
        assert_eq!(plan.page.version, Some(Version { number: 1 }));
    }

    #[test]
    fn test_plan_rejects_version_without_successor() {
        let existing = Page {
            id: "77".to_owned(),
            version: Some(Version { number: u32::MAX }),
            ..Page::default()
        };

        let err = PublishPlan::new(&config(), "t", String::new(), Some(&existing)).unwrap_err();
        assert!(
            matches!(
                err,
                PublishError::VersionOverflow { ref page_id, version: u32::MAX } if page_id == "77"
            ),
            "Expected PublishError::VersionOverflow, got {err:?}"
        );
    }
}
