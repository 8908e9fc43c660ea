//! Page operations for Confluence API.

use tracing::{debug, error, info};

use super::{ConfluenceClient, query_escape};
use crate::error::ConfluenceError;
use crate::types::{Page, PageResults};

/// Status and body of a create/update response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl ApiResponse {
    /// Whether the server accepted the page (exactly 200).
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

impl ConfluenceClient {
    /// Find a page by title within a space.
    ///
    /// Returns the page only if the search yields exactly one result. Zero
    /// and multiple matches are both reported as `None`. A request that
    /// cannot be sent is logged and also reported as `None`, while a response
    /// body that cannot be decoded is an error.
    pub(crate) fn find_page_by_title(
        &self,
        space_key: &str,
        title: &str,
    ) -> Result<Option<Page>, ConfluenceError> {
        let url = format!(
            "{}/content?spaceKey={}&title={}&expand=version",
            self.api_url(),
            query_escape(space_key),
            query_escape(title)
        );

        debug!("GET {}", url);

        let response = match self
            .agent
            .get(&url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .call()
        {
            Ok(response) => response,
            Err(e) => {
                error!("Error fetching confluence page {}: {}", title, e);
                return Ok(None);
            }
        };

        let body = response.into_body().read_to_string()?;
        let results: PageResults = serde_json::from_str(&body)?;

        if results.results.len() != 1 {
            debug!(
                "Search for '{}' returned {} results",
                title,
                results.results.len()
            );
            info!("Page: {} does not exist in space: {}", title, space_key);
            return Ok(None);
        }

        Ok(results.results.into_iter().next())
    }

    /// Create a page from a JSON payload.
    pub(crate) fn create_page(&self, payload: &str) -> Result<ApiResponse, ConfluenceError> {
        let url = self.content_url(None);
        debug!("POST {}", url);

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &self.auth_header)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(payload.as_bytes())?;

        Ok(Self::read_response(response))
    }

    /// Replace an existing page with a JSON payload.
    ///
    /// The payload must carry the next version number or the server rejects it.
    pub(crate) fn update_page(
        &self,
        page_id: &str,
        payload: &str,
    ) -> Result<ApiResponse, ConfluenceError> {
        let url = self.content_url(Some(page_id));
        debug!("PUT {}", url);

        let response = self
            .agent
            .put(&url)
            .header("Authorization", &self.auth_header)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(payload.as_bytes())?;

        Ok(Self::read_response(response))
    }

    fn read_response(response: ureq::http::Response<ureq::Body>) -> ApiResponse {
        let status = response.status().as_u16();
        let body = response
            .into_body()
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read response body)".to_owned());
        ApiResponse { status, body }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{FakeConfluence, search_response};

    #[test]
    fn test_find_page_single_result() {
        let server = FakeConfluence::start(vec![(200, search_response(&[("123", 4)]))]);
        let client = ConfluenceClient::new(server.base_url(), "admin", "s3cret");

        let page = client.find_page_by_title("DOC", "fake title").unwrap();

        let page = page.expect("exactly one result is a match");
        assert_eq!(page.id, "123");
        assert_eq!(page.version_number(), 4);

        let requests = server.finish();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(
            requests[0].url,
            "/rest/api/content?spaceKey=DOC&title=fake+title&expand=version"
        );
        assert_eq!(
            requests[0].authorization.as_deref(),
            Some("Basic YWRtaW46czNjcmV0")
        );
    }

    #[test]
    fn test_find_page_no_results() {
        let server = FakeConfluence::start(vec![(200, search_response(&[]))]);
        let client = ConfluenceClient::new(server.base_url(), "u", "p");

        assert_eq!(client.find_page_by_title("DOC", "missing").unwrap(), None);
        server.finish();
    }

    #[test]
    fn test_find_page_multiple_results_is_not_found() {
        let server =
            FakeConfluence::start(vec![(200, search_response(&[("1", 1), ("2", 7)]))]);
        let client = ConfluenceClient::new(server.base_url(), "u", "p");

        assert_eq!(client.find_page_by_title("DOC", "dup").unwrap(), None);
        server.finish();
    }

    #[test]
    fn test_find_page_send_failure_is_not_found() {
        // Nothing listens on port 1.
        let client = ConfluenceClient::new("http://127.0.0.1:1/", "u", "p");

        assert_eq!(client.find_page_by_title("DOC", "fake title").unwrap(), None);
    }

    #[test]
    fn test_find_page_undecodable_body_is_error() {
        let server =
            FakeConfluence::start(vec![(401, "<html>Unauthorized</html>".to_owned())]);
        let client = ConfluenceClient::new(server.base_url(), "u", "wrong");

        let err = client.find_page_by_title("DOC", "fake title").unwrap_err();
        assert!(
            matches!(err, ConfluenceError::Json(_)),
            "Expected ConfluenceError::Json, got {err:?}"
        );
        server.finish();
    }

    #[test]
    fn test_create_page_posts_to_collection() {
        let server = FakeConfluence::start(vec![(200, r#"{"id":"555"}"#.to_owned())]);
        let client = ConfluenceClient::new(server.base_url(), "u", "p");

        let response = client.create_page(r#"{"title":"x"}"#).unwrap();
        assert!(response.is_ok());
        assert_eq!(response.body, r#"{"id":"555"}"#);

        let requests = server.finish();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].url, "/rest/api/content/");
        assert_eq!(
            requests[0].content_type.as_deref(),
            Some("application/json")
        );
        assert_eq!(requests[0].body, r#"{"title":"x"}"#);
    }

    #[test]
    fn test_update_page_returns_error_status() {
        let server = FakeConfluence::start(vec![(409, "version conflict".to_owned())]);
        let client = ConfluenceClient::new(server.base_url(), "u", "p");

        let response = client.update_page("123", "{}").unwrap();
        assert_eq!(
            response,
            ApiResponse {
                status: 409,
                body: "version conflict".to_owned()
            }
        );
        assert!(!response.is_ok());

        let requests = server.finish();
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].url, "/rest/api/content/123");
    }
}
