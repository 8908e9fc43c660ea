//! Confluence REST API client.
//!
//! Provides a sync HTTP client for the Confluence content REST API with
//! basic authentication.

mod pages;

pub use pages::ApiResponse;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use confpub_config::Config;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use ureq::Agent;

/// Characters left as-is in query values: A-Z a-z 0-9 - . _ ~ and space
/// (which becomes `+`).
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b' ');

/// Escape a string for use as a query parameter value.
fn query_escape(input: &str) -> String {
    utf8_percent_encode(input, QUERY_ENCODE_SET)
        .to_string()
        .replace(' ', "+")
}

/// Confluence REST API client.
pub struct ConfluenceClient {
    agent: Agent,
    base_url: String,
    auth_header: String,
}

impl ConfluenceClient {
    /// Create client with basic-auth credentials.
    ///
    /// # Arguments
    /// * `base_url` - Confluence server base URL
    /// * `user` - Basic-auth user name
    /// * `password` - Basic-auth password
    pub fn new(base_url: &str, user: &str, password: &str) -> Self {
        // Non-2xx responses are returned as responses so callers can log the body.
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        let credentials = BASE64_STANDARD.encode(format!("{user}:{password}"));

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            auth_header: format!("Basic {credentials}"),
        }
    }

    /// Create client from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.host, &config.user, &config.password)
    }

    /// Get the API base URL.
    fn api_url(&self) -> String {
        format!("{}/rest/api", self.base_url)
    }

    /// URL a page payload is sent to: the content collection for new pages,
    /// the page resource for existing ones.
    pub fn content_url(&self, page_id: Option<&str>) -> String {
        match page_id {
            Some(id) => format!("{}/content/{}", self.api_url(), id),
            None => format!("{}/content/", self.api_url()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_escape() {
        assert_eq!(query_escape("fake title"), "fake+title");
        assert_eq!(query_escape("a&b=c"), "a%26b%3Dc");
        assert_eq!(query_escape("1+1"), "1%2B1");
        assert_eq!(query_escape("Ünïcode"), "%C3%9Cn%C3%AFcode");
        assert_eq!(query_escape("keep-._~"), "keep-._~");
    }

    #[test]
    fn test_content_url_with_trailing_slash_host() {
        let client = ConfluenceClient::new("https://wiki.example.com/", "u", "p");
        assert_eq!(
            client.content_url(None),
            "https://wiki.example.com/rest/api/content/"
        );
        assert_eq!(
            client.content_url(Some("123")),
            "https://wiki.example.com/rest/api/content/123"
        );
    }

    #[test]
    fn test_content_url_without_trailing_slash_host() {
        let client = ConfluenceClient::new("https://wiki.example.com/confluence", "u", "p");
        assert_eq!(
            client.content_url(None),
            "https://wiki.example.com/confluence/rest/api/content/"
        );
    }

    #[test]
    fn test_basic_auth_header() {
        let client = ConfluenceClient::new("https://wiki.example.com/", "admin", "s3cret");
        assert_eq!(client.auth_header, "Basic YWRtaW46czNjcmV0");
    }
}
