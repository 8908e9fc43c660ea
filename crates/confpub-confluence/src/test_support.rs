//! In-process fake Confluence server for tests.
//!
//! Available to other crates through the `test-support` feature.

use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use tiny_http::{Response, Server};

/// How long the fake server waits for the next expected request.
const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// Request as seen by the fake server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path and query string.
    pub url: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

/// Serves canned `(status, body)` responses in order and records requests.
pub struct FakeConfluence {
    base_url: String,
    handle: JoinHandle<()>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeConfluence {
    pub fn start(responses: Vec<(u16, String)>) -> Self {
        let server = Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        let handle = std::thread::spawn(move || {
            for (status, body) in responses {
                let Ok(Some(mut request)) = server.recv_timeout(RECV_TIMEOUT) else {
                    return;
                };
                let header = |name: &str| {
                    request
                        .headers()
                        .iter()
                        .find(|h| h.field.to_string().eq_ignore_ascii_case(name))
                        .map(|h| h.value.to_string())
                };
                let authorization = header("Authorization");
                let content_type = header("Content-Type");
                let mut request_body = String::new();
                request
                    .as_reader()
                    .read_to_string(&mut request_body)
                    .unwrap();
                recorded.lock().unwrap().push(RecordedRequest {
                    method: request.method().to_string(),
                    url: request.url().to_owned(),
                    authorization,
                    content_type,
                    body: request_body,
                });
                request
                    .respond(Response::from_string(body).with_status_code(status))
                    .unwrap();
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}/"),
            handle,
            requests,
        }
    }

    /// Host URL in the form stored in `conf.json` (with trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Wait for all canned responses to be served and return the requests.
    pub fn finish(self) -> Vec<RecordedRequest> {
        self.handle.join().unwrap();
        Arc::try_unwrap(self.requests)
            .unwrap()
            .into_inner()
            .unwrap()
    }
}

/// Search response body containing the given `(id, version)` pages.
pub fn search_response(pages: &[(&str, u32)]) -> String {
    let results: Vec<_> = pages
        .iter()
        .map(|(id, version)| {
            serde_json::json!({
                "id": id,
                "type": "page",
                "title": "fake title",
                "version": {"number": version}
            })
        })
        .collect();
    serde_json::json!({
        "results": results,
        "start": 0,
        "limit": 25,
        "size": pages.len()
    })
    .to_string()
}
