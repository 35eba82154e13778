use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex, MutexGuard},
};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
    Router,
};
use serde::Serialize;
use tokio::net::TcpListener;

pub use axum::http::StatusCode;

/// A canned response served by the mock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockResponse {
    pub status: StatusCode,
    pub content_type: String,
    pub body: String,
}

impl MockResponse {
    /// 200 response with `value` serialized as the JSON body.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::raw_json(serde_json::to_string(value)?))
    }

    /// 200 response with an already-encoded JSON body.
    pub fn raw_json(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "application/json".to_string(),
            body: body.into(),
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

/// A request as received by the mock. `path` includes the raw query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Default)]
struct Inner {
    queue: VecDeque<MockResponse>,
    defaults: HashMap<String, MockResponse>,
    requests: VecDeque<RecordedRequest>,
}

/// Shared mock state. Clones observe the same queue and request log, so a
/// test keeps one handle while the router owns another.
#[derive(Clone, Default)]
pub struct MockServer {
    inner: Arc<Mutex<Inner>>,
}

impl MockServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next request, whatever its path.
    pub fn enqueue(&self, response: MockResponse) {
        self.lock().queue.push_back(response);
    }

    /// Response for `path` (without query) used once the queue is empty.
    pub fn set_default(&self, path: impl Into<String>, response: MockResponse) {
        self.lock().defaults.insert(path.into(), response);
    }

    /// Oldest recorded request not yet taken.
    pub fn take_request(&self) -> Option<RecordedRequest> {
        self.lock().requests.pop_front()
    }

    /// Number of recorded requests not yet taken.
    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn respond(&self, request: RecordedRequest, path: &str) -> Option<MockResponse> {
        let mut inner = self.lock();
        inner.requests.push_back(request);
        match inner.queue.pop_front() {
            Some(response) => Some(response),
            None => inner.defaults.get(path).cloned(),
        }
    }
}

pub fn app(server: MockServer) -> Router {
    Router::new().fallback(record).with_state(server)
}

pub async fn run(listener: TcpListener, server: MockServer) -> Result<(), std::io::Error> {
    axum::serve(listener, app(server)).await
}

async fn record(
    State(server): State<MockServer>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    let request = RecordedRequest {
        method: method.as_str().to_string(),
        path,
        headers: headers
            .iter()
            .map(|(name, value)| {
                (name.as_str().to_string(), String::from_utf8_lossy(value.as_bytes()).into_owned())
            })
            .collect(),
        body: String::from_utf8_lossy(&body).into_owned(),
    };

    match server.respond(request, uri.path()) {
        Some(response) => {
            (response.status, [(header::CONTENT_TYPE, response.content_type)], response.body).into_response()
        }
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("no mock response for {method} {}", uri.path()),
        )
            .into_response(),
    }
}
