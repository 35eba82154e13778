//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller either executes the request itself and
//! hands the response back to a `parse_*` method, or passes a `Transport`
//! implementation to one of the top-level operations.
//!
//! All fields use owned types (`String`, `Vec`) so requests can be recorded
//! and compared in tests without lifetime concerns.

/// Error type a `Transport` reports when no response could be obtained.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// HTTP method for a request. Both analysis operations are POSTs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `url` is absolute and already carries the encoded query string. Header
/// names are lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header value whose name matches `name`, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Path plus query string as a server would see it, e.g.
    /// `/v3/tone?version=2017-09-21`.
    pub fn path_and_query(&self) -> Option<String> {
        let url = url::Url::parse(&self.url).ok()?;
        Some(match url.query() {
            Some(query) => format!("{}?{query}", url.path()),
            None => url.path().to_string(),
        })
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes an `HttpRequest` and returns the server's response.
///
/// Non-2xx statuses are a successful exchange and must be returned as
/// `Ok(HttpResponse)`; `Err` is reserved for failures where no response
/// exists (connection refused, timeout, TLS failure). Retries, if any,
/// belong to the implementation.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<F> Transport for F
where
    F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError>,
{
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self(request)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: url.to_string(),
            headers: vec![("content-type".to_string(), "text/plain".to_string())],
            body: None,
        }
    }

    #[test]
    fn method_renders_as_post() {
        assert_eq!(HttpMethod::Post.as_str(), "POST");
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = request("http://localhost/v3/tone");
        assert_eq!(req.header("Content-Type"), Some("text/plain"));
        assert_eq!(req.header("accept"), None);
    }

    #[test]
    fn path_and_query_strips_scheme_and_host() {
        let req = request("http://localhost:8080/api/v3/tone?version=2017-09-21&tones=emotion%2Csocial");
        assert_eq!(
            req.path_and_query().as_deref(),
            Some("/api/v3/tone?version=2017-09-21&tones=emotion%2Csocial")
        );
        assert_eq!(request("http://localhost/v3/tone").path_and_query().as_deref(), Some("/v3/tone"));
    }

    #[test]
    fn success_covers_whole_2xx_range() {
        let mut response = HttpResponse { status: 200, headers: Vec::new(), body: String::new() };
        assert!(response.is_success());
        response.status = 204;
        assert!(response.is_success());
        response.status = 302;
        assert!(!response.is_success());
    }

    #[test]
    fn closures_are_transports() {
        let transport = |req: &HttpRequest| -> Result<HttpResponse, TransportError> {
            Ok(HttpResponse { status: 200, headers: Vec::new(), body: req.url.clone() })
        };
        let response = transport.execute(&request("http://localhost/x")).unwrap();
        assert_eq!(response.body, "http://localhost/x");
    }
}
