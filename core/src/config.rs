//! Service configuration shared by every call.
//!
//! # Design
//! `ServiceConfig` is assembled once through its setters and then moved into
//! a `ToneAnalyzer`, which only ever reads it. Credentials are rendered into
//! an `authorization` header per request; their `Debug` output is redacted so
//! a logged config never leaks secrets.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use url::Url;

use crate::error::ApiError;

/// Public endpoint used when no other URL is configured.
pub const DEFAULT_ENDPOINT: &str = "https://gateway.watsonplatform.net/tone-analyzer/api";

pub const ENV_URL: &str = "TONE_ANALYZER_URL";
pub const ENV_USERNAME: &str = "TONE_ANALYZER_USERNAME";
pub const ENV_PASSWORD: &str = "TONE_ANALYZER_PASSWORD";
pub const ENV_BEARER_TOKEN: &str = "TONE_ANALYZER_BEARER_TOKEN";

/// Credentials attached to every request.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Basic { username: String, password: String },
    BearerToken(String),
}

impl Credentials {
    /// Value of the `authorization` header.
    pub fn authorization(&self) -> String {
        match self {
            Credentials::Basic { username, password } => {
                format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
            }
            Credentials::BearerToken(token) => format!("Bearer {token}"),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Credentials::BearerToken(_) => f.debug_tuple("BearerToken").field(&"<redacted>").finish(),
        }
    }
}

/// Endpoint, API version, credentials and default headers for the service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    endpoint: String,
    version: String,
    credentials: Option<Credentials>,
    default_headers: Vec<(String, String)>,
}

impl ServiceConfig {
    /// Config for API `version` (a date such as `2017-09-21`) against the
    /// default endpoint with no credentials yet.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            version: version.into(),
            credentials: None,
            default_headers: Vec::new(),
        }
    }

    /// Config populated from the `TONE_ANALYZER_*` environment variables.
    pub fn from_env(version: impl Into<String>) -> Result<Self, ApiError> {
        Self::from_lookup(version, |key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an arbitrary variable source. A bearer token
    /// takes precedence over a username and password.
    pub fn from_lookup<F>(version: impl Into<String>, lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(version);
        if let Some(url) = lookup(ENV_URL) {
            config.set_endpoint(&url)?;
        }
        if let Some(token) = lookup(ENV_BEARER_TOKEN) {
            config.set_bearer_token(token);
        } else if let Some(username) = lookup(ENV_USERNAME) {
            let password = lookup(ENV_PASSWORD).unwrap_or_default();
            config.set_username_and_password(username, password);
        }
        Ok(config)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    /// Point the client at another base URL. Trailing slashes are dropped.
    /// Operation paths are appended to the URL, so it must not carry a query
    /// string or fragment.
    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<(), ApiError> {
        let url = Url::parse(endpoint)?;
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ApiError::InvalidArgument(format!(
                "service endpoint must not have a query or fragment: {endpoint}"
            )));
        }
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        Ok(())
    }

    pub fn set_username_and_password(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.credentials = Some(Credentials::Basic {
            username: username.into(),
            password: password.into(),
        });
    }

    pub fn set_bearer_token(&mut self, token: impl Into<String>) {
        self.credentials = Some(Credentials::BearerToken(token.into()));
    }

    /// Headers appended to every request after the ones the client sets.
    /// Names are stored lowercase. A default never replaces a header the
    /// client sets for the request, and `authorization` always comes from the
    /// configured credentials.
    pub fn set_default_headers(&mut self, headers: impl IntoIterator<Item = (String, String)>) {
        self.default_headers = headers
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect();
    }
}
