//! Request assembly and response binding for the Tone Analyzer API.
//!
//! # Design
//! `ToneAnalyzer` holds only an immutable `ServiceConfig` and carries no
//! mutable state between calls, so a shared reference can serve concurrent
//! callers. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! `tone` and `tone_chat` chain the two through a caller-supplied
//! `Transport`; nothing in this module performs I/O itself.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::ServiceConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::options::{AcceptLanguage, ContentLanguage, ToneChatOptions, ToneContent, ToneOptions, Utterance};
use crate::types::{ToneAnalysis, UtteranceAnalyses};

pub const TONE_PATH: &str = "/v3/tone";
pub const TONE_CHAT_PATH: &str = "/v3/tone_chat";

const JSON: &str = "application/json";

/// Body of a `tone_chat` request.
#[derive(Serialize)]
struct ToneChatInput<'a> {
    utterances: &'a [Utterance],
}

/// Synchronous, stateless client for the Tone Analyzer API.
#[derive(Debug, Clone)]
pub struct ToneAnalyzer {
    config: ServiceConfig,
}

impl ToneAnalyzer {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Analyze the tone of a single document.
    ///
    /// Fails with `InvalidArgument` when `options` is `None`, before the
    /// transport is called.
    pub fn tone<T>(&self, transport: &T, options: Option<&ToneOptions>) -> Result<ToneAnalysis, ApiError>
    where
        T: Transport + ?Sized,
    {
        let options = options.ok_or_else(|| ApiError::InvalidArgument("tone options must not be null".to_string()))?;
        let request = self.build_tone(options)?;
        let response = send("tone", transport, &request)?;
        self.parse_tone(response)
    }

    /// Analyze the tone of each utterance in a conversation.
    pub fn tone_chat<T>(
        &self,
        transport: &T,
        options: Option<&ToneChatOptions>,
    ) -> Result<UtteranceAnalyses, ApiError>
    where
        T: Transport + ?Sized,
    {
        let options =
            options.ok_or_else(|| ApiError::InvalidArgument("tone_chat options must not be null".to_string()))?;
        let request = self.build_tone_chat(options)?;
        let response = send("tone_chat", transport, &request)?;
        self.parse_tone_chat(response)
    }

    pub fn build_tone(&self, options: &ToneOptions) -> Result<HttpRequest, ApiError> {
        let mut url = self.url(TONE_PATH)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("version", self.config.version());
            if let Some(sentences) = options.sentences() {
                query.append_pair("sentences", if sentences { "true" } else { "false" });
            }
            if let Some(tones) = options.joined_tones() {
                query.append_pair("tones", &tones);
            }
        }

        let content = options.content();
        let body = match content {
            ToneContent::Json(input) => serde_json::to_string(input)
                .map_err(|source| ApiError::Serialization { operation: "tone", source })?,
            ToneContent::Text(text) | ToneContent::Html(text) => text.clone(),
        };

        let headers = self.headers(content.content_type(), options.content_language(), options.accept_language())?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: url.into(),
            headers,
            body: Some(body),
        })
    }

    pub fn build_tone_chat(&self, options: &ToneChatOptions) -> Result<HttpRequest, ApiError> {
        let mut url = self.url(TONE_CHAT_PATH)?;
        url.query_pairs_mut().append_pair("version", self.config.version());

        let input = ToneChatInput { utterances: options.utterances() };
        let body = serde_json::to_string(&input)
            .map_err(|source| ApiError::Serialization { operation: "tone_chat", source })?;

        let headers = self.headers(JSON, options.content_language(), options.accept_language())?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: url.into(),
            headers,
            body: Some(body),
        })
    }

    pub fn parse_tone(&self, response: HttpResponse) -> Result<ToneAnalysis, ApiError> {
        parse("tone", response)
    }

    pub fn parse_tone_chat(&self, response: HttpResponse) -> Result<UtteranceAnalyses, ApiError> {
        parse("tone_chat", response)
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        Ok(Url::parse(&format!("{}{path}", self.config.endpoint()))?)
    }

    fn headers(
        &self,
        content_type: &str,
        content_language: Option<ContentLanguage>,
        accept_language: Option<AcceptLanguage>,
    ) -> Result<Vec<(String, String)>, ApiError> {
        let credentials = self
            .config
            .credentials()
            .ok_or_else(|| ApiError::InvalidArgument("service credentials are not configured".to_string()))?;

        let mut headers = vec![
            ("accept".to_string(), JSON.to_string()),
            ("content-type".to_string(), content_type.to_string()),
        ];
        if let Some(language) = content_language {
            headers.push(("content-language".to_string(), language.as_str().to_string()));
        }
        if let Some(language) = accept_language {
            headers.push(("accept-language".to_string(), language.as_str().to_string()));
        }
        for (name, value) in self.config.default_headers() {
            if name != "authorization" && !headers.iter().any(|(set, _)| set == name) {
                headers.push((name.clone(), value.clone()));
            }
        }
        headers.push(("authorization".to_string(), credentials.authorization()));
        Ok(headers)
    }
}

fn send<T>(operation: &'static str, transport: &T, request: &HttpRequest) -> Result<HttpResponse, ApiError>
where
    T: Transport + ?Sized,
{
    debug!(operation, method = request.method.as_str(), url = %request.url, "sending request");
    let response = transport.execute(request).map_err(ApiError::Transport)?;
    debug!(operation, status = response.status, "received response");
    Ok(response)
}

/// Map non-2xx statuses to `HttpError`, then decode the body.
fn parse<T: DeserializeOwned>(operation: &'static str, response: HttpResponse) -> Result<T, ApiError> {
    if !response.is_success() {
        warn!(operation, status = response.status, "service returned an error status");
        return Err(ApiError::HttpError {
            status: response.status,
            body: response.body,
        });
    }
    serde_json::from_str(&response.body).map_err(|source| ApiError::Deserialization { operation, source })
}
