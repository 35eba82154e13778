//! Synchronous API client core for the Tone Analyzer service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, either by hand between `build_*` and `parse_*` or
//! through a `Transport` passed to `ToneAnalyzer::tone` / `tone_chat`.
//!
//! # Design
//! - `ToneAnalyzer` is stateless apart from its read-only `ServiceConfig`.
//! - Call options are immutable values produced by validating builders.
//! - Result DTOs derive structural equality and re-serialize to the JSON
//!   they were decoded from.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod options;
pub mod types;

pub use client::{ToneAnalyzer, TONE_CHAT_PATH, TONE_PATH};
pub use config::{Credentials, ServiceConfig};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use options::{
    AcceptLanguage, ContentLanguage, Tone, ToneChatOptions, ToneChatOptionsBuilder, ToneContent, ToneInput,
    ToneOptions, ToneOptionsBuilder, Utterance,
};
pub use types::{
    DocumentAnalysis, SentenceAnalysis, ToneAnalysis, ToneCategory, ToneChatScore, ToneScore, UtteranceAnalyses,
    UtteranceAnalysis,
};
