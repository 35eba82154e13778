//! Call options for the two analysis operations.
//!
//! # Design
//! `ToneOptions` and `ToneChatOptions` are immutable once built. The builders
//! are the only way to obtain one and `build()` rejects options without
//! content, so every descriptor the client sees is complete. Category filters
//! keep insertion order and are never deduplicated; the request carries them
//! exactly as they were added.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// An analysis category that can be requested through the `tones` query
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Emotion,
    Language,
    Social,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Emotion => "emotion",
            Tone::Language => "language",
            Tone::Social => "social",
        }
    }
}

/// Language of the submitted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentLanguage {
    En,
    Fr,
}

impl ContentLanguage {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentLanguage::En => "en",
            ContentLanguage::Fr => "fr",
        }
    }
}

/// Language the service should use for tone names in the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AcceptLanguage {
    Ar,
    De,
    En,
    Es,
    Fr,
    It,
    Ja,
    Ko,
    PtBr,
    ZhCn,
    ZhTw,
}

impl AcceptLanguage {
    pub fn as_str(self) -> &'static str {
        match self {
            AcceptLanguage::Ar => "ar",
            AcceptLanguage::De => "de",
            AcceptLanguage::En => "en",
            AcceptLanguage::Es => "es",
            AcceptLanguage::Fr => "fr",
            AcceptLanguage::It => "it",
            AcceptLanguage::Ja => "ja",
            AcceptLanguage::Ko => "ko",
            AcceptLanguage::PtBr => "pt-br",
            AcceptLanguage::ZhCn => "zh-cn",
            AcceptLanguage::ZhTw => "zh-tw",
        }
    }
}

/// JSON form of a single document: `{"text": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneInput {
    pub text: String,
}

/// The document submitted to `tone`. The variant selects the request
/// `content-type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToneContent {
    Json(ToneInput),
    Text(String),
    Html(String),
}

impl ToneContent {
    pub fn content_type(&self) -> &'static str {
        match self {
            ToneContent::Json(_) => "application/json",
            ToneContent::Text(_) => "text/plain; charset=utf-8",
            ToneContent::Html(_) => "text/html; charset=utf-8",
        }
    }

    fn text(&self) -> &str {
        match self {
            ToneContent::Json(input) => &input.text,
            ToneContent::Text(text) | ToneContent::Html(text) => text,
        }
    }
}

/// Options for the `tone` operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneOptions {
    content: ToneContent,
    sentences: Option<bool>,
    tones: Vec<Tone>,
    content_language: Option<ContentLanguage>,
    accept_language: Option<AcceptLanguage>,
}

impl ToneOptions {
    pub fn builder() -> ToneOptionsBuilder {
        ToneOptionsBuilder::default()
    }

    pub fn content(&self) -> &ToneContent {
        &self.content
    }

    pub fn sentences(&self) -> Option<bool> {
        self.sentences
    }

    pub fn tones(&self) -> &[Tone] {
        &self.tones
    }

    pub fn content_language(&self) -> Option<ContentLanguage> {
        self.content_language
    }

    pub fn accept_language(&self) -> Option<AcceptLanguage> {
        self.accept_language
    }

    /// Copy of these options with `tone` appended to the category filters.
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tones.push(tone);
        self
    }

    /// Comma-joined category filter, or `None` when no filter was added.
    pub(crate) fn joined_tones(&self) -> Option<String> {
        if self.tones.is_empty() {
            return None;
        }
        let names: Vec<&str> = self.tones.iter().map(|tone| tone.as_str()).collect();
        Some(names.join(","))
    }
}

/// Builder for `ToneOptions`. `text`, `html` and `tone_input` set the same
/// slot; the last call wins.
#[derive(Debug, Clone, Default)]
pub struct ToneOptionsBuilder {
    content: Option<ToneContent>,
    sentences: Option<bool>,
    tones: Vec<Tone>,
    content_language: Option<ContentLanguage>,
    accept_language: Option<AcceptLanguage>,
}

impl ToneOptionsBuilder {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Some(ToneContent::Text(text.into()));
        self
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.content = Some(ToneContent::Html(html.into()));
        self
    }

    pub fn tone_input(mut self, input: ToneInput) -> Self {
        self.content = Some(ToneContent::Json(input));
        self
    }

    /// Whether the service should also analyze individual sentences. When
    /// never called the parameter is left out and the service default applies.
    pub fn sentences(mut self, sentences: bool) -> Self {
        self.sentences = Some(sentences);
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tones.push(tone);
        self
    }

    pub fn tones(mut self, tones: impl IntoIterator<Item = Tone>) -> Self {
        self.tones = tones.into_iter().collect();
        self
    }

    pub fn content_language(mut self, language: ContentLanguage) -> Self {
        self.content_language = Some(language);
        self
    }

    pub fn accept_language(mut self, language: AcceptLanguage) -> Self {
        self.accept_language = Some(language);
        self
    }

    pub fn build(self) -> Result<ToneOptions, ApiError> {
        let content = self
            .content
            .ok_or_else(|| ApiError::InvalidArgument("tone content (text, html or tone_input) is required".to_string()))?;
        if content.text().is_empty() {
            return Err(ApiError::InvalidArgument("tone content must not be empty".to_string()));
        }
        Ok(ToneOptions {
            content,
            sentences: self.sentences,
            tones: self.tones,
            content_language: self.content_language,
            accept_language: self.accept_language,
        })
    }
}

/// One line of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), user: None }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

/// Options for the `tone_chat` operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneChatOptions {
    utterances: Vec<Utterance>,
    content_language: Option<ContentLanguage>,
    accept_language: Option<AcceptLanguage>,
}

impl ToneChatOptions {
    pub fn builder() -> ToneChatOptionsBuilder {
        ToneChatOptionsBuilder::default()
    }

    pub fn utterances(&self) -> &[Utterance] {
        &self.utterances
    }

    pub fn content_language(&self) -> Option<ContentLanguage> {
        self.content_language
    }

    pub fn accept_language(&self) -> Option<AcceptLanguage> {
        self.accept_language
    }
}

#[derive(Debug, Clone, Default)]
pub struct ToneChatOptionsBuilder {
    utterances: Vec<Utterance>,
    content_language: Option<ContentLanguage>,
    accept_language: Option<AcceptLanguage>,
}

impl ToneChatOptionsBuilder {
    /// Replace the utterance list.
    pub fn utterances(mut self, utterances: impl IntoIterator<Item = Utterance>) -> Self {
        self.utterances = utterances.into_iter().collect();
        self
    }

    /// Append one utterance.
    pub fn utterance(mut self, utterance: Utterance) -> Self {
        self.utterances.push(utterance);
        self
    }

    pub fn content_language(mut self, language: ContentLanguage) -> Self {
        self.content_language = Some(language);
        self
    }

    pub fn accept_language(mut self, language: AcceptLanguage) -> Self {
        self.accept_language = Some(language);
        self
    }

    pub fn build(self) -> Result<ToneChatOptions, ApiError> {
        if self.utterances.is_empty() {
            return Err(ApiError::InvalidArgument("at least one utterance is required".to_string()));
        }
        if let Some(index) = self.utterances.iter().position(|u| u.text.is_empty()) {
            return Err(ApiError::InvalidArgument(format!("utterance {index} has empty text")));
        }
        Ok(ToneChatOptions {
            utterances: self.utterances,
            content_language: self.content_language,
            accept_language: self.accept_language,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_without_content_fails() {
        let err = ToneOptions::builder().tone(Tone::Emotion).build().unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }

    #[test]
    fn build_with_empty_text_fails() {
        let err = ToneOptions::builder().html("").build().unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
        let err = ToneOptions::builder().tone_input(ToneInput { text: String::new() }).build().unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }

    #[test]
    fn last_content_setter_wins() {
        let options = ToneOptions::builder().text("plain").html("<p>html</p>").build().unwrap();
        assert_eq!(options.content(), &ToneContent::Html("<p>html</p>".to_string()));
        assert_eq!(options.content().content_type(), "text/html; charset=utf-8");
    }

    #[test]
    fn tones_keep_insertion_order_and_duplicates() {
        let options = ToneOptions::builder()
            .text("hello")
            .tone(Tone::Social)
            .tone(Tone::Emotion)
            .tone(Tone::Social)
            .build()
            .unwrap();
        assert_eq!(options.tones(), &[Tone::Social, Tone::Emotion, Tone::Social]);
        assert_eq!(options.joined_tones().as_deref(), Some("social,emotion,social"));
    }

    #[test]
    fn no_tones_joins_to_none() {
        let options = ToneOptions::builder().text("hello").build().unwrap();
        assert_eq!(options.joined_tones(), None);
        assert_eq!(options.sentences(), None);
    }

    #[test]
    fn with_tone_appends_to_a_copy() {
        let base = ToneOptions::builder().text("hello").tone(Tone::Emotion).build().unwrap();
        let extended = base.clone().with_tone(Tone::Language);
        assert_eq!(base.tones(), &[Tone::Emotion]);
        assert_eq!(extended.tones(), &[Tone::Emotion, Tone::Language]);
    }

    #[test]
    fn tones_replaces_previous_list() {
        let options = ToneOptions::builder()
            .text("hello")
            .tone(Tone::Emotion)
            .tones([Tone::Language])
            .build()
            .unwrap();
        assert_eq!(options.tones(), &[Tone::Language]);
    }

    #[test]
    fn accept_language_wire_names() {
        assert_eq!(AcceptLanguage::PtBr.as_str(), "pt-br");
        assert_eq!(serde_json::to_value(AcceptLanguage::ZhTw).unwrap(), "zh-tw");
        assert_eq!(serde_json::to_value(Tone::Emotion).unwrap(), "emotion");
    }

    #[test]
    fn chat_options_require_utterances() {
        let err = ToneChatOptions::builder().build().unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }

    #[test]
    fn chat_options_reject_empty_utterance_text() {
        let err = ToneChatOptions::builder()
            .utterance(Utterance::new("fine"))
            .utterance(Utterance::new(""))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("utterance 1"));
    }

    #[test]
    fn utterance_without_user_omits_field() {
        let json = serde_json::to_value(Utterance::new("hi")).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "hi" }));
        let json = serde_json::to_value(Utterance::new("hi").with_user("agent")).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "hi", "user": "agent" }));
    }
}
