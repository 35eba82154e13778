//! Result DTOs for the Tone Analyzer API.
//!
//! # Design
//! Optional fields are `Option` and skipped when absent, so decoding a
//! response and encoding it again yields the same JSON value. Equality is
//! derived field by field; scores are `f64`, which rules out `Eq`.
//!
//! An integral score such as `"score": 1` decodes to `1.0` and encodes back
//! as `1.0`. Decoded values still compare equal, but a `serde_json::Value`
//! comparison with the original document holds only when every score carries
//! a fraction.

use serde::{Deserialize, Serialize};

/// Result of the `tone` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneAnalysis {
    pub document_tone: DocumentAnalysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentences_tone: Option<Vec<SentenceAnalysis>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Tones of the document as a whole.
///
/// `tones` is filled by current API versions, `tone_categories` by the
/// legacy `2016-05-19` version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tones: Option<Vec<ToneScore>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone_categories: Option<Vec<ToneCategory>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceAnalysis {
    pub sentence_id: i64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tones: Option<Vec<ToneScore>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone_categories: Option<Vec<ToneCategory>>,
    /// Character offset of the sentence start in the submitted document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_from: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_to: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneScore {
    pub score: f64,
    pub tone_id: String,
    pub tone_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneCategory {
    pub tones: Vec<ToneScore>,
    pub category_id: String,
    pub category_name: String,
}

/// Result of the `tone_chat` operation, one entry per submitted utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtteranceAnalyses {
    pub utterances_tone: Vec<UtteranceAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtteranceAnalysis {
    pub utterance_id: i64,
    pub utterance_text: String,
    pub tones: Vec<ToneChatScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneChatScore {
    pub score: f64,
    pub tone_id: String,
    pub tone_name: String,
}
