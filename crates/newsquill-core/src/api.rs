//! Request and response bodies for the HTTP endpoints.
//!
//! Request fields are deserialized leniently: a field holding the wrong JSON
//! type reads as absent, so handlers report it through their presence checks
//! instead of failing the whole body.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::level::Level;

pub use crate::rephrase::RephraseResponse;

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Returns the value only if it contains something other than whitespace.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateQuestionRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub level: Option<String>,
}

impl GenerateQuestionRequest {
    pub fn title(&self) -> Option<&str> {
        non_blank(&self.title)
    }

    pub fn content(&self) -> Option<&str> {
        non_blank(&self.content)
    }

    pub fn level(&self) -> Option<Level> {
        self.level.as_deref().and_then(Level::parse_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub question: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingFeedbackRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: Option<String>,
    /// Opaque client-side identifier, string or number.
    #[serde(default)]
    pub article_id: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub article_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub article_content: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub question: Option<String>,
}

impl WritingFeedbackRequest {
    pub fn text(&self) -> Option<&str> {
        non_blank(&self.text)
    }

    pub fn level(&self) -> Option<Level> {
        self.level.as_deref().and_then(Level::parse_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub feedback: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RephraseRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: Option<String>,
}

impl RephraseRequest {
    pub fn text(&self) -> Option<&str> {
        non_blank(&self.text)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
