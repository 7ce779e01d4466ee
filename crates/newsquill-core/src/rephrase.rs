use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::controversy::json_object_span;

/// The learner's text rewritten at each proficiency level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RephraseResponse {
    pub beginner: String,
    pub intermediate: String,
    pub advanced: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
}

#[derive(Deserialize)]
struct Reply {
    beginner: String,
    intermediate: String,
    advanced: String,
}

impl RephraseResponse {
    /// Parse the model's JSON reply. All three levels must be present and non-blank.
    pub fn from_reply(reply: &str) -> Option<Self> {
        let span = json_object_span(reply)?;
        let parsed: Reply = match serde_json::from_str(span) {
            Ok(r) => r,
            Err(e) => {
                warn!("failed to parse rephrase JSON: {e}");
                return None;
            }
        };
        let fields = [&parsed.beginner, &parsed.intermediate, &parsed.advanced];
        if fields.iter().any(|f| f.trim().is_empty()) {
            warn!("rephrase reply is missing a level");
            return None;
        }
        Some(Self {
            beginner: parsed.beginner.trim().to_string(),
            intermediate: parsed.intermediate.trim().to_string(),
            advanced: parsed.advanced.trim().to_string(),
            fallback: false,
        })
    }

    /// Echo the input unchanged at every level.
    pub fn fallback(text: &str) -> Self {
        Self {
            beginner: text.to_string(),
            intermediate: text.to_string(),
            advanced: text.to_string(),
            fallback: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_levels() {
        let reply = r#"```json
{"beginner": "I like it.", "intermediate": "I quite enjoy it.", "advanced": "I find it rather delightful."}
```"#;
        let r = RephraseResponse::from_reply(reply).unwrap();
        assert_eq!(r.beginner, "I like it.");
        assert_eq!(r.advanced, "I find it rather delightful.");
        assert!(!r.fallback);
    }

    #[test]
    fn missing_level_is_rejected() {
        let reply = r#"{"beginner": "a", "intermediate": "b"}"#;
        assert!(RephraseResponse::from_reply(reply).is_none());
        let reply = r#"{"beginner": "a", "intermediate": " ", "advanced": "c"}"#;
        assert!(RephraseResponse::from_reply(reply).is_none());
    }

    #[test]
    fn fallback_echoes_text() {
        let r = RephraseResponse::fallback("hello");
        assert_eq!(r.beginner, "hello");
        assert_eq!(r.intermediate, "hello");
        assert_eq!(r.advanced, "hello");
        assert!(r.fallback);
        let body = serde_json::to_value(&r).unwrap();
        assert_eq!(body["fallback"], serde_json::json!(true));
    }
}
