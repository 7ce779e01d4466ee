use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

static JSON_OBJECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[\s\S]*\}").unwrap());

/// Outermost `{ ... }` span in a model reply, if any.
///
/// Models often wrap JSON in prose or code fences; this takes everything from
/// the first `{` to the last `}`.
pub fn json_object_span(reply: &str) -> Option<&str> {
    JSON_OBJECT_RE.find(reply).map(|m| m.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    pub group: String,
    pub argument: String,
}

/// The central disagreement of an article, as extracted by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Controversy {
    pub controversy: String,
    pub side1: Side,
    pub side2: Side,
    #[serde(default)]
    pub specific_details: Vec<String>,
}

impl Controversy {
    pub fn from_reply(reply: &str) -> Option<Self> {
        let span = json_object_span(reply)?;
        match serde_json::from_str(span) {
            Ok(c) => Some(c),
            Err(e) => {
                warn!("failed to parse controversy JSON, continuing without it: {e}");
                None
            }
        }
    }
}
