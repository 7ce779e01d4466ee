use once_cell::sync::Lazy;
use regex::Regex;

use crate::level::Level;

static FEEDBACK_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^Feedback:\s*").unwrap());

/// Trim the reply and strip a leading `Feedback:` label.
pub fn clean_feedback(raw: &str) -> String {
    FEEDBACK_PREFIX_RE
        .replace(raw.trim(), "")
        .trim()
        .to_string()
}

/// Generic feedback used when the model cannot be reached.
///
/// A missing level gets the intermediate advice.
pub fn fallback_feedback(level: Option<Level>, text: &str) -> String {
    let words = text.split_whitespace().count();
    let level = level.unwrap_or(Level::Intermediate);
    let advice = match level {
        Level::Beginner => {
            "- Write short, clear sentences and check that each one has a subject and a verb.\n\
             - Give one reason for your opinion, using words like \"because\" or \"so\".\n\
             - Read your answer again and check spelling and capital letters."
        }
        Level::Intermediate => {
            "- State your position in the first sentence, then support it with reasons and an example.\n\
             - Link your ideas with connectors such as \"however\", \"therefore\" and \"in addition\".\n\
             - Check verb tenses and articles (a, an, the) as you proofread."
        }
        Level::Advanced => {
            "- Acknowledge the opposing view and explain precisely why your position is stronger.\n\
             - Vary sentence structure and prefer exact, academic vocabulary over general words.\n\
             - Make sure every paragraph advances the argument and the conclusion follows from it."
        }
    };
    format!(
        "Thank you for your response ({words} words). Detailed feedback is not available right now, \
         but here are some tips for {level} ({cefr}) writers:\n{advice}",
        cefr = level.cefr(),
    )
}
