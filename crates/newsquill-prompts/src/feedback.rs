use newsquill_core::article::{truncate_chars, FEEDBACK_ARTICLE_CHAR_LIMIT};
use newsquill_core::Level;

use crate::Prompt;

pub const SYSTEM_INSTRUCTION: &str = "You are a supportive English writing tutor for language \
learners. Give specific, encouraging, and actionable feedback. Quote the learner's own words \
when correcting them, and match your vocabulary to the learner's level.";

/// A learner's answer and whatever is known about the prompt it answers.
#[derive(Debug, Clone, Default)]
pub struct FeedbackContext {
    pub text: String,
    pub article_title: Option<String>,
    pub article_content: Option<String>,
    pub question: Option<String>,
    pub level: Option<Level>,
}

impl FeedbackContext {
    pub fn prompt(&self) -> Prompt {
        let mut text = String::new();
        let level = self.level.unwrap_or(Level::Intermediate);

        text.push_str(&format!(
            "Review the following piece of writing by a {} ({}) English learner.\n\n",
            level,
            level.cefr()
        ));

        if let Some(ref title) = self.article_title {
            text.push_str(&format!("## Article\n\nTitle: {title}\n"));
            if let Some(ref content) = self.article_content {
                text.push_str(&format!(
                    "Excerpt: {}\n",
                    truncate_chars(content, FEEDBACK_ARTICLE_CHAR_LIMIT)
                ));
            }
            text.push('\n');
        }

        if let Some(ref question) = self.question {
            text.push_str(&format!("## Writing Prompt\n\n{question}\n\n"));
        }

        text.push_str(&format!("## Learner's Response\n\n{}\n\n", self.text));

        text.push_str("## Instructions\n\n");
        text.push_str(
            "Write feedback with these sections:\n\
             1. **Strengths**: what the learner did well.\n\
             2. **Grammar**: up to five corrections, each quoting the original and the fix.\n\
             3. **Vocabulary**: better word choices suited to the learner's level.\n\
             4. **Structure & Argument**: how clearly the position is stated and supported",
        );
        if self.question.is_some() {
            text.push_str(", and whether the response answers the writing prompt");
        }
        text.push_str(
            ".\n\
             5. **Next Step**: one concrete thing to practise next time.\n\n\
             Keep the feedback under 250 words. Respond with the feedback only.",
        );

        Prompt {
            text,
            system: SYSTEM_INSTRUCTION,
        }
    }
}
