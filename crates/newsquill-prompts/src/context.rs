use newsquill_core::article::{key_sentences, key_topics, truncate_chars, ARTICLE_CHAR_LIMIT};
use newsquill_core::controversy::Controversy;

/// Everything known about an article when asking for a debate question.
#[derive(Debug, Clone)]
pub struct ArticleContext {
    pub title: String,
    /// Article body, already cut to `ARTICLE_CHAR_LIMIT` characters.
    pub content: String,
    pub controversy: Option<Controversy>,
}

impl ArticleContext {
    pub fn new(title: &str, content: &str, controversy: Option<Controversy>) -> Self {
        Self {
            title: title.to_string(),
            content: truncate_chars(content, ARTICLE_CHAR_LIMIT).to_string(),
            controversy,
        }
    }

    /// Render the controversy section if one was extracted, else the raw
    /// article with its key topics and opening sentences.
    pub fn append_context(&self, prompt: &mut String) {
        match self.controversy {
            Some(ref c) => {
                prompt.push_str("=== IDENTIFIED CONTROVERSY ===\n");
                prompt.push_str(&format!("Main Controversy: {}\n\n", c.controversy));
                prompt.push_str(&format!(
                    "Side 1 - {}:\n{}\n\n",
                    c.side1.group, c.side1.argument
                ));
                prompt.push_str(&format!(
                    "Side 2 - {}:\n{}\n\n",
                    c.side2.group, c.side2.argument
                ));
                prompt.push_str(&format!(
                    "Specific Details: {}\n\n",
                    c.specific_details.join(", ")
                ));
                prompt.push_str("=== YOUR TASK ===\n");
                prompt.push_str(
                    "Based on the controversy identified above, create a debate question that:\n",
                );
                prompt.push_str(&format!(
                    "1. Presents BOTH sides clearly ({} vs {})\n",
                    c.side1.group, c.side2.group
                ));
                prompt.push_str("2. References the specific arguments and details provided\n");
                prompt.push_str("3. Asks students to take a position on this specific debate\n");
            }
            None => {
                let topics = key_topics(&format!("{} {}", self.title, self.content));
                prompt.push_str("=== ARTICLE INFORMATION ===\n");
                prompt.push_str(&format!("Title: {}\n\n", self.title));
                prompt.push_str(&format!("Key Topics/Keywords: {}\n\n", topics.join(", ")));
                prompt.push_str("Key Content Excerpt:\n");
                prompt.push_str(&key_sentences(&self.content));
                prompt.push_str("\n\nFull Article Content:\n");
                prompt.push_str(&self.content);
                prompt.push_str("\n\n=== YOUR TASK ===\n");
                prompt.push_str(
                    "Analyze this article to identify a SPECIFIC CONTROVERSIAL ISSUE or DEBATE, \
                     then create a question.",
                );
            }
        }
    }
}
