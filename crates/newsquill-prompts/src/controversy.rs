use newsquill_core::article::{truncate_chars, CONTROVERSY_CHAR_LIMIT};

use crate::Prompt;

pub const SYSTEM_INSTRUCTION: &str = "You are an expert at analyzing news articles and \
identifying controversies. Always respond with valid JSON only.";

/// Ask the model to pull the central disagreement out of an article as JSON.
pub fn prompt(title: &str, content: &str) -> Prompt {
    let excerpt = truncate_chars(content, CONTROVERSY_CHAR_LIMIT);
    let mut text = String::new();
    text.push_str(
        "Analyze this news article and identify the SPECIFIC CONTROVERSIAL ISSUE or DEBATE.\n\n",
    );
    text.push_str(&format!("Article Title: {title}\n"));
    text.push_str(&format!("Article Content: {excerpt}\n\n"));
    text.push_str(
        "Your task:\n\
         1. Identify what people are DISAGREEING about in this article\n\
         2. Find TWO OPPOSING PERSPECTIVES with specific details\n\
         3. Extract specific numbers, policies, events, or groups mentioned\n\n\
         Look for:\n\
         - Opposing viewpoints (e.g., \"some say X, but others argue Y\")\n\
         - Conflicts between groups (supporters vs critics, experts disagree)\n\
         - Debates about policies or decisions\n\
         - Trade-offs (economic vs environmental, efficiency vs safety)\n\
         - Specific numbers, percentages, or statistics mentioned\n\n\
         Return your answer in this EXACT JSON format:\n\
         {\n  \
           \"controversy\": \"Brief description of the main controversy (1-2 sentences)\",\n  \
           \"side1\": {\n    \
             \"group\": \"Who supports this side (e.g., experts, supporters, government)\",\n    \
             \"argument\": \"Their specific argument or claim (with numbers/details if available)\"\n  \
           },\n  \
           \"side2\": {\n    \
             \"group\": \"Who opposes this side (e.g., critics, opponents, experts)\",\n    \
             \"argument\": \"Their specific argument or claim (with numbers/details if available)\"\n  \
           },\n  \
           \"specificDetails\": [\"List of specific numbers, policies, events mentioned \
         (e.g., '50% reduction', '$500 billion', 'new immigration policy')\"]\n\
         }\n\n\
         If you cannot find a clear controversy, identify what COULD be debated based on \
         potential consequences or different stakeholder perspectives.",
    );
    Prompt {
        text,
        system: SYSTEM_INSTRUCTION,
    }
}
