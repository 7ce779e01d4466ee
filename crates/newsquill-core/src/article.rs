//! Cheap text heuristics over article title and body.
//!
//! These feed the question prompt when no structured controversy is
//! available, and build the fallback question when generation fails.

use std::collections::HashMap;

use crate::level::Level;

/// Article body characters sent with the question prompt.
pub const ARTICLE_CHAR_LIMIT: usize = 5000;
/// Article body characters sent with the controversy extraction prompt.
pub const CONTROVERSY_CHAR_LIMIT: usize = 3000;
/// Article body characters sent with the writing feedback prompt.
pub const FEEDBACK_ARTICLE_CHAR_LIMIT: usize = 2000;
/// Learner text characters accepted by the rephrase endpoint.
pub const REPHRASE_CHAR_LIMIT: usize = 500;

const TOPIC_COUNT: usize = 10;
const MIN_TOPIC_LEN: usize = 5;
const SENTENCE_COUNT: usize = 5;
const MIN_SENTENCE_LEN: usize = 21;

/// Prefix of `text` holding at most `max` characters.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// The ten most frequent words longer than four characters, most frequent first.
///
/// Punctuation is treated as a word separator. Words with equal counts keep
/// the order in which they first appear.
pub fn key_topics(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for word in normalized.split_whitespace() {
        if word.chars().count() < MIN_TOPIC_LEN {
            continue;
        }
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(TOPIC_COUNT)
        .map(|(word, _)| word.to_string())
        .collect()
}

/// The first five substantial sentences of `text`, joined with `". "`.
pub fn key_sentences(text: &str) -> String {
    text.split(['.', '!', '?'])
        .filter(|s| s.trim().chars().count() >= MIN_SENTENCE_LEN)
        .take(SENTENCE_COUNT)
        .collect::<Vec<_>>()
        .join(". ")
        .trim()
        .to_string()
}

/// Topic and kind of disagreement used to phrase a fallback question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebatableIssue {
    pub topic: String,
    pub issue: &'static str,
}

pub fn debatable_issue(title: &str, content: &str) -> DebatableIssue {
    let topic = title
        .to_lowercase()
        .split_whitespace()
        .find(|w| w.chars().count() >= MIN_TOPIC_LEN)
        .unwrap_or("this topic")
        .to_string();

    let text = format!("{title} {content}").to_lowercase();
    let issue = if text.contains("some say") || text.contains("others argue") {
        "different opinions"
    } else if text.contains("critics") || text.contains("opponents") {
        "opposing viewpoints"
    } else if text.contains("benefits") && text.contains("drawbacks") {
        "benefits and drawbacks"
    } else if text.contains("challenges") || text.contains("concerns") {
        "challenges and concerns"
    } else {
        "different perspectives"
    };

    DebatableIssue { topic, issue }
}

/// Templated question used when generation fails or its output is rejected.
///
/// A missing level falls back to the intermediate template.
pub fn fallback_question(level: Option<Level>, issue: &DebatableIssue) -> String {
    let DebatableIssue { topic, issue } = issue;
    match level.unwrap_or(Level::Intermediate) {
        Level::Beginner => format!(
            "The article talks about {topic}. Some people have different opinions about this. \
             What do you think? Write your opinion in simple English."
        ),
        Level::Intermediate => format!(
            "The article discusses {topic}, and there are {issue} on this topic. \
             What is your position on this debate? Please provide your analysis and explain your reasoning."
        ),
        Level::Advanced => format!(
            "The article analyzes {topic}, presenting {issue}. Critically evaluate the different \
             perspectives and discuss which position you support and why."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 4), "héll");
        assert_eq!(truncate_chars("short", 100), "short");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn key_topics_ranks_by_frequency() {
        let text = "Energy prices rise. Energy policy changes; energy markets react. Policy debate.";
        let topics = key_topics(text);
        assert_eq!(topics[0], "energy");
        assert_eq!(topics[1], "policy");
        assert!(topics.contains(&"prices".to_string()));
        // short words are dropped
        assert!(!topics.iter().any(|t| t == "rise"));
    }

    #[test]
    fn key_topics_ties_keep_first_seen_order() {
        let topics = key_topics("zebra apple mango");
        assert_eq!(topics, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn key_topics_caps_at_ten() {
        let text = "alpha1 alpha2 alpha3 alpha4 alpha5 alpha6 alpha7 alpha8 alpha9 alpha10 alpha11";
        assert_eq!(key_topics(text).len(), 10);
    }

    #[test]
    fn key_topics_splits_on_punctuation() {
        let topics = key_topics("climate-change, climate!");
        assert_eq!(topics, vec!["climate", "change"]);
    }

    #[test]
    fn key_sentences_skips_short_fragments() {
        let text = "Hi. The council voted to close the library on Sunday! \
                    Why? Residents gathered outside the town hall to protest the decision.";
        let out = key_sentences(text);
        assert!(out.starts_with("The council voted"));
        assert!(out.contains("on Sunday."));
        assert!(out.contains("Residents gathered"));
        assert!(!out.contains("Hi"));
        assert!(!out.contains("Why"));
    }

    #[test]
    fn key_sentences_takes_at_most_five() {
        let sentence = "This sentence is long enough to be kept";
        let text = vec![sentence; 8].join(". ");
        let out = key_sentences(&text);
        assert_eq!(out.matches("This sentence").count(), 5);
    }

    #[test]
    fn debatable_issue_picks_first_long_title_word() {
        let issue = debatable_issue("New Smartphone ban in schools", "");
        assert_eq!(issue.topic, "smartphone");
        assert_eq!(issue.issue, "different perspectives");
    }

    #[test]
    fn debatable_issue_without_long_words() {
        let issue = debatable_issue("A big win", "");
        assert_eq!(issue.topic, "this topic");
    }

    #[test]
    fn debatable_issue_precedence() {
        assert_eq!(
            debatable_issue("t", "Some say yes; critics say no").issue,
            "different opinions"
        );
        assert_eq!(
            debatable_issue("t", "Critics disagree").issue,
            "opposing viewpoints"
        );
        assert_eq!(
            debatable_issue("t", "the benefits and the drawbacks").issue,
            "benefits and drawbacks"
        );
        assert_eq!(
            debatable_issue("t", "only benefits, plus concerns").issue,
            "challenges and concerns"
        );
    }

    #[test]
    fn fallback_question_per_level() {
        let issue = DebatableIssue {
            topic: "tariffs".into(),
            issue: "opposing viewpoints",
        };
        let beginner = fallback_question(Some(Level::Beginner), &issue);
        assert!(beginner.starts_with("The article talks about tariffs."));
        assert!(beginner.ends_with("simple English."));

        let advanced = fallback_question(Some(Level::Advanced), &issue);
        assert!(advanced.starts_with("The article analyzes tariffs, presenting opposing viewpoints."));

        let intermediate = fallback_question(Some(Level::Intermediate), &issue);
        assert!(intermediate.contains("there are opposing viewpoints on this topic"));
    }

    #[test]
    fn fallback_question_defaults_to_intermediate() {
        let issue = DebatableIssue {
            topic: "tariffs".into(),
            issue: "different opinions",
        };
        assert_eq!(
            fallback_question(None, &issue),
            fallback_question(Some(Level::Intermediate), &issue)
        );
    }
}
