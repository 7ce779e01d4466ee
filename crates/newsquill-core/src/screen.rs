//! Cleanup and acceptability screening for generated debate questions.
//!
//! A question is only accepted when it names two opposing camps and anchors
//! the debate in something concrete from the article. Everything else is
//! replaced by the templated fallback.

use std::fmt;

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

/// Minimum length, in characters, of an accepted question (exclusive).
pub const MIN_QUESTION_LEN: usize = 50;

static LEAD_IN_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^Question:\s*",
        r"(?i)^Q:\s*",
        r"(?i)^Here's\s+(the\s+)?question:\s*",
        r"(?i)^The\s+question\s+is:\s*",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static FORBIDDEN_STARTS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"(?i)^this\s+article\s+(discusses?|mentions?|talks?\s+about|describes?|reports?)",
        r"(?i)^the\s+article\s+(discusses?|mentions?|talks?\s+about|describes?|reports?)",
        r"(?i)^what\s+do\s+you\s+think\s+about\s+this\s+article",
        r"(?i)^what\s+is\s+your\s+opinion\s+on\s+this",
    ])
    .unwrap()
});

static GENERIC_PHRASES: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"(?i)there\s+are\s+different\s+perspectives\s+on\s+this\s+topic",
        r"(?i)people\s+have\s+different\s+opinions",
        r"(?i)there\s+are\s+various\s+viewpoints",
        r"(?i)some\s+people\s+think\s+[^,]+,\s+and\s+there\s+are\s+different\s+perspectives",
    ])
    .unwrap()
});

static CLAIM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:some|many|experts|critics|supporters|proponents|opponents)\s+(?:argue|claim|say|believe|think|worry|support|oppose|favor|prefer)",
    )
    .unwrap()
});

static CONTRAST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:while|but|however|whereas|on\s+the\s+other\s+hand|conversely)\s+(?:others|some|many|experts|critics|supporters)",
    )
    .unwrap()
});

static DETAIL_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"(?i)(?:by\s+)?\d+%|\$\d+|\d+\s+(?:million|billion|thousand|percent|people|countries)",
        r"(?i)(?:policy|law|plan|proposal|decision|agreement|treaty)",
        r"(?i)(?:government|experts|critics|supporters|opponents|proponents|administrators|professionals)",
    ])
    .unwrap()
});

/// Trim the reply and strip lead-ins such as `Question:` or `Here's the question:`.
pub fn clean_question(raw: &str) -> String {
    let mut text = raw.trim().to_string();
    for re in LEAD_IN_RES.iter() {
        text = re.replace(&text, "").into_owned();
    }
    text.trim().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Opens by describing the article instead of the debate.
    ForbiddenStart,
    /// Uses filler like "people have different opinions".
    GenericPhrasing,
    /// Lacks two opposing camps, a concrete detail, or enough length.
    NotSpecific,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RejectReason::ForbiddenStart => "forbidden opening",
            RejectReason::GenericPhrasing => "generic phrasing",
            RejectReason::NotSpecific => "no specific controversy",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(RejectReason),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

pub fn has_forbidden_start(question: &str) -> bool {
    FORBIDDEN_STARTS.is_match(question)
}

pub fn has_generic_phrasing(question: &str) -> bool {
    GENERIC_PHRASES.is_match(question)
}

/// Both a claim by one camp and a contrast with another.
pub fn has_specific_controversy(question: &str) -> bool {
    CLAIM_RE.is_match(question) && CONTRAST_RE.is_match(question)
}

/// A figure, a policy word, or a named group.
pub fn has_specific_details(question: &str) -> bool {
    DETAIL_PATTERNS.is_match(question)
}

/// Screen an already cleaned question.
pub fn assess_question(question: &str) -> Verdict {
    if has_forbidden_start(question) {
        return Verdict::Rejected(RejectReason::ForbiddenStart);
    }
    if has_generic_phrasing(question) {
        return Verdict::Rejected(RejectReason::GenericPhrasing);
    }
    let specific = has_specific_controversy(question)
        && has_specific_details(question)
        && question.chars().count() > MIN_QUESTION_LEN;
    if !specific {
        return Verdict::Rejected(RejectReason::NotSpecific);
    }
    Verdict::Accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "Some experts argue that reducing emissions by 50% will cause a recession, \
                        while others claim it will create millions of green jobs. \
                        Which side of this debate do you support?";

    #[test]
    fn clean_strips_lead_ins() {
        assert_eq!(clean_question("  Question: Why?  "), "Why?");
        assert_eq!(clean_question("q: Why?"), "Why?");
        assert_eq!(clean_question("Here's the question: Why?"), "Why?");
        assert_eq!(clean_question("here's question:Why?"), "Why?");
        assert_eq!(clean_question("The question is: Why?"), "Why?");
    }

    #[test]
    fn clean_only_strips_leading_prefix() {
        assert_eq!(
            clean_question("Why ask the Question: here?"),
            "Why ask the Question: here?"
        );
    }

    #[test]
    fn clean_applies_prefixes_in_sequence() {
        assert_eq!(clean_question("Question: Q: Why?"), "Why?");
    }

    #[test]
    fn accepts_specific_debate_question() {
        assert_eq!(assess_question(GOOD), Verdict::Accepted);
    }

    #[test]
    fn forbidden_start_always_rejected() {
        let q = format!("This article discusses emissions. {GOOD}");
        assert_eq!(
            assess_question(&q),
            Verdict::Rejected(RejectReason::ForbiddenStart)
        );
        for start in [
            "The article mentions",
            "the ARTICLE talks about",
            "This article reports",
            "What do you think about this article",
            "What is your opinion on this",
        ] {
            let q = format!("{start} {GOOD}");
            assert!(has_forbidden_start(&q), "{start}");
            assert!(!assess_question(&q).is_accepted(), "{start}");
        }
    }

    #[test]
    fn generic_phrasing_rejected() {
        let q = format!("{GOOD} People have different opinions.");
        assert_eq!(
            assess_question(&q),
            Verdict::Rejected(RejectReason::GenericPhrasing)
        );
        assert!(has_generic_phrasing(
            "Some people think taxes are high, and there are different perspectives."
        ));
    }

    #[test]
    fn one_sided_question_rejected() {
        let q = "Some experts argue the 2% tax is unfair. What is your position on the tax policy?";
        assert!(!has_specific_controversy(q));
        assert_eq!(
            assess_question(q),
            Verdict::Rejected(RejectReason::NotSpecific)
        );
    }

    #[test]
    fn short_question_rejected() {
        let q = "Critics say no, but others say yes. Policy?";
        assert!(has_specific_controversy(q));
        assert!(has_specific_details(q));
        assert_eq!(
            assess_question(q),
            Verdict::Rejected(RejectReason::NotSpecific)
        );
    }

    #[test]
    fn detail_patterns() {
        assert!(has_specific_details("a $500 fund"));
        assert!(has_specific_details("by 30%"));
        assert!(has_specific_details("3 million jobs"));
        assert!(has_specific_details("the new treaty"));
        assert!(has_specific_details("the government"));
        assert!(!has_specific_details("nothing concrete at all"));
    }
}
