//! Debate-question prompt.
//!
//! The model is pushed hard toward naming two opposing camps because the
//! reply is screened afterwards and anything vaguer is thrown away.

use newsquill_core::Level;

use crate::context::ArticleContext;
use crate::Prompt;

pub const SYSTEM_INSTRUCTION: &str = r#"You are an English language teacher creating debate-based writing prompts.

ABSOLUTE REQUIREMENTS:
1. You MUST identify a SPECIFIC CONTROVERSY or DEBATE in the article
2. You MUST present TWO OPPOSING PERSPECTIVES from the article
3. You MUST ask students to TAKE A POSITION on the debate
4. You MUST reference SPECIFIC details (numbers, policies, groups, events) from the article
5. You MUST NOT start with "This article discusses..." or "The article mentions..." - these are FORBIDDEN formats

FORBIDDEN QUESTION STARTS (NEVER USE):
- "This article discusses..."
- "The article mentions..."
- "What do you think about this article?"
- "What is your opinion on [topic]?"
- "Do you agree or disagree?"

REQUIRED QUESTION STRUCTURE:
Start with the CONTROVERSY itself, not the article:
- "Some experts argue [X], while others claim [Y]..."
- "[Policy/Event] has divided opinion. Supporters say [X], but critics argue [Y]..."
- "There is a debate between [Group A] who want [X] and [Group B] who prefer [Y]..."

Your question MUST:
1. Present TWO opposing sides of a controversy
2. Reference specific details from the article
3. Ask students to take a position
4. Be unique to this article's specific debate

Always respond with ONLY the question text. Start with the controversy, not with "This article...""#;

const BEGINNER: &str = r#"BEGINNER LEVEL (A1-A2):
- Use simple, everyday vocabulary (e.g., "think", "like", "important", "good", "bad")
- Keep the question short and easy to understand (10-15 words)
- Use simple sentence structures (present tense, basic questions)
- Ask about personal opinions or simple facts
- Encourage responses of 50-100 words using simple English
- Example style: "What do you think about this news? Do you like it? Why?""#;

const INTERMEDIATE: &str = r#"INTERMEDIATE LEVEL (B1-B2):
- Use clear language with some academic vocabulary (e.g., "opinion", "analysis", "impact", "perspective")
- Create a question with medium complexity (15-25 words)
- Use varied sentence structures (present perfect, conditionals, relative clauses)
- Ask for opinions with reasons and examples
- Encourage responses of 100-150 words with detailed explanations
- Example style: "What is your opinion on this article? Please provide your analysis and explain your reasoning.""#;

const ADVANCED: &str = r#"ADVANCED LEVEL (C1-C2):
- Use sophisticated, academic vocabulary (e.g., "analyze", "critically evaluate", "implications", "nuanced perspective")
- Create a complex, thought-provoking question (20-30 words)
- Use advanced sentence structures (subjunctive, complex conditionals, nominalizations)
- Ask for critical analysis, implications, and sophisticated viewpoints
- Encourage responses of 150-200 words with comprehensive analysis
- Example style: "Critically analyze this article and discuss the broader implications. Provide a nuanced perspective on the topic.""#;

const IDENTIFY_STEP: &str = r#"=== STEP 1: IDENTIFY THE CONTROVERSY ===
You MUST first identify what people are DISAGREEING about in this article. Look for:
- Opposing viewpoints (e.g., "some say X, but others argue Y")
- Conflicts between groups (e.g., "supporters vs critics", "experts disagree")
- Debates about policies or decisions (e.g., "pros and cons", "benefits vs drawbacks")
- Ethical dilemmas (e.g., "right vs wrong", "fair vs unfair")
- Trade-offs (e.g., "economic growth vs environmental protection")
- Controversial claims or arguments

If you cannot find a clear controversy, identify what COULD be debated:
- Potential negative consequences vs positive outcomes
- Different stakeholder perspectives (government, citizens, businesses, etc.)
- Short-term vs long-term implications
- Different solutions to the problem mentioned"#;

const CREATE_STEP: &str = r#"=== STEP 2: CREATE A DEBATE QUESTION ===
Your question MUST:
1. **Present the TWO SIDES of the controversy** (e.g., "Some argue X, while others believe Y")
2. **Reference SPECIFIC details from the article** (numbers, policies, events, names)
3. **Ask students to TAKE A POSITION** on the debate
4. **NOT start with "This article discusses..." or "The article mentions..."** - these are too generic!
5. **Start directly with the CONTROVERSY or DEBATE** (e.g., "Some experts argue... while others claim...")

=== FORBIDDEN QUESTION FORMATS (DO NOT USE) ===
- "This article discusses [topic]. What do you think?"
- "The article mentions [topic]. What is your opinion?"
- "What do you think about this article?"
- "What is your opinion on [topic]?"
- "Do you agree or disagree with the article?"

These formats are TOO GENERIC and do not engage with specific controversies!

=== REQUIRED QUESTION FORMATS ===
- "Some experts argue that [specific claim from article], while others believe [opposing claim]. What is your position on this debate?"
- "[Specific policy/event from article] has divided opinion. Supporters say [specific reason], but critics argue [specific reason]. Which perspective do you support and why?"
- "The article presents a conflict between [group A] who want [X] and [group B] who prefer [Y]. What are the potential benefits and drawbacks of each approach? Which do you think is better?"
- "[Specific number/statistic from article] suggests [one perspective], but [another group] argues [opposing perspective]. What are your thoughts on this controversy?""#;

const EXAMPLES: &str = r#"=== EXAMPLES OF EXCELLENT DEBATE QUESTIONS ===

Example 1 - Climate Article:
"Some experts argue that reducing emissions by 50% by 2030 will cause economic recession, while others claim it will create millions of green jobs. The article mentions that $500 billion will be invested. Do you think this investment will help or hurt the economy? Which side of this debate do you support?"

Example 2 - Technology Article:
"The article reports that AI is replacing healthcare workers. Hospital administrators support this for cost savings, but medical professionals worry about patient care quality. What are the potential benefits and risks of replacing human workers with AI? Should hospitals prioritize efficiency or human connection?"

Example 3 - Political Article:
"A new immigration policy has divided the country. Supporters claim it will add $50 billion to the economy, while critics argue it will increase unemployment by 2%. The article mentions both perspectives. Which economic argument do you find more convincing and why?"

Example 4 - Education Article:
"Some schools are banning smartphones, citing a 30% improvement in test scores. However, parents argue this prevents emergency communication. The article presents both sides. What is your position on this debate? Should schools prioritize academic performance or safety?""#;

const CLOSING: &str = r#"=== CRITICAL INSTRUCTIONS ===
1. **DO NOT start with "This article discusses..."** - Start with the CONTROVERSY itself
2. **MUST present TWO opposing perspectives** from the article
3. **MUST reference SPECIFIC details** (numbers, policies, groups, events)
4. **MUST ask students to TAKE A POSITION** on the debate
5. **MUST be unique to this article's specific controversy**
6. Return ONLY the question text, no explanation

=== YOUR OUTPUT ===
Create ONE question that follows the required format above. Start directly with the controversy, not with "This article..." or "The article discusses...""#;

/// Level-specific style guidance. A missing level gets the advanced block.
pub fn level_instructions(level: Option<Level>) -> &'static str {
    match level {
        Some(Level::Beginner) => BEGINNER,
        Some(Level::Intermediate) => INTERMEDIATE,
        Some(Level::Advanced) | None => ADVANCED,
    }
}

/// Assemble the full debate-question prompt.
pub fn prompt(ctx: &ArticleContext, level: Option<Level>) -> Prompt {
    let mut text = String::new();
    text.push_str(
        "You are an English language teacher. Your CRITICAL task is to create a debate \
         question based on the controversy identified below.\n\n",
    );
    text.push_str(level_instructions(level));
    text.push_str("\n\n");
    ctx.append_context(&mut text);
    text.push_str("\n\n");
    for section in [IDENTIFY_STEP, CREATE_STEP, EXAMPLES, CLOSING] {
        text.push_str(section);
        text.push_str("\n\n");
    }
    Prompt {
        text: text.trim_end().to_string(),
        system: SYSTEM_INSTRUCTION,
    }
}
