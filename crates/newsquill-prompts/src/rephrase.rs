use crate::Prompt;

pub const SYSTEM_INSTRUCTION: &str = "You are an English teacher who rewrites learner text at \
different proficiency levels while keeping its meaning. Always respond with valid JSON only.";

pub fn prompt(text: &str) -> Prompt {
    let mut out = String::new();
    out.push_str("Rewrite the following text at three English proficiency levels.\n\n");
    out.push_str(&format!("Text:\n{text}\n\n"));
    out.push_str(
        "Guidelines:\n\
         - beginner (A1-A2): short sentences and everyday words.\n\
         - intermediate (B1-B2): natural phrasing with linking words and some academic vocabulary.\n\
         - advanced (C1-C2): precise, sophisticated vocabulary and varied sentence structure.\n\
         - Keep the original meaning and point of view. Do not add new ideas.\n\n\
         Return your answer in this EXACT JSON format:\n\
         {\"beginner\": \"...\", \"intermediate\": \"...\", \"advanced\": \"...\"}",
    );
    Prompt {
        text: out,
        system: SYSTEM_INSTRUCTION,
    }
}
