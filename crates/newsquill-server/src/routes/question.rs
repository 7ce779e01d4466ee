use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use newsquill_core::api::{GenerateQuestionRequest, QuestionResponse};
use newsquill_core::article::{debatable_issue, fallback_question};
use newsquill_core::controversy::Controversy;
use newsquill_core::screen::{assess_question, clean_question, Verdict};
use newsquill_core::{Level, NewsquillError};
use newsquill_prompts::{controversy, question, ArticleContext};
use newsquill_service::TextGenerator;
use tracing::{debug, error, info, warn};

use super::{parse_body, to_error, ApiError, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/generate-question", post(generate_question))
}

async fn generate_question(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<QuestionResponse>, ApiError> {
    let input: GenerateQuestionRequest = parse_body(&body).map_err(to_error)?;
    let (Some(title), Some(content)) = (input.title(), input.content()) else {
        return Err(to_error(NewsquillError::InvalidInput(
            "Title and content are required".to_string(),
        )));
    };

    let question = compose_question(state.generator.as_ref(), title, content, input.level()).await;
    Ok(Json(QuestionResponse { question }))
}

/// Best-effort first pass: ask the model for the article's central
/// disagreement. Any failure just means the question prompt goes without it.
async fn extract_controversy(
    generator: &dyn TextGenerator,
    title: &str,
    content: &str,
) -> Option<Controversy> {
    let prompt = controversy::prompt(title, content);
    match generator.generate(&prompt.text, prompt.system).await {
        Ok(reply) => Controversy::from_reply(&reply),
        Err(e) => {
            warn!("controversy extraction failed, using article content directly: {e}");
            None
        }
    }
}

/// Generate a debate question, falling back to a template when the call
/// fails or the result is screened out. Always returns a usable question.
pub(crate) async fn compose_question(
    generator: &dyn TextGenerator,
    title: &str,
    content: &str,
    level: Option<Level>,
) -> String {
    let controversy = extract_controversy(generator, title, content).await;
    debug!("controversy extracted: {}", controversy.is_some());

    let ctx = ArticleContext::new(title, content, controversy);
    let prompt = question::prompt(&ctx, level);

    match generator.generate(&prompt.text, prompt.system).await {
        Ok(raw) => {
            let cleaned = clean_question(&raw);
            match assess_question(&cleaned) {
                Verdict::Accepted => return cleaned,
                Verdict::Rejected(reason) => {
                    warn!("generated question rejected ({reason}), using fallback: {cleaned:?}")
                }
            }
        }
        Err(e) => error!("question generation failed, using fallback: {e}"),
    }

    let issue = debatable_issue(title, content);
    info!(
        "fallback question for topic {:?} ({})",
        issue.topic, issue.issue
    );
    fallback_question(level, &issue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{post_json, test_router};
    use axum::http::StatusCode;
    use newsquill_service::{MockGenerator, TimeoutGenerator};
    use serde_json::json;
    use std::time::Duration;

    const CONTROVERSY_REPLY: &str = r#"{
        "controversy": "Whether to ban smartphones in schools",
        "side1": {"group": "teachers", "argument": "Scores rose 30%"},
        "side2": {"group": "parents", "argument": "Emergencies need phones"},
        "specificDetails": ["30% improvement"]
    }"#;

    const GOOD_QUESTION: &str = "Some experts argue that banning smartphones raised test \
        scores by 30%, while others worry that parents cannot reach children in emergencies. \
        Which side do you support and why?";

    fn article() -> serde_json::Value {
        json!({
            "title": "Schools debate smartphone bans",
            "content": "Several districts banned phones. Critics say families lose contact.",
            "level": "intermediate"
        })
    }

    #[tokio::test]
    async fn missing_title_is_400() {
        let app = test_router(MockGenerator::reply(GOOD_QUESTION));
        let (status, body) =
            post_json(app, "/api/generate-question", json!({ "content": "x" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Title and content are required");
    }

    #[tokio::test]
    async fn missing_content_is_400() {
        let app = test_router(MockGenerator::reply(GOOD_QUESTION));
        let (status, _) =
            post_json(app, "/api/generate-question", json!({ "title": "x", "content": "" }))
                .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn accepted_question_is_returned_cleaned() {
        let generator = MockGenerator::scripted(vec![
            Ok(CONTROVERSY_REPLY),
            Ok("Question: Some experts argue that banning smartphones raised test scores by 30%, \
                while others worry that parents cannot reach children in emergencies. \
                Which side do you support and why?"),
        ]);
        let app = test_router(generator);
        let (status, body) = post_json(app, "/api/generate-question", article()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["question"]
            .as_str()
            .unwrap()
            .starts_with("Some experts argue"));
    }

    #[tokio::test]
    async fn controversy_feeds_question_prompt() {
        let generator = MockGenerator::scripted(vec![Ok(CONTROVERSY_REPLY), Ok(GOOD_QUESTION)]);
        let question = compose_question(
            &generator,
            "Schools debate smartphone bans",
            "Body",
            Some(Level::Beginner),
        )
        .await;
        assert_eq!(question, GOOD_QUESTION);

        let calls = generator.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].1, controversy::SYSTEM_INSTRUCTION);
        assert!(calls[1].0.contains("Side 1 - teachers:"));
        assert!(calls[1].0.contains("BEGINNER LEVEL"));
        assert_eq!(calls[1].1, question::SYSTEM_INSTRUCTION);
    }

    #[tokio::test]
    async fn failed_extraction_still_asks_for_question() {
        let generator = MockGenerator::scripted(vec![Err("down"), Ok(GOOD_QUESTION)]);
        let question = compose_question(&generator, "Title here", "Body", None).await;
        assert_eq!(question, GOOD_QUESTION);
        assert!(generator.calls()[1].0.contains("=== ARTICLE INFORMATION ==="));
    }

    #[tokio::test]
    async fn failing_generator_uses_fallback() {
        let app = test_router(MockGenerator::failing("connection refused"));
        let (status, body) = post_json(app, "/api/generate-question", article()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["question"],
            "The article discusses schools, and there are opposing viewpoints on this topic. \
             What is your position on this debate? Please provide your analysis and explain your reasoning."
        );
    }

    #[tokio::test]
    async fn forbidden_start_is_replaced_by_fallback() {
        let generator = MockGenerator::scripted(vec![
            Ok(CONTROVERSY_REPLY),
            Ok("This article discusses how some teachers argue phones hurt scores by 30%, \
                while others worry about emergencies. What is your position?"),
        ]);
        let question =
            compose_question(&generator, "Phones banned", "Body", Some(Level::Advanced)).await;
        assert!(question.starts_with("The article analyzes phones, presenting"));
    }

    #[tokio::test]
    async fn generic_question_is_replaced_by_fallback() {
        let generator = MockGenerator::scripted(vec![
            Err("skip"),
            Ok("What do you think? People have different opinions about phones."),
        ]);
        let question =
            compose_question(&generator, "Phones banned", "Body", Some(Level::Beginner)).await;
        assert!(question.starts_with("The article talks about phones."));
    }

    #[tokio::test]
    async fn unknown_level_falls_back_to_intermediate_template() {
        let generator = MockGenerator::failing("down");
        let question = compose_question(&generator, "Tariffs rise", "Body", None).await;
        assert!(question.starts_with("The article discusses tariffs,"));
        // prompt instructions for an unknown level use the advanced block
        assert!(generator.calls()[1].0.contains("ADVANCED LEVEL"));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_generator_times_out_to_fallback() {
        let slow = MockGenerator::reply(GOOD_QUESTION).with_delay(Duration::from_secs(120));
        let bounded = TimeoutGenerator::new(slow, Duration::from_secs(30));
        let question =
            compose_question(&bounded, "Tariffs rise", "Body", Some(Level::Beginner)).await;
        assert!(question.starts_with("The article talks about tariffs."));
    }
}
