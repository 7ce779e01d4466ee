use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use newsquill_core::api::{FeedbackResponse, WritingFeedbackRequest};
use newsquill_core::feedback::{clean_feedback, fallback_feedback};
use newsquill_core::NewsquillError;
use newsquill_prompts::FeedbackContext;
use newsquill_service::TextGenerator;
use tracing::{debug, error, warn};

use super::{parse_body, to_error, ApiError, AppState};

pub const TEXT_REQUIRED: &str = "Text is required and must be a non-empty string";

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/writing-feedback", post(writing_feedback))
}

async fn writing_feedback(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let input: WritingFeedbackRequest = parse_body(&body).map_err(to_error)?;
    let Some(text) = input.text() else {
        return Err(to_error(NewsquillError::InvalidInput(TEXT_REQUIRED.to_string())));
    };

    if let Some(ref id) = input.article_id {
        debug!("writing feedback for article {id}");
    }

    let ctx = FeedbackContext {
        text: text.to_string(),
        article_title: input.article_title.clone(),
        article_content: input.article_content.clone(),
        question: input.question.clone(),
        level: input.level(),
    };
    let prompt = ctx.prompt();

    match state.generator.generate(&prompt.text, prompt.system).await {
        Ok(raw) => {
            let feedback = clean_feedback(&raw);
            if !feedback.is_empty() {
                return Ok(Json(FeedbackResponse {
                    feedback,
                    fallback: false,
                }));
            }
            warn!("feedback reply was empty after cleanup, using fallback");
        }
        Err(e) => error!("feedback generation failed, using fallback: {e}"),
    }

    Ok(Json(FeedbackResponse {
        feedback: fallback_feedback(ctx.level, text),
        fallback: true,
    }))
}
