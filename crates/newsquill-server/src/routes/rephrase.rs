use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use newsquill_core::api::{RephraseRequest, RephraseResponse};
use newsquill_core::article::{truncate_chars, REPHRASE_CHAR_LIMIT};
use newsquill_core::NewsquillError;
use newsquill_prompts::rephrase;
use newsquill_service::TextGenerator;
use tracing::{error, warn};

use super::feedback::TEXT_REQUIRED;
use super::{parse_body, to_error, ApiError, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/rephrase", post(rephrase_text))
}

async fn rephrase_text(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RephraseResponse>, ApiError> {
    let input: RephraseRequest = parse_body(&body).map_err(to_error)?;
    let Some(text) = input.text() else {
        return Err(to_error(NewsquillError::InvalidInput(TEXT_REQUIRED.to_string())));
    };
    let text = truncate_chars(text, REPHRASE_CHAR_LIMIT);

    let prompt = rephrase::prompt(text);
    match state.generator.generate(&prompt.text, prompt.system).await {
        Ok(reply) => match RephraseResponse::from_reply(&reply) {
            Some(rephrased) => return Ok(Json(rephrased)),
            None => warn!("rephrase reply was not usable, echoing input"),
        },
        Err(e) => error!("rephrase failed, echoing input: {e}"),
    }

    Ok(Json(RephraseResponse::fallback(text)))
}
