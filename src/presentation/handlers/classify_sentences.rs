use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::api_error::ApiError;
use crate::domain::SentenceBatch;
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state, sentences), fields(sentences = sentences.len()))]
pub async fn classify_sentences_handler(
    State(state): State<AppState>,
    Json(sentences): Json<Vec<String>>,
) -> Response {
    let batch = SentenceBatch::new(sentences);

    match state.gateway_service.classify_sentences(&batch).await {
        Ok(labels) => (StatusCode::OK, Json(labels)).into_response(),
        Err(e) => ApiError::from(e).into_json_response(),
    }
}
