use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::api_error::ApiError;
use super::upload::read_audio_upload;
use crate::presentation::state::AppState;

/// Transcribes the uploaded audio and answers with the configured prefix
/// followed by the transcript, verbatim.
#[tracing::instrument(skip(state, multipart))]
pub async fn classify_text_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let upload = match read_audio_upload(multipart).await {
        Ok(upload) => upload,
        Err(e) => return e.into_response(),
    };

    match state.gateway_service.transcribe_upload(upload).await {
        Ok(transcript) => (
            StatusCode::ACCEPTED,
            format!("{}{}", state.settings.gateway.response_prefix, transcript),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
