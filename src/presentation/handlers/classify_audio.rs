use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::api_error::ApiError;
use super::upload::read_audio_upload;
use crate::domain::ClassifiedTranscript;
use crate::presentation::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyAudioResponse {
    pub transcribed_text: String,
    pub classified: Vec<ClassifiedSentenceResponse>,
}

#[derive(Debug, Serialize)]
pub struct ClassifiedSentenceResponse {
    pub sentence: String,
    pub label: String,
}

impl From<ClassifiedTranscript> for ClassifyAudioResponse {
    fn from(result: ClassifiedTranscript) -> Self {
        Self {
            transcribed_text: result.transcript.into_inner(),
            classified: result
                .classified
                .into_iter()
                .map(|c| ClassifiedSentenceResponse {
                    sentence: c.sentence,
                    label: c.label,
                })
                .collect(),
        }
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn classify_audio_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let upload = match read_audio_upload(multipart).await {
        Ok(upload) => upload,
        Err(e) => return e.into_json_response(),
    };

    match state.gateway_service.classify_upload(upload).await {
        Ok(result) => {
            tracing::info!(sentences = result.classified.len(), "Audio classified");
            (StatusCode::OK, Json(ClassifyAudioResponse::from(result))).into_response()
        }
        Err(e) => ApiError::from(e).into_json_response(),
    }
}
