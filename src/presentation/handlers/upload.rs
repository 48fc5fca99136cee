use axum::extract::Multipart;
use axum::extract::multipart::MultipartRejection;
use axum::http::StatusCode;

use super::api_error::ApiError;
use crate::domain::AudioUpload;

pub const FILE_FIELD: &str = "file";

/// Pulls the `file` field out of a multipart body. Other fields are skipped.
/// A request that is not `multipart/form-data` carries no file at all.
pub async fn read_audio_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<AudioUpload, ApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Upload request is not multipart");
        ApiError::FileEmpty
    })?;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                tracing::warn!("Upload request without a file field");
                return Err(ApiError::FileEmpty);
            }
            Err(e) => return Err(read_failure(e)),
        };

        if field.name() != Some(FILE_FIELD) {
            tracing::debug!(field = ?field.name(), "Skipping multipart field");
            continue;
        }

        let file_name = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);

        let data = field.bytes().await.map_err(read_failure)?;

        tracing::debug!(
            file_name = ?file_name,
            content_type = ?content_type,
            bytes = data.len(),
            "File data received"
        );

        return AudioUpload::new(data, file_name, content_type).map_err(|_| {
            tracing::warn!("Upload request with an empty file");
            ApiError::FileEmpty
        });
    }
}

fn read_failure(error: axum::extract::multipart::MultipartError) -> ApiError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!(error = %error, "Upload exceeds body limit");
        return ApiError::FileTooLarge;
    }
    tracing::error!(error = %error, "Failed to read multipart upload");
    ApiError::Backend
}
