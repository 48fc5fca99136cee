use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::GatewayError;

pub const FILE_EMPTY_MESSAGE: &str = "File is empty";
pub const FILE_TOO_LARGE_MESSAGE: &str = "File is too large";
pub const BACKEND_ERROR_MESSAGE: &str = "Backend error has occurred";
pub const UPSTREAM_ERROR_MESSAGE: &str = "Upstream service error has occurred";

/// Client-facing failure of a gateway request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    FileEmpty,
    FileTooLarge,
    Backend,
    Upstream,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::FileEmpty => StatusCode::BAD_REQUEST,
            ApiError::FileTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Backend => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::FileEmpty => FILE_EMPTY_MESSAGE,
            ApiError::FileTooLarge => FILE_TOO_LARGE_MESSAGE,
            ApiError::Backend => BACKEND_ERROR_MESSAGE,
            ApiError::Upstream => UPSTREAM_ERROR_MESSAGE,
        }
    }

    pub fn into_json_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.message().to_string(),
            }),
        )
            .into_response()
    }
}

/// Plain-text body, the format of the original `/api/classifyText` contract.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.message()).into_response()
    }
}

impl From<GatewayError> for ApiError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::Staging(e) => {
                tracing::error!(error = %e, "Failed to stage upload");
                ApiError::Backend
            }
            GatewayError::Upstream(e) => {
                tracing::error!(error = %e, "Upstream relay failed");
                ApiError::Upstream
            }
        }
    }
}
