use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

use super::models::ErrorResponse;
use crate::handlers::{HandlerError, ResolveError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Content-Type must be application/json")]
    InvalidContentType,

    #[error("request body is not valid JSON: {0}")]
    InvalidPayload(String),

    #[error("field \"file\" is required and must be a string")]
    MissingFileField,

    #[error("unsupported extension: {extension}")]
    UnsupportedExtension {
        extension: String,
        supported: Vec<String>,
    },

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("failed to resolve handler '{0}'")]
    HandlerResolution(String),

    #[error("handler '{0}' does not expose an analyze capability")]
    HandlerContract(String),

    #[error("extraction failed: {0}")]
    Extraction(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidContentType
            | ApiError::InvalidPayload(_)
            | ApiError::MissingFileField
            | ApiError::UnsupportedExtension { .. } => StatusCode::BAD_REQUEST,
            ApiError::FileNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::HandlerResolution(_)
            | ApiError::HandlerContract(_)
            | ApiError::Extraction(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let supported_extensions = match &self {
            ApiError::UnsupportedExtension { supported, .. } => Some(supported.clone()),
            _ => None,
        };
        let body = ErrorResponse {
            error: self.to_string(),
            supported_extensions,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ResolveError> for ApiError {
    fn from(value: ResolveError) -> Self {
        match value {
            ResolveError::NotFound(id) => ApiError::HandlerResolution(id),
            ResolveError::MissingAnalyze(id) => ApiError::HandlerContract(id),
        }
    }
}

impl From<HandlerError> for ApiError {
    fn from(value: HandlerError) -> Self {
        ApiError::Extraction(value.to_string())
    }
}
