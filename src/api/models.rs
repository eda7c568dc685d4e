//! Wire models for the Parsebox endpoints.
//!
//! - `POST /process-file` accepts a [`ProcessRequest`] and returns a
//!   [`ProcessResponse`] on success
//! - `GET /health` returns a [`HealthResponse`]
//! - `GET /supported-extensions` returns a [`SupportedExtensionsResponse`]
//!   with extensions in configuration declaration order
//! - every failure body is an [`ErrorResponse`]

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Incoming payload for POST /process-file. Ephemeral; lives for one call.
#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    pub file: String,
}

/// Successful extraction result, wrapped under a single `content` key.
///
/// Serialized by hand instead of through `Json` so the body is pretty-printed
/// and extended characters stay literal UTF-8 bytes; extracted text routinely
/// carries accented characters that downstream consumers expect verbatim.
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub content: Value,
}

impl IntoResponse for ProcessResponse {
    fn into_response(self) -> Response {
        match serde_json::to_string_pretty(&self) {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(err) => super::error::ApiError::Extraction(err.to_string()).into_response(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_extensions: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SupportedExtensionsResponse {
    pub supported_extensions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_process_response_preserves_non_ascii() {
        let response = ProcessResponse {
            content: json!("café,tea"),
        };
        let body = serde_json::to_string_pretty(&response).unwrap();

        assert!(body.contains("café,tea"));
        assert!(!body.contains("\\u00e9"));
    }

    #[test]
    fn test_error_response_omits_absent_extension_list() {
        let body = serde_json::to_string(&ErrorResponse {
            error: "boom".to_string(),
            supported_extensions: None,
        })
        .unwrap();

        assert_eq!(body, r#"{"error":"boom"}"#);
    }
}
