use std::path::Path;

use axum::{Json, extract::State, http::HeaderMap, response::IntoResponse};
use http_body_util::BodyExt;
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{
    models::{HealthResponse, ProcessRequest, ProcessResponse, SupportedExtensionsResponse},
    state::AppState,
};
use crate::api::error::ApiError;

/// Primary extraction endpoint (POST /process-file)
///
/// Runs the request through five sequential gates, short-circuiting on the
/// first failure:
/// 1. Content-Type must be application/json
/// 2. the payload must carry a string `file` field
/// 3. the path must exist on the accessible filesystem
/// 4. the lowercased suffix must be mapped in the extension registry
///    (failure reports the full supported-extension list)
/// 5. the mapped handler is resolved and invoked
///
/// The existence check and the handler invocation are not atomic with
/// respect to external filesystem changes; a file removed in between
/// surfaces as an extraction failure, never a retry.
pub async fn process_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: axum::body::Body,
) -> Result<ProcessResponse, ApiError> {
    let result = run_pipeline(&state, headers, body).await;

    match &result {
        Ok(_) => state.metrics.file_processed(),
        Err(_) => state.metrics.process_failed(),
    }

    result
}

async fn run_pipeline(
    state: &AppState,
    headers: HeaderMap,
    body: axum::body::Body,
) -> Result<ProcessResponse, ApiError> {
    let request_id = Uuid::new_v4();

    // Gate 1: structured payload only
    let content_type = headers
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::InvalidContentType)?;
    super::utils::parse_content_type(content_type)?;

    // Gate 2: the payload must name a file
    let body_bytes = read_body(body).await?;
    let payload: Value = serde_json::from_slice(&body_bytes)
        .map_err(|err| ApiError::InvalidPayload(err.to_string()))?;
    let request = ProcessRequest {
        file: payload
            .get("file")
            .and_then(Value::as_str)
            .ok_or(ApiError::MissingFileField)?
            .to_string(),
    };

    // Gate 3: the path must exist at check time
    if tokio::fs::metadata(&request.file).await.is_err() {
        warn!(%request_id, file = %request.file, "Requested file does not exist");
        return Err(ApiError::FileNotFound(request.file));
    }

    // Gate 4: the suffix must be mapped
    let extension = super::utils::file_extension(&request.file);
    let Some(handler_id) = state.registry.lookup(&extension) else {
        return Err(ApiError::UnsupportedExtension {
            extension,
            supported: state.registry.extensions().to_vec(),
        });
    };

    debug!(%request_id, %extension, handler = handler_id, "Dispatching extraction");

    // Gate 5: resolve and invoke
    let handler = state.resolver.resolve(handler_id)?;
    let content = handler.analyze(Path::new(&request.file)).await?;

    info!(%request_id, file = %request.file, handler = handler_id, "File processed");

    Ok(ProcessResponse { content })
}

/// Reads the request body (decompression is handled upstream by the
/// RequestDecompressionLayer middleware)
async fn read_body(body: axum::body::Body) -> Result<Vec<u8>, ApiError> {
    Ok(body
        .collect()
        .await
        .map_err(|err| ApiError::InvalidPayload(err.to_string()))?
        .to_bytes()
        .to_vec())
}

/// Liveness endpoint (GET /health)
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "API is up and serving requests".to_string(),
    })
}

/// Lists the configured extensions in declaration order
/// (GET /supported-extensions)
pub async fn supported_extensions(State(state): State<AppState>) -> impl IntoResponse {
    Json(SupportedExtensionsResponse {
        supported_extensions: state.registry.extensions().to_vec(),
    })
}
