use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Handler errors
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("failed to read {}: {}", path.display(), source)]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("malformed content in {}: {}", path.display(), detail)]
    Malformed {
        path: std::path::PathBuf,
        detail: String,
    },
}

/// Content extraction capability bound to one handler identifier.
///
/// Implementations parse one family of file formats and return an arbitrary
/// JSON-serializable value (string, mapping, or sequence). The trait is async
/// to allow file I/O. Handlers hold no per-request state; one instance is
/// shared freely across concurrent requests.
#[async_trait]
pub trait ContentHandler: Send + Sync {
    /// Extract structured content from the file at `path`.
    async fn analyze(&self, path: &Path) -> Result<Value, HandlerError>;
}
