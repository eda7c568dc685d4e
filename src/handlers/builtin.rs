//! Built-in content handlers.
//!
//! Identifiers in the module table here are what configuration mappings
//! refer to. The parsing inside each handler is deliberately minimal; the
//! interesting part of the system is the dispatch around them.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::resolver::HandlerModule;
use super::traits::{ContentHandler, HandlerError};

/// The static module table consulted by [`super::HandlerResolver`].
pub fn modules() -> Vec<HandlerModule> {
    vec![
        HandlerModule {
            name: "text",
            analyzer: Some(|| Arc::new(TextHandler)),
        },
        HandlerModule {
            name: "json",
            analyzer: Some(|| Arc::new(JsonHandler)),
        },
        HandlerModule {
            name: "csv",
            analyzer: Some(|| Arc::new(CsvHandler)),
        },
    ]
}

async fn read_bytes(path: &Path) -> Result<Vec<u8>, HandlerError> {
    tokio::fs::read(path).await.map_err(|source| HandlerError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Plain text extraction. Reads the file as UTF-8 (lossily) and trims the
/// trailing line break.
pub struct TextHandler;

#[async_trait]
impl ContentHandler for TextHandler {
    async fn analyze(&self, path: &Path) -> Result<Value, HandlerError> {
        let bytes = read_bytes(path).await?;
        let text = String::from_utf8_lossy(&bytes);
        let text = text.trim_end_matches('\n').trim_end_matches('\r');
        Ok(Value::String(text.to_string()))
    }
}

/// JSON extraction: the parsed document itself is the content.
pub struct JsonHandler;

#[async_trait]
impl ContentHandler for JsonHandler {
    async fn analyze(&self, path: &Path) -> Result<Value, HandlerError> {
        let bytes = read_bytes(path).await?;
        serde_json::from_slice(&bytes).map_err(|err| HandlerError::Malformed {
            path: path.to_path_buf(),
            detail: err.to_string(),
        })
    }
}

/// Comma-separated values as an array of row arrays. Fields are split on
/// bare commas; quoting is not interpreted.
pub struct CsvHandler;

#[async_trait]
impl ContentHandler for CsvHandler {
    async fn analyze(&self, path: &Path) -> Result<Value, HandlerError> {
        let bytes = read_bytes(path).await?;
        let text = String::from_utf8_lossy(&bytes);

        let rows: Vec<Value> = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                Value::Array(
                    line.split(',')
                        .map(|field| Value::String(field.trim().to_string()))
                        .collect(),
                )
            })
            .collect();

        Ok(Value::Array(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_text_handler_trims_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "note.txt", "hello world\n");

        let content = TextHandler.analyze(&path).await.unwrap();
        assert_eq!(content, json!("hello world"));
    }

    #[tokio::test]
    async fn test_text_handler_preserves_accents() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "menu.txt", "café, thé\n");

        let content = TextHandler.analyze(&path).await.unwrap();
        assert_eq!(content, json!("café, thé"));
    }

    #[tokio::test]
    async fn test_json_handler_returns_document() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "doc.json", r#"{"name": "café", "n": 2}"#);

        let content = JsonHandler.analyze(&path).await.unwrap();
        assert_eq!(content, json!({"name": "café", "n": 2}));
    }

    #[tokio::test]
    async fn test_json_handler_rejects_malformed_document() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "doc.json", "{not json");

        let result = JsonHandler.analyze(&path).await;
        assert!(matches!(result, Err(HandlerError::Malformed { .. })));
    }

    #[tokio::test]
    async fn test_csv_handler_splits_rows_and_fields() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "data.csv", "a,b\n1, 2\n");

        let content = CsvHandler.analyze(&path).await.unwrap();
        assert_eq!(content, json!([["a", "b"], ["1", "2"]]));
    }

    #[tokio::test]
    async fn test_read_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.txt");

        let result = TextHandler.analyze(&path).await;
        assert!(matches!(result, Err(HandlerError::Read { .. })));
    }
}
