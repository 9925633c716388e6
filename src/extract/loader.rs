use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{ProcessError, Result};

/// Reads a note from disk and unwraps it to plain text.
pub fn load_note(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(ProcessError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ProcessError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ProcessError::unexpected(format!("failed to read {}: {err}", path.display())),
    })?;

    unwrap_note(&content)
}

/// Trims the raw content and, if it is a `{"data": "..."}` envelope, returns
/// the enveloped note text. A leading UTF-8 byte order mark is dropped.
pub fn unwrap_note(content: &str) -> Result<String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content).trim();

    if content.starts_with('{') && content.contains("\"data\"") {
        debug!("Note looks like a JSON envelope");
        let envelope: Value =
            serde_json::from_str(content).map_err(|err| ProcessError::InvalidFormat {
                reason: err.to_string(),
            })?;

        return envelope
            .get("data")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| ProcessError::InvalidFormat {
                reason: "envelope has no string `data` property".to_string(),
            });
    }

    Ok(content.to_string())
}
