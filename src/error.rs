//! Error taxonomy for a single note run.
//!
//! Every failure is terminal for the note being processed. Each variant maps to
//! its own process exit code so callers can tell the kinds apart.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failures that can occur while loading, extracting or sending a note.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("The file was not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid JSON format: {reason}")]
    InvalidFormat { reason: String },

    #[error("HTTP request failed: {reason}")]
    TransportFailure { reason: String },

    #[error("API request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("An unexpected error occurred: {reason}")]
    Unexpected { reason: String },
}

impl ProcessError {
    /// Process exit code reported for this failure. Zero is reserved for success.
    pub fn exit_code(&self) -> u8 {
        match self {
            ProcessError::NotFound { .. } => 1,
            ProcessError::InvalidFormat { .. } => 2,
            ProcessError::TransportFailure { .. } => 3,
            ProcessError::Timeout { .. } => 4,
            ProcessError::Unexpected { .. } => 5,
        }
    }

    pub fn unexpected(reason: impl Into<String>) -> Self {
        ProcessError::Unexpected {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProcessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_kind() {
        let errors = [
            ProcessError::NotFound {
                path: PathBuf::from("missing.txt"),
            },
            ProcessError::InvalidFormat {
                reason: "eof".into(),
            },
            ProcessError::TransportFailure {
                reason: "HTTP 500".into(),
            },
            ProcessError::Timeout {
                timeout: Duration::from_secs(30),
            },
            ProcessError::unexpected("boom"),
        ];

        let codes: Vec<u8> = errors.iter().map(ProcessError::exit_code).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn timeout_message_keeps_sub_second_precision() {
        let err = ProcessError::Timeout {
            timeout: Duration::from_millis(500),
        };
        assert_eq!(err.to_string(), "API request timed out after 500ms");
    }

    #[test]
    fn not_found_message_names_the_path() {
        let err = ProcessError::NotFound {
            path: PathBuf::from("notes/physician_note1.txt"),
        };
        assert_eq!(
            err.to_string(),
            "The file was not found: notes/physician_note1.txt"
        );
    }
}
