//! Error types for covergrab
//!
//! Errors come in two tiers:
//! - [`Error`] is fatal. It is propagated to the binary and ends the run
//!   (missing or unparsable input, unusable configuration, unwritable output directory).
//! - [`FetchError`] is scoped to a single identifier. The fetch loop logs it and
//!   moves on to the next identifier.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for covergrab operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for covergrab
#[derive(Debug, Error)]
pub enum Error {
    /// Input file does not exist
    #[error("input file not found: {}", path.display())]
    InputNotFound {
        /// Path that was expected to exist
        path: PathBuf,
    },

    /// Input file exists but does not have the expected shape
    #[error("malformed input {}: {reason}", path.display())]
    InputMalformed {
        /// Offending input file
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "output_dir")
        key: Option<String>,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Shorthand for a malformed-input error
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::InputMalformed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Map an I/O error raised while opening `path` to the matching input error
    ///
    /// `NotFound` becomes [`Error::InputNotFound`]; anything else stays an I/O error.
    pub fn from_input_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::InputNotFound { path: path.into() }
        } else {
            Error::Io(err)
        }
    }
}

/// Per-identifier failure raised while searching for or downloading a cover
///
/// None of these stop the fetch loop.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Search request failed or returned a non-success status
    #[error("search failed for {id}: {reason}")]
    SearchFailed {
        /// Identifier being searched
        id: String,
        /// Transport error or HTTP status
        reason: String,
    },

    /// The search page has no result container
    #[error("result list not found for {id}")]
    ResultNotFound {
        /// Identifier being searched
        id: String,
    },

    /// The result container has no usable image
    #[error("cover not found for {id}")]
    CoverNotFound {
        /// Identifier being searched
        id: String,
    },

    /// Fetching the image bytes or writing them to disk failed
    #[error("failed to download cover for {id}: {reason}")]
    DownloadFailed {
        /// Identifier whose cover was being saved
        id: String,
        /// Underlying error detail
        reason: String,
    },
}

impl FetchError {
    /// Identifier the failure belongs to
    pub fn id(&self) -> &str {
        match self {
            FetchError::SearchFailed { id, .. }
            | FetchError::ResultNotFound { id }
            | FetchError::CoverNotFound { id }
            | FetchError::DownloadFailed { id, .. } => id,
        }
    }

    /// Stable machine-readable code for the failure kind
    pub fn code(&self) -> &'static str {
        match self {
            FetchError::SearchFailed { .. } => "search_failed",
            FetchError::ResultNotFound { .. } => "result_not_found",
            FetchError::CoverNotFound { .. } => "cover_not_found",
            FetchError::DownloadFailed { .. } => "download_failed",
        }
    }

    /// Attach an identifier to a locator failure that was raised without one
    pub(crate) fn with_id(self, id: &str) -> Self {
        match self {
            FetchError::SearchFailed { reason, .. } => FetchError::SearchFailed {
                id: id.to_string(),
                reason,
            },
            FetchError::ResultNotFound { .. } => FetchError::ResultNotFound { id: id.to_string() },
            FetchError::CoverNotFound { .. } => FetchError::CoverNotFound { id: id.to_string() },
            FetchError::DownloadFailed { reason, .. } => FetchError::DownloadFailed {
                id: id.to_string(),
                reason,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_input_io_maps_not_found_to_input_not_found() {
        let err = Error::from_input_io(
            "ID.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        match err {
            Error::InputNotFound { path } => assert_eq!(path, PathBuf::from("ID.json")),
            other => panic!("expected InputNotFound, got {other:?}"),
        }
    }

    #[test]
    fn from_input_io_keeps_other_kinds_as_io() {
        let err = Error::from_input_io(
            "ID.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn fetch_error_messages_reference_the_identifier() {
        let cases = [
            FetchError::SearchFailed {
                id: "BV1xx".into(),
                reason: "HTTP 412".into(),
            },
            FetchError::ResultNotFound { id: "BV1xx".into() },
            FetchError::CoverNotFound { id: "BV1xx".into() },
            FetchError::DownloadFailed {
                id: "BV1xx".into(),
                reason: "connection reset".into(),
            },
        ];

        for err in cases {
            assert_eq!(err.id(), "BV1xx");
            assert!(
                err.to_string().contains("BV1xx"),
                "{} should mention the identifier",
                err.code()
            );
        }
    }

    #[test]
    fn with_id_replaces_identifier_and_keeps_kind() {
        let err = FetchError::CoverNotFound { id: String::new() }.with_id("BV9");
        assert_eq!(err.code(), "cover_not_found");
        assert_eq!(err.id(), "BV9");
    }
}
