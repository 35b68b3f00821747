//! Panel error types and grepable error codes.
//!
//! DESIGN
//! ======
//! Exactly two kinds of failure are visible to a user before a job starts:
//! a missing required field and a wrong upload type. Both are rejected
//! synchronously at the point of entry and never leave the owning panel.
//! Collaborator failures (network, timeout, rate limit) arrive later through
//! the job and are wrapped as `PanelError::Service`.

use crate::notice::Notice;
use crate::services::ServiceError;

// =============================================================================
// ERROR CODES
// =============================================================================

/// Grepable error code and retryable flag for structured error notices.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

// =============================================================================
// PANEL ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// A required form field was empty or whitespace.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str, title: &'static str, description: &'static str },

    /// An upload did not carry the accepted MIME type.
    #[error("invalid file type: {mime}")]
    InvalidFileType { mime: String },

    #[error("test not found: {0}")]
    UnknownTest(String),

    #[error("question not found: {0}")]
    UnknownQuestion(String),

    #[error("no test open in the editor")]
    NoTestOpen,

    #[error("service error: {0}")]
    Service(#[from] ServiceError),
}

impl ErrorCode for PanelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "E_MISSING_FIELD",
            Self::InvalidFileType { .. } => "E_INVALID_FILE_TYPE",
            Self::UnknownTest(_) => "E_UNKNOWN_TEST",
            Self::UnknownQuestion(_) => "E_UNKNOWN_QUESTION",
            Self::NoTestOpen => "E_NO_TEST_OPEN",
            Self::Service(e) => e.error_code(),
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Service(e) if e.retryable())
    }
}

impl PanelError {
    /// Build a missing-field rejection with the notice copy shown to the user.
    #[must_use]
    pub fn missing(field: &'static str, title: &'static str, description: &'static str) -> Self {
        Self::MissingField { field, title, description }
    }

    /// The transient notice this error raises in its panel.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::MissingField { title, description, .. } => Notice::destructive(*title, *description),
            Self::InvalidFileType { .. } => Notice::destructive("Invalid File Type", "Please upload a PDF file."),
            Self::UnknownTest(_) => Notice::destructive("Test Not Found", "Select a test from your library."),
            Self::UnknownQuestion(_) => Notice::destructive("Question Not Found", "The question no longer exists."),
            Self::NoTestOpen => Notice::destructive("No Test Selected", "Create a new test or select one from your library."),
            Self::Service(_) => Notice::from_error("Request Failed", self),
        }
    }
}

/// Reject with `err` when `value` is empty after trimming; return the trimmed value otherwise.
///
/// # Errors
///
/// Returns the supplied `PanelError` when the value is blank.
pub fn require(value: &str, err: impl FnOnce() -> PanelError) -> Result<&str, PanelError> {
    let trimmed = value.trim();
    if trimmed.is_empty() { Err(err()) } else { Ok(trimmed) }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
