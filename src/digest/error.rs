//! User-facing error taxonomy for the digest pipeline
//!
//! Every failure here is an expected, recoverable condition; the messages
//! are rendered verbatim in the UI, so they stay in plain product language.

use serde::Serialize;
use thiserror::Error;

/// Analysis failure. Never fatal; the caller re-submits if a retry is wanted.
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq)]
pub enum DigestError {
    /// Trimmed input was empty
    #[error("Please paste some text to analyze.")]
    EmptyInput,

    /// Trimmed input exceeded the configured character cap
    #[error("Text is too long for this demo. Please shorten it.")]
    TooLong,

    /// Any other failure surfaced by the wrapped operation. Not produced by
    /// the reference heuristics, but the guard handles it generically.
    #[error("{0}")]
    Unknown(String),
}

pub type DigestResult<T> = Result<T, DigestError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            DigestError::EmptyInput.to_string(),
            "Please paste some text to analyze."
        );
        assert_eq!(
            DigestError::TooLong.to_string(),
            "Text is too long for this demo. Please shorten it."
        );
        assert_eq!(
            DigestError::Unknown("worker crashed".to_string()).to_string(),
            "worker crashed"
        );
    }
}
