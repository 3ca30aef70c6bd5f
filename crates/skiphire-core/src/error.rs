//! Catalog fetch errors.

use crate::constants::FETCH_FAILED_MESSAGE;

/// Why the skip catalog could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The endpoint answered with a non-success status.
    #[error("HTTP error! Status: {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The body was not a JSON array of skip records.
    #[error("invalid catalog payload: {0}")]
    Decode(String),

    /// A local catalog file could not be read.
    #[error("I/O error: {0}")]
    Io(String),
}

impl CatalogError {
    /// Message suitable for display in place of the skip grid.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }

    /// Whether reopening the popup may succeed where this attempt failed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Status(code) => *code >= 500 || *code == 429,
            Self::Transport(_) => true,
            Self::Decode(_) | Self::Io(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display() {
        assert_eq!(
            CatalogError::Status(404).to_string(),
            "HTTP error! Status: 404"
        );
    }

    #[test]
    fn user_message_is_fixed() {
        let errs = [
            CatalogError::Status(500),
            CatalogError::Transport("dns".into()),
            CatalogError::Decode("eof".into()),
        ];
        for e in errs {
            assert_eq!(
                e.user_message(),
                "Failed to load skip options. Please try again later."
            );
        }
    }

    #[test]
    fn retryable_classification() {
        assert!(CatalogError::Status(503).is_retryable());
        assert!(CatalogError::Status(429).is_retryable());
        assert!(!CatalogError::Status(404).is_retryable());
        assert!(CatalogError::Transport("reset".into()).is_retryable());
        assert!(!CatalogError::Decode("bad".into()).is_retryable());
    }
}
