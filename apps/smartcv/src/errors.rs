use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
///
/// Parse degradation is deliberately absent: malformed model output never
/// raises, it degrades to empty sections that the renderer omits. Every
/// variant here crosses the library boundary and is the caller's to display.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Document error: {0}")]
    Document(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Llm(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_keeps_underlying_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only target");
        let err = AppError::from(io);
        assert!(err.to_string().contains("read-only target"));
    }

    #[test]
    fn test_llm_error_converts_with_message() {
        let err: AppError = LlmError::EmptyContent.into();
        match err {
            AppError::Llm(msg) => assert!(!msg.is_empty()),
            other => panic!("expected Llm variant, got {other:?}"),
        }
    }
}
