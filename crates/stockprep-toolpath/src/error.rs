//! Error types for the toolpath engine.

use thiserror::Error;

/// Errors that abort a generation call.
///
/// Parameter problems the caller can correct are reported by
/// [`crate::validator::validate`] instead; only configurations the engine
/// cannot produce any path for surface here.
#[derive(Error, Debug)]
pub enum ToolpathError {
    /// The requested pattern (or pattern variant) has no generator.
    #[error("Unsupported facing pattern: {0}")]
    UnsupportedPattern(String),

    /// Parameters that would prevent generation from terminating.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type alias for engine operations.
pub type ToolpathResult<T> = Result<T, ToolpathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ToolpathError::UnsupportedPattern("spiral inside-out".to_string());
        assert_eq!(err.to_string(), "Unsupported facing pattern: spiral inside-out");

        let err = ToolpathError::InvalidParameters("stepdown must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameters: stepdown must be positive");
    }
}
