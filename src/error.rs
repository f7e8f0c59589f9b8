// src/error.rs
// Error types for the motivator pipeline

use thiserror::Error;

/// Main error type for the motivator library
#[derive(Error, Debug)]
pub enum MotivatorError {
    /// Missing credential or unusable configuration; fatal at startup.
    #[error("configuration error: {0}")]
    Config(String),

    /// The user submitted without any text.
    #[error("please share your thoughts or feelings first")]
    EmptyInput,

    /// The generation endpoint call failed (network, auth, quota, bad request).
    #[error("generation failed: {0}")]
    Generation(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown error: {0}")]
    Other(String),
}

/// Convenience type alias for Result using MotivatorError
pub type Result<T> = std::result::Result<T, MotivatorError>;

impl MotivatorError {
    /// Whether the error should stop the process rather than a single action
    pub fn is_fatal(&self) -> bool {
        matches!(self, MotivatorError::Config(_))
    }

    /// Convert to the message shown to the user
    pub fn to_user_string(&self) -> String {
        match self {
            MotivatorError::EmptyInput => {
                "⚠ Please share your thoughts or feelings first.".to_string()
            }
            MotivatorError::Generation(msg) => format!("Error calling AI: {}", msg),
            other => format!("⚠ Error: {}", other),
        }
    }
}

impl From<String> for MotivatorError {
    fn from(s: String) -> Self {
        MotivatorError::Other(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // Construction tests
    // ============================================================================

    #[test]
    fn test_config_error() {
        let err = MotivatorError::Config("GEMINI_API_KEY not set".to_string());
        assert!(err.to_string().contains("configuration error"));
        assert!(err.to_string().contains("GEMINI_API_KEY"));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_empty_input_error() {
        let err = MotivatorError::EmptyInput;
        assert!(err.to_string().contains("thoughts or feelings"));
        assert_eq!(
            err.to_user_string(),
            "⚠ Please share your thoughts or feelings first."
        );
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_generation_error() {
        let err = MotivatorError::Generation("quota exceeded".to_string());
        assert!(err.to_string().contains("generation failed"));
        assert!(err.to_user_string().starts_with("Error calling AI"));
        assert!(!err.is_fatal());
    }

    // ============================================================================
    // From implementations tests
    // ============================================================================

    #[test]
    fn test_from_string() {
        let err: MotivatorError = "something odd".to_string().into();
        assert!(matches!(err, MotivatorError::Other(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: MotivatorError = json_err.into();
        assert!(matches!(err, MotivatorError::Json(_)));
        assert!(err.to_string().contains("JSON"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: MotivatorError = io_err.into();
        assert!(matches!(err, MotivatorError::Io(_)));
    }
}
