//! Error types for speakdrill.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeakdrillError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    // Topic catalog errors
    #[error("Unknown topic: {name}")]
    TopicNotFound { name: String },

    // Recognizer errors
    #[error("Recognizer unavailable: {message}")]
    RecognizerUnavailable { message: String },

    #[error("Recognizer failed: {message}")]
    RecognizerFailed { message: String },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, SpeakdrillError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_invalid_value_display() {
        let error = SpeakdrillError::ConfigInvalidValue {
            key: "session.duration_secs".to_string(),
            message: "must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value for session.duration_secs: must be positive"
        );
    }

    #[test]
    fn test_topic_not_found_display() {
        let error = SpeakdrillError::TopicNotFound {
            name: "Astrophysics".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown topic: Astrophysics");
    }

    #[test]
    fn test_recognizer_unavailable_display() {
        let error = SpeakdrillError::RecognizerUnavailable {
            message: "no recognizer command configured".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Recognizer unavailable: no recognizer command configured"
        );
    }

    #[test]
    fn test_recognizer_failed_display() {
        let error = SpeakdrillError::RecognizerFailed {
            message: "child exited".to_string(),
        };
        assert_eq!(error.to_string(), "Recognizer failed: child exited");
    }

    #[test]
    fn test_other_display() {
        let error = SpeakdrillError::Other("unexpected error".to_string());
        assert_eq!(error.to_string(), "unexpected error");
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: SpeakdrillError = io_error.into();
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_str = "invalid = toml = syntax";
        let toml_error = toml::from_str::<toml::Value>(toml_str).unwrap_err();
        let error: SpeakdrillError = toml_error.into();
        assert!(error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }

    #[test]
    fn test_error_source_chain_io() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let error: SpeakdrillError = io_error.into();

        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<SpeakdrillError>();
        assert_sync::<SpeakdrillError>();
    }
}
