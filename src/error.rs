//! Error types for claimline.
//!
//! The engine itself never fails: malformed transcript input degrades to a
//! default rather than raising. Errors exist only for the I/O shell around it:
//! reading the transcript, parsing the claims file, loading configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClaimlineError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Claims input errors
    #[error("Claims file not found at {path}")]
    ClaimsFileNotFound { path: String },

    #[error("Failed to parse claims: {message}")]
    ClaimsParse { message: String },

    // Transcript input errors
    #[error("Failed to read transcript from {origin}: {message}")]
    TranscriptRead { origin: String, message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, ClaimlineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn config_file_not_found_display() {
        let error = ClaimlineError::ConfigFileNotFound {
            path: "/path/to/config.toml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found at /path/to/config.toml"
        );
    }

    #[test]
    fn claims_file_not_found_display() {
        let error = ClaimlineError::ClaimsFileNotFound {
            path: "claims.json".to_string(),
        };
        assert_eq!(error.to_string(), "Claims file not found at claims.json");
    }

    #[test]
    fn claims_parse_display() {
        let error = ClaimlineError::ClaimsParse {
            message: "expected an array".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse claims: expected an array"
        );
    }

    #[test]
    fn transcript_read_display() {
        let error = ClaimlineError::TranscriptRead {
            origin: "stdin".to_string(),
            message: "stream closed".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read transcript from stdin: stream closed"
        );
    }

    #[test]
    fn io_error_converts() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error: ClaimlineError = io_error.into();
        assert!(matches!(error, ClaimlineError::Io(_)));
        assert_eq!(error.to_string(), "I/O error: denied");
    }

    #[test]
    fn other_displays_message_only() {
        let error = ClaimlineError::Other("something else".to_string());
        assert_eq!(error.to_string(), "something else");
    }
}
