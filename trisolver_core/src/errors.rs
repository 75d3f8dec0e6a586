//! # Error Types
//!
//! Structured error types for trisolver_core. A REPL only needs to know two
//! things about a failed line: whether the user typed something malformed
//! (show the usage hint) or whether the numbers describe no triangle at all.
//! [`TriError::is_usage`] answers the first question; everything else is
//! reported as-is.
//!
//! ## Example
//!
//! ```rust
//! use trisolver_core::errors::{TriError, TriResult};
//!
//! fn require_positive(field: &str, value: f64) -> TriResult<f64> {
//!     if value <= 0.0 {
//!         return Err(TriError::impossible("SSS", format!("{field} must be positive")));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(require_positive("a", 3.0).is_ok());
//! assert!(!require_positive("a", 0.0).unwrap_err().is_usage());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for trisolver_core operations
pub type TriResult<T> = Result<T, TriError>;

/// Structured error type for parsing and solving.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum TriError {
    /// The leading token is neither a mode nor a quit keyword
    #[error("Unknown mode: '{token}'")]
    UnknownMode { token: String },

    /// Fewer than three numeric parameters were supplied
    #[error("Missing required parameter: {field}")]
    MissingParameter { field: String },

    /// A parameter is not a finite real number
    #[error("Invalid number for '{field}': {value}")]
    InvalidNumber { field: String, value: String },

    /// The inputs describe no triangle
    #[error("Impossible triangle ({mode}): {reason}")]
    Impossible { mode: String, reason: String },

    /// Reading input or writing output failed
    #[error("I/O error: {operation} - {reason}")]
    Io { operation: String, reason: String },

    /// JSON serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl TriError {
    /// Create an UnknownMode error
    pub fn unknown_mode(token: impl Into<String>) -> Self {
        TriError::UnknownMode {
            token: token.into(),
        }
    }

    /// Create a MissingParameter error
    pub fn missing_parameter(field: impl Into<String>) -> Self {
        TriError::MissingParameter {
            field: field.into(),
        }
    }

    /// Create an InvalidNumber error
    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        TriError::InvalidNumber {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an Impossible error
    pub fn impossible(mode: impl Into<String>, reason: impl Into<String>) -> Self {
        TriError::Impossible {
            mode: mode.into(),
            reason: reason.into(),
        }
    }

    /// Create an Io error
    pub fn io(operation: impl Into<String>, err: &std::io::Error) -> Self {
        TriError::Io {
            operation: operation.into(),
            reason: err.to_string(),
        }
    }

    /// True for malformed commands, which the REPL answers with the usage hint
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            TriError::UnknownMode { .. }
                | TriError::MissingParameter { .. }
                | TriError::InvalidNumber { .. }
        )
    }

    /// True when the loop cannot continue
    pub fn is_fatal(&self) -> bool {
        matches!(self, TriError::Io { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TriError::UnknownMode { .. } => "UNKNOWN_MODE",
            TriError::MissingParameter { .. } => "MISSING_PARAMETER",
            TriError::InvalidNumber { .. } => "INVALID_NUMBER",
            TriError::Impossible { .. } => "IMPOSSIBLE_TRIANGLE",
            TriError::Io { .. } => "IO_ERROR",
            TriError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for TriError {
    fn from(err: serde_json::Error) -> Self {
        TriError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = TriError::impossible("SSA", "D = 1.2 exceeds 1");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"Impossible\""));
        let roundtrip: TriError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(TriError::unknown_mode("XYZ").error_code(), "UNKNOWN_MODE");
        assert_eq!(TriError::missing_parameter("c").error_code(), "MISSING_PARAMETER");
        assert_eq!(
            TriError::impossible("SSS", "sides").error_code(),
            "IMPOSSIBLE_TRIANGLE"
        );
    }

    #[test]
    fn test_usage_classification() {
        assert!(TriError::unknown_mode("XYZ").is_usage());
        assert!(TriError::invalid_number("a", "abc").is_usage());
        assert!(TriError::missing_parameter("b").is_usage());
        assert!(!TriError::impossible("ASA", "gamma <= 0").is_usage());
    }

    #[test]
    fn test_io_is_fatal() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err = TriError::io("write", &io);
        assert!(err.is_fatal());
        assert!(!err.is_usage());
        assert_eq!(err.error_code(), "IO_ERROR");
    }

    #[test]
    fn test_display() {
        let err = TriError::invalid_number("gamma", "abc");
        assert_eq!(err.to_string(), "Invalid number for 'gamma': abc");
    }
}
