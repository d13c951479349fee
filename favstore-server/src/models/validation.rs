//! Validation error types

use std::fmt;

/// Validation error for client-supplied input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// String doesn't match required format (e.g., numeric id)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Request body could not be decoded into the expected record
    MalformedBody(String),

    /// Query string could not be decoded
    MalformedQuery(String),

    /// Path segment could not be decoded
    MalformedPath(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::MalformedBody(detail) => write!(f, "malformed request body: {}", detail),
            Self::MalformedQuery(detail) => write!(f, "malformed query string: {}", detail),
            Self::MalformedPath(detail) => write!(f, "malformed path: {}", detail),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidFormat {
            field: "id",
            reason: "must be a non-negative integer",
        };
        assert_eq!(err.to_string(), "id: must be a non-negative integer");

        let err = ValidationError::MalformedBody("EOF while parsing".into());
        assert_eq!(err.to_string(), "malformed request body: EOF while parsing");
    }
}
