//! Error types for passgen

use thiserror::Error;

/// Main error type for the validating password operations
#[derive(Error, Debug)]
pub enum PasswordError {
    /// Requested length is outside `PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH`
    #[error("Invalid password length: {0}")]
    InvalidLength(usize),

    /// Options could not be parsed
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Text is not one of the strength labels
    #[error("Unknown strength label: {0}")]
    UnknownStrength(String),
}

impl From<serde_json::Error> for PasswordError {
    fn from(err: serde_json::Error) -> Self {
        PasswordError::InvalidOptions(err.to_string())
    }
}

/// Result type alias for password operations
pub type Result<T> = std::result::Result<T, PasswordError>;
