//! Error handling for password hashing

use thiserror::Error;

/// Password hashing errors
///
/// A wrong password is not an error: verification reports it as `Ok(false)`.
#[derive(Debug, Error)]
pub enum HasherError {
    /// Salt size below the accepted minimum
    #[error("Invalid configuration: salt size {actual} is below the minimum of {minimum} bytes")]
    InvalidSaltSize {
        /// Configured salt size
        actual: i32,
        /// Smallest accepted salt size
        minimum: i32,
    },

    /// Iteration count below the accepted minimum
    #[error("Invalid configuration: iteration count {actual} is below the minimum of {minimum}")]
    InvalidIterations {
        /// Configured iteration count
        actual: i32,
        /// Smallest accepted iteration count
        minimum: i32,
    },

    /// Caller-provided salt does not have the configured length
    #[error("Salt length mismatch: expected {expected} bytes, got {actual}")]
    SaltLengthMismatch {
        /// Configured salt size
        expected: usize,
        /// Length of the provided salt
        actual: usize,
    },

    /// Stored hash is not valid base64
    #[error("Malformed encoded hash: {0}")]
    MalformedHash(#[from] base64::DecodeError),

    /// Algorithm name not recognised
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Configuration document could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HasherError {
    /// Create an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create an `unsupported_algorithm` error
    #[must_use]
    pub fn unsupported_algorithm(name: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm(name.into())
    }

    /// True for errors raised while validating or loading configuration
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidSaltSize { .. }
                | Self::InvalidIterations { .. }
                | Self::UnsupportedAlgorithm(_)
                | Self::Config(_)
        )
    }

    /// True when a stored hash could not be decoded
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedHash(_))
    }
}

/// Result type for password hashing operations
pub type Result<T> = std::result::Result<T, HasherError>;
