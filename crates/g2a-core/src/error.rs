//! # Gateway Error Types
//!
//! Typed error handling for g2a-pay-rs.
//! All fallible operations return `GatewayResult<T>`.

use thiserror::Error;

/// Core error type for all gateway operations
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration errors (missing credentials, invalid environment)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data (e.g. submitting an empty cart)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network/HTTP error talking to the gateway
    #[error("Network error: {0}")]
    Network(String),

    /// The gateway answered the quote request without a usable token.
    /// Carries the raw response body for diagnosis; this usually means
    /// the sent parameters (amount, currency, credentials) were rejected.
    #[error("Quote response missing token: {body}")]
    InvalidQuoteResponse { body: String },

    /// Recomputed IPN hash does not match the hash the gateway supplied
    #[error("IPN signature mismatch")]
    SignatureMismatch,

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl GatewayError {
    /// Returns true if this error is retryable.
    ///
    /// Only transport failures qualify; a rejected quote indicates bad
    /// request parameters and a signature mismatch must never be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GatewayError::Network(_))
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
