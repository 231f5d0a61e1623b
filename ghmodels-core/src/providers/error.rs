//! Provider error types

use std::time::Duration;
use thiserror::Error;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors that can occur when calling the completion endpoint
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The HTTP client could not be constructed
    #[error("Failed to create HTTP client: {message}")]
    Client { message: String },

    /// Credential rejected (401/403)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Rate limit exceeded
    #[error("Rate limit exceeded{}", retry_suffix(.retry_after))]
    RateLimit { retry_after: Option<Duration> },

    /// Request rejected by the service (4xx)
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Model not found or not available to this credential
    #[error("Model '{model}' not available")]
    ModelNotAvailable { model: String },

    /// Request timed out
    #[error("Request timeout")]
    Timeout,

    /// Server-side error (5xx)
    #[error("Server error ({status_code}): {message}")]
    ServerError { status_code: u16, message: String },

    /// Any other non-success status
    #[error("Unexpected HTTP status {status_code}: {message}")]
    UnexpectedStatus { status_code: u16, message: String },

    /// Network or connection error
    #[error("Network error: {message}")]
    Network { message: String },

    /// Response was not JSON
    #[error("Expected application/json, got: {content_type}")]
    InvalidContentType { content_type: String },

    /// Response body exceeded the size cap
    #[error("Response size {size} exceeds maximum {max}")]
    ResponseTooLarge { size: usize, max: usize },

    /// Request or response body could not be (de)serialized
    #[error("Invalid response format: {message}")]
    Parse { message: String },
}

fn retry_suffix(retry_after: &Option<Duration>) -> String {
    retry_after
        .map(|d| format!(", retry after {}s", d.as_secs()))
        .unwrap_or_default()
}

impl ProviderError {
    /// Whether the failure came from the credential being rejected
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}
