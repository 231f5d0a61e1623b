//! Configuration schema structures with serde support

use super::error::ValidationError;
use super::secrets::{SafeLogging, SecretString};
use crate::protocol::types::ResponseFormat;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default GitHub Models inference endpoint
pub const DEFAULT_ENDPOINT: &str = "https://models.inference.ai.azure.com";

/// API version sent as the `api-version` query parameter
pub const DEFAULT_API_VERSION: &str = "2024-08-01-preview";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Everything the request runner needs for one call
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// Bearer credential
    pub token: SecretString,

    /// Base URL of the inference endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Value of the `api-version` query parameter
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature (0.0 to 2.0)
    #[serde(default = "default_sampling")]
    pub temperature: f32,

    /// Nucleus sampling parameter (0.0 to 1.0)
    #[serde(default = "default_sampling")]
    pub top_p: f32,

    /// Requested response format
    #[serde(default)]
    pub response_format: ResponseFormat,

    /// Transport settings
    #[serde(default)]
    pub connection: ConnectionConfig,
}

/// Connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    /// Connection timeout in milliseconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,

    /// Request timeout in milliseconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: default_connect_timeout(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

impl ConnectionConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

// Default value functions for serde
fn default_endpoint() -> String { DEFAULT_ENDPOINT.to_string() }
fn default_api_version() -> String { DEFAULT_API_VERSION.to_string() }
fn default_model() -> String { DEFAULT_MODEL.to_string() }
fn default_sampling() -> f32 { 1.0 }
fn default_connect_timeout() -> u64 { 10_000 }
fn default_request_timeout() -> u64 { 60_000 }

impl RunnerConfig {
    /// Create a configuration with the given token and default everything else
    pub fn new(token: impl Into<SecretString>) -> Self {
        Self {
            token: token.into(),
            endpoint: default_endpoint(),
            api_version: default_api_version(),
            model: default_model(),
            temperature: default_sampling(),
            top_p: default_sampling(),
            response_format: ResponseFormat::default(),
            connection: ConnectionConfig::default(),
        }
    }

    /// Point the runner at a different base URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.token.is_empty() {
            return Err(ValidationError::required("token")
                .with_context("a non-empty bearer token is required"));
        }

        match url::Url::parse(&self.endpoint) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    return Err(ValidationError::invalid_url(
                        "endpoint",
                        format!("URL scheme must be http or https, got: {}", url.scheme()),
                    ));
                }
            }
            Err(e) => return Err(ValidationError::invalid_url("endpoint", e.to_string())),
        }

        if self.api_version.is_empty() {
            return Err(ValidationError::required("api_version"));
        }

        if self.model.is_empty() {
            return Err(ValidationError::required("model"));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::out_of_range(
                "temperature",
                "Must be between 0.0 and 2.0",
            ));
        }

        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(ValidationError::out_of_range(
                "top_p",
                "Must be between 0.0 and 1.0",
            ));
        }

        if self.connection.connect_timeout_ms == 0 {
            return Err(ValidationError::out_of_range(
                "connection.connect_timeout_ms",
                "Must be greater than 0",
            ));
        }

        if self.connection.request_timeout_ms == 0 {
            return Err(ValidationError::out_of_range(
                "connection.request_timeout_ms",
                "Must be greater than 0",
            ));
        }

        Ok(())
    }
}

impl SafeLogging for RunnerConfig {
    fn safe_for_logging(&self) -> String {
        format!(
            "endpoint={} api_version={} model={} temperature={} top_p={} token={}",
            self.endpoint,
            self.api_version,
            self.model,
            self.temperature,
            self.top_p,
            self.token.partial_redact()
        )
    }
}
