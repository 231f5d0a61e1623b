//! Runner error type

use crate::config::ConfigError;
use crate::providers::error::ProviderError;
use thiserror::Error;

/// Everything that can end a run
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Configuration was missing or invalid; no request was made
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The call to the endpoint failed
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The response carried no choices
    #[error("Response contained no choices")]
    EmptyResponse,

    /// Tool calls could not be rendered as JSON
    #[error("Failed to render tool calls")]
    Render(#[from] serde_json::Error),

    /// Output could not be written
    #[error("Failed to write output")]
    Io(#[from] std::io::Error),
}
