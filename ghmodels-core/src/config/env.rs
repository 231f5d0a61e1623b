//! Environment lookup for the runner configuration

use super::error::{ConfigError, ConfigResult};
use super::schema::RunnerConfig;
use super::secrets::SecretString;
use std::env;

/// Variable holding the bearer credential
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Optional override for the endpoint base URL
pub const ENDPOINT_VAR: &str = "GITHUB_MODELS_ENDPOINT";

/// Lookup backed by the process environment; non-UTF-8 values count as unset
pub fn process_env(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Build a configuration from the process environment
pub fn from_env() -> ConfigResult<RunnerConfig> {
    from_lookup(process_env)
}

/// Build a configuration from an arbitrary variable lookup
///
/// A missing, empty or whitespace-only token is a [`ConfigError::MissingCredential`].
/// The returned config has already passed validation.
pub fn from_lookup<F>(lookup: F) -> ConfigResult<RunnerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let token = lookup(TOKEN_VAR)
        .map(SecretString::new)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ConfigError::MissingCredential {
            var: TOKEN_VAR.to_string(),
        })?;

    let mut config = RunnerConfig::new(token);

    if let Some(endpoint) = lookup(ENDPOINT_VAR).filter(|v| !v.trim().is_empty()) {
        config.endpoint = endpoint.trim().trim_end_matches('/').to_string();
    }

    config.validate()?;
    Ok(config)
}
