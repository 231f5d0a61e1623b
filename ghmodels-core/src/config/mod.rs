//! Configuration module for ghmodels
//!
//! The runner is configured entirely from the environment: a required bearer
//! token plus an optional endpoint override. Everything else takes the
//! defaults in [`RunnerConfig::new`].

mod env;
mod error;
mod schema;
mod secrets;

pub use env::{from_env, from_lookup, process_env, ENDPOINT_VAR, TOKEN_VAR};
pub use error::{ConfigError, ConfigResult, ValidationError, ValidationErrorKind};
pub use schema::{
    ConnectionConfig, RunnerConfig, DEFAULT_API_VERSION, DEFAULT_ENDPOINT, DEFAULT_MODEL,
};
pub use secrets::{SafeLogging, SecretString};

impl RunnerConfig {
    /// Load from the process environment (see [`from_env`])
    pub fn from_env() -> ConfigResult<Self> {
        env::from_env()
    }

    /// Load from a custom variable lookup (see [`from_lookup`])
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        env::from_lookup(lookup)
    }
}
