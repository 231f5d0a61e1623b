//! ghmodels Core Library
//!
//! Sends a fixed conversation to a GitHub Models chat-completions endpoint
//! and reports either the tool calls or the text of the first choice.

pub mod config;
pub mod http;
pub mod protocol;
pub mod providers;
pub mod runner;

pub use config::{ConfigError, RunnerConfig};
pub use http::{HttpClient, HttpExecutor};
pub use providers::ProviderError;
pub use runner::{run_once, RequestRunner, RunOutput, RunnerError};

/// Returns the version of the ghmodels core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
