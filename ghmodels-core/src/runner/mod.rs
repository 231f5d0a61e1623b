//! Request runner
//!
//! One run is: resolve configuration, build the fixed conversation into a
//! request, make exactly one call through an [`HttpExecutor`], and turn the
//! first choice into a [`RunOutput`]. Nothing is retried.

mod conversation;
mod error;
mod output;

pub use conversation::{conversation, SYSTEM_PROMPT, USER_PROMPTS};
pub use error::RunnerError;
pub use output::RunOutput;

use crate::config::{RunnerConfig, SafeLogging, TOKEN_VAR};
use crate::http::{CallKind, HttpExecutor, RequestOptions};
use crate::protocol::types::ChatRequest;
use crate::providers::error::ProviderError;
use crate::providers::GitHubModelsProvider;
use std::io::Write;
use tracing::{debug, info, warn};

/// Sends the fixed conversation once
pub struct RequestRunner<E> {
    config: RunnerConfig,
    provider: GitHubModelsProvider,
    executor: E,
}

impl<E: HttpExecutor> RequestRunner<E> {
    /// Create a runner from an already validated configuration
    pub fn new(config: RunnerConfig, executor: E) -> Self {
        let provider = GitHubModelsProvider::from_config(&config);
        Self {
            config,
            provider,
            executor,
        }
    }

    /// Configuration the runner was built with
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// The request this runner sends
    pub fn build_request(&self) -> ChatRequest {
        ChatRequest::new(self.config.model.clone(), conversation())
            .with_temperature(self.config.temperature)
            .with_top_p(self.config.top_p)
            .with_response_format(self.config.response_format)
            .with_tools(Vec::new())
    }

    /// Make the call and pick the output
    pub async fn run(&self) -> Result<RunOutput, RunnerError> {
        let request = self.build_request();
        let options = RequestOptions::new(CallKind::Chat);

        debug!("Runner config: {}", self.config.safe_for_logging());
        info!(
            "Sending {} messages to model {} [request_id: {}]",
            request.messages.len(),
            request.model,
            options.request_id
        );

        let response = self
            .executor
            .execute_json(&self.provider, &request, options)
            .await
            .inspect_err(|e| {
                if e.is_auth() {
                    warn!("The endpoint rejected the credential; check {}", TOKEN_VAR);
                }
            })?;

        if let Some(usage) = &response.usage {
            debug!(
                "Token usage: prompt={} completion={} total={}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        RunOutput::from_response(response)
    }
}

/// Run the whole one-shot flow and write the result to `out`
///
/// Configuration is resolved from `lookup` first. If that fails, neither
/// `make_executor` nor the network is touched. On success the rendered
/// output is written once, followed by a newline.
pub async fn run_once<F, M, E, W>(
    lookup: F,
    make_executor: M,
    out: &mut W,
) -> Result<RunOutput, RunnerError>
where
    F: Fn(&str) -> Option<String>,
    M: FnOnce(&RunnerConfig) -> Result<E, ProviderError>,
    E: HttpExecutor,
    W: Write,
{
    let config = RunnerConfig::from_lookup(lookup)?;
    let executor = make_executor(&config)?;
    let runner = RequestRunner::new(config, executor);

    let output = runner.run().await?;
    writeln!(out, "{}", output.render()?)?;
    out.flush()?;
    Ok(output)
}
