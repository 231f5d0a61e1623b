//! HTTP layer for calling the completion endpoint
//!
//! [`HttpExecutor`] is the transport seam: the runner only ever talks to it,
//! so tests can swap in a stub that records or refuses calls.

pub mod client;
pub mod error;

use crate::protocol::types::{ChatRequest, ChatResponse};
use crate::providers::adapter::Provider;
use crate::providers::error::ProviderError;
use async_trait::async_trait;
use std::time::Duration;
use uuid::Uuid;

pub use client::HttpClient;

/// Type of API call being made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// Chat completion request
    Chat,
}

impl CallKind {
    /// Get the endpoint path for this call kind
    pub fn endpoint(&self) -> &'static str {
        match self {
            CallKind::Chat => "/chat/completions",
        }
    }
}

/// Options for an HTTP request
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Type of API call
    pub call_kind: CallKind,

    /// Unique request ID for correlation
    pub request_id: Uuid,

    /// Per-request timeout, overriding the client default
    pub timeout: Option<Duration>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(CallKind::Chat)
    }
}

impl RequestOptions {
    /// Create new request options with a generated request ID
    pub fn new(call_kind: CallKind) -> Self {
        Self {
            call_kind,
            request_id: Uuid::new_v4(),
            timeout: None,
        }
    }

    /// Set the timeout for this request
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Trait for HTTP executors
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    /// Execute a non-streaming JSON request
    async fn execute_json(
        &self,
        provider: &dyn Provider,
        request: &ChatRequest,
        options: RequestOptions,
    ) -> Result<ChatResponse, ProviderError>;
}
