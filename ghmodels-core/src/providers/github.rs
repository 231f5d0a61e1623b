//! GitHub Models provider
//!
//! GitHub Models serves an Azure AI inference compatible chat-completions
//! API. Requests carry the GitHub token as a bearer credential and pin the
//! API with an `api-version` query parameter.

use crate::config::{RunnerConfig, SecretString};
use crate::http::CallKind;
use crate::providers::adapter::Provider;
use std::collections::HashMap;

/// GitHub Models provider implementation
pub struct GitHubModelsProvider {
    base_url: String,
    api_version: String,
    token: SecretString,
}

impl GitHubModelsProvider {
    /// Create a provider for the given endpoint, API version and token
    pub fn new(
        base_url: impl Into<String>,
        api_version: impl Into<String>,
        token: SecretString,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_version: api_version.into(),
            token,
        }
    }

    /// Create a provider from the runner configuration
    pub fn from_config(config: &RunnerConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            config.api_version.clone(),
            config.token.clone(),
        )
    }
}

impl Provider for GitHubModelsProvider {
    fn name(&self) -> &str {
        "github-models"
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn query(&self, _call_kind: CallKind) -> Vec<(String, String)> {
        vec![("api-version".to_string(), self.api_version.clone())]
    }

    fn headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.token.expose_secret()),
        );
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }
}
