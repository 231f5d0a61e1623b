//! HTTP client implementation using reqwest

use crate::config::ConnectionConfig;
use crate::http::error::map_http_error;
use crate::http::{CallKind, HttpExecutor, RequestOptions};
use crate::protocol::types::{ChatRequest, ChatResponse};
use crate::providers::adapter::Provider;
use crate::providers::error::{ProviderError, ProviderResult};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response, Url};
use tracing::{debug, error, info, warn};

/// Maximum response size (10MB)
const MAX_RESPONSE_SIZE: usize = 10 * 1024 * 1024;

/// Default user agent
const USER_AGENT: &str = concat!("ghmodels/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed executor
#[derive(Clone)]
pub struct HttpClient {
    /// The underlying reqwest client
    client: Client,

    /// Maximum response size to prevent OOM
    max_response_size: usize,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> ProviderResult<Self> {
        Self::with_config(&ConnectionConfig::default())
    }

    /// Create a new HTTP client from connection settings
    pub fn with_config(connection: &ConnectionConfig) -> ProviderResult<Self> {
        let client = ClientBuilder::new()
            .connect_timeout(connection.connect_timeout())
            .timeout(connection.request_timeout())
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()
            .map_err(|e| ProviderError::Client {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            max_response_size: MAX_RESPONSE_SIZE,
        })
    }

    /// Override the response size cap
    pub fn with_max_response_size(mut self, max_response_size: usize) -> Self {
        self.max_response_size = max_response_size;
        self
    }

    /// Build the full URL for a provider and call kind
    fn build_url(provider: &dyn Provider, call_kind: CallKind) -> ProviderResult<Url> {
        let raw = format!("{}{}", provider.base_url(), provider.endpoint(call_kind));
        let query = provider.query(call_kind);
        let parsed = if query.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, &query)
        };
        parsed.map_err(|e| ProviderError::InvalidRequest {
            message: format!("Invalid endpoint URL '{}': {}", raw, e),
        })
    }

    /// Validate response content type
    fn validate_content_type(response: &Response) -> ProviderResult<()> {
        if let Some(content_type) = response.headers().get("content-type") {
            let content_type_str = content_type.to_str().unwrap_or("").to_lowercase();

            if !content_type_str.contains("application/json") {
                return Err(ProviderError::InvalidContentType {
                    content_type: content_type_str,
                });
            }
        }

        Ok(())
    }

    /// Check response size to prevent OOM
    fn check_content_length(&self, response: &Response) -> ProviderResult<()> {
        if let Some(content_length) = response.content_length() {
            let size = declared_size(content_length);
            if size > self.max_response_size {
                return Err(ProviderError::ResponseTooLarge {
                    size,
                    max: self.max_response_size,
                });
            }
        }

        Ok(())
    }
}

/// Content length as usize, saturating where u64 does not fit
fn declared_size(content_length: u64) -> usize {
    usize::try_from(content_length).unwrap_or(usize::MAX)
}

#[async_trait]
impl HttpExecutor for HttpClient {
    async fn execute_json(
        &self,
        provider: &dyn Provider,
        request: &ChatRequest,
        options: RequestOptions,
    ) -> Result<ChatResponse, ProviderError> {
        let request_id = options.request_id;

        info!(
            "Executing HTTP request to {} [request_id: {}]",
            provider.name(),
            request_id
        );

        let url = Self::build_url(provider, options.call_kind)?;
        debug!("Request URL: {} [request_id: {}]", url, request_id);

        let mut req_builder = self.client.post(url).json(request);

        if let Some(timeout) = options.timeout {
            req_builder = req_builder.timeout(timeout);
        }

        for (key, value) in provider.headers() {
            req_builder = req_builder.header(key, value);
        }

        req_builder = req_builder.header("X-Request-ID", request_id.to_string());

        let response = req_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                warn!(
                    "Request timeout for {} [request_id: {}]",
                    provider.name(),
                    request_id
                );
                ProviderError::Timeout
            } else if e.is_connect() {
                error!(
                    "Connection error for {} [request_id: {}]: {}",
                    provider.name(),
                    request_id,
                    e
                );
                ProviderError::Network {
                    message: format!("Connection failed: {} [request_id: {}]", e, request_id),
                }
            } else {
                error!(
                    "Request error for {} [request_id: {}]: {}",
                    provider.name(),
                    request_id,
                    e
                );
                ProviderError::Network {
                    message: format!("{} [request_id: {}]", e, request_id),
                }
            }
        })?;

        let status = response.status();
        debug!("Response status: {} [request_id: {}]", status, request_id);

        if !status.is_success() {
            let headers = response.headers().clone();
            let body = response.text().await.ok();

            warn!(
                "Request failed with status {} for {} [request_id: {}]",
                status,
                provider.name(),
                request_id
            );

            return Err(map_http_error(status, Some(&headers), body, request_id));
        }

        Self::validate_content_type(&response)?;
        self.check_content_length(&response)?;

        let response_text = response.text().await.map_err(|e| ProviderError::Network {
            message: format!(
                "Failed to read response body: {} [request_id: {}]",
                e, request_id
            ),
        })?;

        // Chunked responses carry no content length
        if response_text.len() > self.max_response_size {
            return Err(ProviderError::ResponseTooLarge {
                size: response_text.len(),
                max: self.max_response_size,
            });
        }

        let chat_response: ChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            error!(
                "Failed to parse response from {} [request_id: {}]: {}",
                provider.name(),
                request_id,
                e
            );
            ProviderError::Parse {
                message: format!("{} [request_id: {}]", e, request_id),
            }
        })?;

        info!(
            "Request completed successfully for {} [request_id: {}]",
            provider.name(),
            request_id
        );

        Ok(chat_response)
    }
}
