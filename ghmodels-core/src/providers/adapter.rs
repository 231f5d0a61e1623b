//! Provider adapter trait
//!
//! A provider knows where to send a call and how to authenticate it. The
//! HTTP executor asks it for the URL pieces and headers and does the rest.

use crate::http::CallKind;
use std::collections::HashMap;

/// Core provider trait
pub trait Provider: Send + Sync {
    /// Get the provider's name
    fn name(&self) -> &str;

    /// Get the base URL for this provider
    fn base_url(&self) -> &str;

    /// Get the endpoint path for a specific call kind
    fn endpoint(&self, call_kind: CallKind) -> &str {
        call_kind.endpoint()
    }

    /// Query parameters appended to every call
    fn query(&self, call_kind: CallKind) -> Vec<(String, String)>;

    /// Get headers required for this provider, including authentication
    fn headers(&self) -> HashMap<String, String>;
}
