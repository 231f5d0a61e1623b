//! Provider abstraction
//!
//! Only one provider exists today, GitHub Models; the trait is the seam the
//! HTTP executor and its test doubles are written against.

pub mod adapter;
pub mod error;
pub mod github;

pub use adapter::Provider;
pub use error::{ProviderError, ProviderResult};
pub use github::GitHubModelsProvider;
