// Trait definitions for dependency injection
//
// The download pipeline only ever talks to the extraction service through
// BaseVideoResolver, so tests can swap in MockVideoResolver.
//
// Naming convention: Base* for trait names (e.g., BaseVideoResolver)

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use url::Url;

// =============================================================================
// Video Resolver Trait (Infrastructure - extraction service)
// =============================================================================

/// Raw answer from the extraction service.
///
/// Only the envelope is typed; `data` is projected by the download normalizer.
#[derive(Debug, Clone)]
pub struct UpstreamResult {
    /// Endpoint that produced the answer (base for relative media paths)
    pub source: Url,
    pub code: Option<i64>,
    pub msg: Option<String>,
    pub data: Option<Value>,
}

/// Failure to obtain an answer from the extraction service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolverError {
    /// Network failure, timeout or non-2xx status
    #[error("{0}")]
    Unreachable(String),

    /// Body could not be parsed as the expected JSON envelope
    #[error("{0}")]
    Malformed(String),
}

#[async_trait]
pub trait BaseVideoResolver: Send + Sync {
    /// Issue one resolution call for `link`. Never retries.
    async fn resolve(&self, link: &str) -> Result<UpstreamResult, ResolverError>;
}
