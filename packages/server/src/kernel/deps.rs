//! Server dependencies for request handlers (using traits for testability)

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tikwm_client::{TikwmClient, TikwmError};

use crate::config::Config;
use crate::kernel::{BaseVideoResolver, ResolverError, UpstreamResult};

// =============================================================================
// TikwmClient Adapter (implements BaseVideoResolver trait)
// =============================================================================

/// Wrapper around TikwmClient that implements BaseVideoResolver trait
pub struct TikwmResolver(pub TikwmClient);

impl TikwmResolver {
    pub fn new(client: TikwmClient) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseVideoResolver for TikwmResolver {
    async fn resolve(&self, link: &str) -> Result<UpstreamResult, ResolverError> {
        let resp = self.0.fetch(link).await.map_err(classify)?;

        Ok(UpstreamResult {
            source: self.0.base_url().clone(),
            code: resp.code,
            msg: resp.msg,
            data: resp.data,
        })
    }
}

/// Parse failures mean TikWM answered badly; everything else means it never
/// produced a usable answer.
fn classify(e: TikwmError) -> ResolverError {
    match e {
        TikwmError::Parse(msg) => ResolverError::Malformed(msg),
        other => ResolverError::Unreachable(other.to_string()),
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Immutable per-process dependencies handed to every request.
#[derive(Clone)]
pub struct ServerDeps {
    pub resolver: Arc<dyn BaseVideoResolver>,
    /// Marker every submitted link must contain (e.g. "tiktok.com")
    pub platform_domain: String,
    /// Hard bound on the outbound resolution call
    pub upstream_timeout: Duration,
}

impl ServerDeps {
    pub fn new(
        resolver: Arc<dyn BaseVideoResolver>,
        platform_domain: impl Into<String>,
        upstream_timeout: Duration,
    ) -> Self {
        Self {
            resolver,
            platform_domain: platform_domain.into(),
            upstream_timeout,
        }
    }

    /// Wire the real TikWM client from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = TikwmClient::new(&config.tikwm_api_url, config.upstream_timeout)
            .context("Failed to create TikWM client")?;

        Ok(Self::new(
            Arc::new(TikwmResolver::new(client)),
            config.platform_domain.clone(),
            config.upstream_timeout,
        ))
    }
}
