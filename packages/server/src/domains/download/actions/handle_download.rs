//! Handle download action

use axum::http::Method;
use tracing::{debug, info};

use crate::domains::download::error::DownloadError;
use crate::domains::download::models::ResolvedVideo;
use crate::domains::download::normalize::normalize;
use crate::domains::download::validation::{validate_method, validate_request};
use crate::kernel::ServerDeps;

/// Run one request through the pipeline:
/// Received → Validated → Resolved → Normalized.
///
/// Validation failures return before the resolver is touched. The resolver
/// call is bounded by `deps.upstream_timeout` and never retried.
pub async fn handle_download(
    method: &Method,
    body: &[u8],
    deps: &ServerDeps,
) -> Result<ResolvedVideo, DownloadError> {
    validate_method(method)?;
    let request = validate_request(body, &deps.platform_domain)?;
    debug!(link = %request.url, "Link validated");

    let upstream = tokio::time::timeout(deps.upstream_timeout, deps.resolver.resolve(&request.url))
        .await
        .map_err(|_| {
            DownloadError::UpstreamUnreachable(format!(
                "extraction service did not answer within {:?}",
                deps.upstream_timeout
            ))
        })??;
    debug!(link = %request.url, code = ?upstream.code, "Extraction service answered");

    let video = normalize(upstream)?;
    info!(link = %request.url, author = %video.author, "Video resolved");

    Ok(video)
}
