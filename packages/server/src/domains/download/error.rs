//! Failure classification for the download pipeline.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::models::ErrorResponse;
use crate::kernel::ResolverError;

/// Every way a download request can fail. All variants are terminal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DownloadError {
    /// Request used a method other than POST
    #[error("method {0} not allowed")]
    InvalidMethod(String),

    /// Body unreadable, or link missing/empty/not on the platform
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Extraction service could not be reached in time
    #[error("extraction service unreachable: {0}")]
    UpstreamUnreachable(String),

    /// Extraction service answered with something we cannot read
    #[error("malformed extraction response: {0}")]
    UpstreamMalformed(String),

    /// Extraction service answered but found no video
    #[error("video not found: {0}")]
    UpstreamMiss(String),
}

impl DownloadError {
    pub fn status(&self) -> StatusCode {
        match self {
            DownloadError::InvalidMethod(_) => StatusCode::METHOD_NOT_ALLOWED,
            DownloadError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DownloadError::UpstreamUnreachable(_)
            | DownloadError::UpstreamMalformed(_)
            | DownloadError::UpstreamMiss(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short stable name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DownloadError::InvalidMethod(_) => "invalid_method",
            DownloadError::InvalidInput(_) => "invalid_input",
            DownloadError::UpstreamUnreachable(_) => "upstream_unreachable",
            DownloadError::UpstreamMalformed(_) => "upstream_malformed",
            DownloadError::UpstreamMiss(_) => "upstream_miss",
        }
    }

    /// User-presentable body. Upstream failures carry their cause in `details`.
    pub fn to_response_body(&self) -> ErrorResponse {
        let (error, details) = match self {
            DownloadError::InvalidMethod(_) => ("Only POST method is allowed", None),
            DownloadError::InvalidInput(_) => ("Please provide a valid TikTok URL", None),
            DownloadError::UpstreamUnreachable(cause) | DownloadError::UpstreamMalformed(cause) => {
                ("Server error", Some(cause.clone()))
            }
            DownloadError::UpstreamMiss(cause) => ("Video not found", Some(cause.clone())),
        };

        ErrorResponse {
            error: error.to_string(),
            details,
        }
    }
}

impl From<ResolverError> for DownloadError {
    fn from(e: ResolverError) -> Self {
        match e {
            ResolverError::Unreachable(cause) => DownloadError::UpstreamUnreachable(cause),
            ResolverError::Malformed(cause) => DownloadError::UpstreamMalformed(cause),
        }
    }
}

impl IntoResponse for DownloadError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_response_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            DownloadError::InvalidMethod("GET".into()).status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            DownloadError::InvalidInput("missing url".into()).status(),
            StatusCode::BAD_REQUEST
        );
        for e in [
            DownloadError::UpstreamUnreachable("refused".into()),
            DownloadError::UpstreamMalformed("not json".into()),
            DownloadError::UpstreamMiss("no data".into()),
        ] {
            assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_client_errors_have_no_details() {
        let body = DownloadError::InvalidInput("url is empty".into()).to_response_body();
        assert_eq!(body.error, "Please provide a valid TikTok URL");
        assert!(body.details.is_none());

        let json = serde_json::to_string(&DownloadError::InvalidMethod("PUT".into()).to_response_body())
            .unwrap();
        assert_eq!(json, r#"{"error":"Only POST method is allowed"}"#);
    }

    #[test]
    fn test_upstream_errors_surface_cause() {
        let body = DownloadError::UpstreamUnreachable("connection refused".into()).to_response_body();
        assert_eq!(body.error, "Server error");
        assert_eq!(body.details.as_deref(), Some("connection refused"));

        let body = DownloadError::UpstreamMiss("Url parsing is failed!".into()).to_response_body();
        assert_eq!(body.error, "Video not found");
        assert_eq!(body.details.as_deref(), Some("Url parsing is failed!"));
    }

    #[test]
    fn test_from_resolver_error() {
        assert_eq!(
            DownloadError::from(ResolverError::Unreachable("timeout".into())),
            DownloadError::UpstreamUnreachable("timeout".into())
        );
        assert_eq!(
            DownloadError::from(ResolverError::Malformed("eof".into())),
            DownloadError::UpstreamMalformed("eof".into())
        );
    }
}
