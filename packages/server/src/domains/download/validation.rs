//! Inbound request checks. Pure: no I/O, runs before any outbound call.

use axum::http::Method;
use serde_json::Value;

use super::error::DownloadError;
use super::models::DownloadRequest;

/// Only POST is accepted.
pub fn validate_method(method: &Method) -> Result<(), DownloadError> {
    if *method == Method::POST {
        Ok(())
    } else {
        Err(DownloadError::InvalidMethod(method.to_string()))
    }
}

/// Parse the JSON body and check the link targets `platform_domain`.
///
/// The link is trimmed; the domain check is a case-sensitive substring match.
pub fn validate_request(body: &[u8], platform_domain: &str) -> Result<DownloadRequest, DownloadError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| DownloadError::InvalidInput(format!("body is not valid JSON: {e}")))?;

    let url = match value.get("url") {
        None | Some(Value::Null) => {
            return Err(DownloadError::InvalidInput("url is missing".to_string()))
        }
        Some(Value::String(s)) => s.trim(),
        Some(_) => return Err(DownloadError::InvalidInput("url must be a string".to_string())),
    };

    if url.is_empty() {
        return Err(DownloadError::InvalidInput("url is empty".to_string()));
    }

    if !url.contains(platform_domain) {
        return Err(DownloadError::InvalidInput(format!(
            "url is not a {platform_domain} link"
        )));
    }

    Ok(DownloadRequest {
        url: url.to_string(),
    })
}
