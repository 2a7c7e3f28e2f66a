//! Pure TikWM REST API client.
//!
//! Resolves a TikTok page link into the TikWM JSON envelope, which carries
//! the watermark-free media address. One GET per call, bounded by a
//! client-wide timeout, no retries.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use tikwm_client::TikwmClient;
//!
//! let client = TikwmClient::new(tikwm_client::DEFAULT_BASE_URL, Duration::from_secs(15))?;
//! let resp = client.fetch("https://www.tiktok.com/@someone/video/123").await?;
//! if let Some(video) = resp.video() {
//!     println!("{}", video["play"]);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{Result, TikwmError};
pub use types::ApiResponse;

use std::time::Duration;

use url::Url;

/// Public TikWM endpoint.
pub const DEFAULT_BASE_URL: &str = "https://tikwm.com/api/";

const USER_AGENT: &str = concat!("tikwm-client/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct TikwmClient {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl TikwmClient {
    /// Create a client against `base_url`, bounding every request by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| TikwmError::Config(format!("invalid base URL {base_url:?}: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TikwmError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The full request URL for `link`: the base endpoint plus a URL-encoded
    /// `url` query parameter.
    pub fn request_url(&self, link: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("url", link);
        url
    }

    /// Ask TikWM to resolve `link`.
    pub async fn fetch(&self, link: &str) -> Result<ApiResponse> {
        let url = self.request_url(link);
        tracing::debug!(%url, "Requesting TikWM resolution");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "TikWM returned an error status");
            return Err(TikwmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp.bytes().await.map_err(|e| self.transport_error(e))?;
        parse_envelope(&bytes).inspect_err(|e| {
            tracing::warn!(error = %e, "TikWM response was not a JSON object");
        })
    }

    fn transport_error(&self, e: reqwest::Error) -> TikwmError {
        tracing::warn!(error = %e, timeout = ?self.timeout, "TikWM request failed");
        if e.is_timeout() {
            TikwmError::Timeout(self.timeout)
        } else {
            TikwmError::Network(e)
        }
    }
}

/// Decode a response body. Only a top-level JSON object is an envelope;
/// serde would otherwise map a JSON array onto the struct positionally.
fn parse_envelope(bytes: &[u8]) -> Result<ApiResponse> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| TikwmError::Parse(e.to_string()))?;
    if !value.is_object() {
        return Err(TikwmError::Parse(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }
    serde_json::from_value(value).map_err(|e| TikwmError::Parse(e.to_string()))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
