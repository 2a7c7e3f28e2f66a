use serde::Deserialize;

/// Top-level envelope returned by `GET /api/?url=...`.
///
/// Only the envelope is typed. `data` stays a raw JSON value because its
/// shape drifts between API revisions; consumers project the fields they need.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiResponse {
    /// `0` on success, negative on failure.
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub msg: Option<String>,
    /// Present when a video was resolved. `null` deserializes to `None`.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl ApiResponse {
    /// The nested video payload, if the API resolved one.
    pub fn video(&self) -> Option<&serde_json::Value> {
        self.data.as_ref()
    }
}
