use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::domains::download::handle_download;
use crate::kernel::ServerDeps;

/// Download endpoint
///
/// Mounted for every method so that non-POST requests still get the JSON
/// 405 body instead of axum's empty default.
pub async fn download_handler(
    State(deps): State<ServerDeps>,
    method: Method,
    body: Bytes,
) -> Response {
    match handle_download(&method, &body, &deps).await {
        Ok(video) => (StatusCode::OK, Json(video)).into_response(),
        Err(e) => {
            warn!(kind = e.kind(), error = %e, "Download request failed");
            e.into_response()
        }
    }
}
