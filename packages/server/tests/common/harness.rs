//! In-process harness: drives the axum router with `tower::ServiceExt::oneshot`.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{Body, Bytes},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use server_core::kernel::{BaseVideoResolver, MockVideoResolver, ServerDeps};
use server_core::server::{build_app, DOWNLOAD_PATH};
use tower::ServiceExt;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct TestHarness {
    app: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl TestHarness {
    /// Harness whose extraction service is `resolver`.
    pub fn with_resolver(resolver: Arc<dyn BaseVideoResolver>, timeout: Duration) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let deps = ServerDeps::new(resolver, "tiktok.com", timeout);
        Self {
            app: build_app(deps, &[]),
        }
    }

    /// Harness backed by a mock; keep a clone of `mock` to inspect its calls.
    pub fn with_mock(mock: &MockVideoResolver) -> Self {
        Self::with_resolver(Arc::new(mock.clone()), DEFAULT_TIMEOUT)
    }

    pub async fn send(&self, method: Method, uri: &str, body: impl Into<Body>) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(body.into())
            .expect("failed to build request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("failed to read response body")
            .to_bytes();

        TestResponse { status, body }
    }

    /// POST `body` to the download endpoint.
    pub async fn download(&self, body: impl Into<Body>) -> TestResponse {
        self.send(Method::POST, DOWNLOAD_PATH, body).await
    }
}

/// Serve `router` on an ephemeral port and return its `/api/` endpoint.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api/", addr)
}
