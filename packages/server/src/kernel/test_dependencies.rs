// TestDependencies - mock implementations for testing
//
// Provides a mock extraction service that can be injected into ServerDeps.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use url::Url;

use super::{BaseVideoResolver, ResolverError, UpstreamResult};

/// Source URL reported by mock answers.
pub const MOCK_SOURCE: &str = "https://tikwm.com/api/";

// =============================================================================
// Mock Video Resolver
// =============================================================================

/// Answers every call with the same canned outcome and records the links it
/// was asked to resolve.
#[derive(Clone)]
pub struct MockVideoResolver {
    outcome: Result<Value, ResolverError>,
    delay: Option<Duration>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockVideoResolver {
    /// Answer with `envelope`, a full extraction-service JSON body
    /// (`{"code":0,"msg":"success","data":{...}}`).
    pub fn with_payload(envelope: Value) -> Self {
        Self {
            outcome: Ok(envelope),
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fail every call with `error`.
    pub fn with_error(error: ResolverError) -> Self {
        Self {
            outcome: Err(error),
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sleep before answering (simulates a stalled upstream).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of resolve calls made so far.
    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    /// Links passed to resolve, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.lock_calls().clone()
    }

    fn lock_calls(&self) -> MutexGuard<'_, Vec<String>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl BaseVideoResolver for MockVideoResolver {
    async fn resolve(&self, link: &str) -> Result<UpstreamResult, ResolverError> {
        self.lock_calls().push(link.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let envelope = self.outcome.clone()?;
        let source = Url::parse(MOCK_SOURCE)
            .map_err(|e| ResolverError::Malformed(e.to_string()))?;

        Ok(UpstreamResult {
            source,
            code: envelope.get("code").and_then(Value::as_i64),
            msg: envelope
                .get("msg")
                .and_then(Value::as_str)
                .map(String::from),
            data: envelope.get("data").filter(|d| !d.is_null()).cloned(),
        })
    }
}
