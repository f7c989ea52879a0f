//! Remote data gateway: one async call per backend resource.
//!
//! Every backend response is a `{success, data?, error?}` envelope. There is
//! no retry, caching or offline handling; callers decide whether a failure
//! matters.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::activity::ActivityEvent;
use crate::domain::resource::Resource;

pub mod http;

#[cfg(feature = "test-mocks")]
pub mod mock;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Request rejected: {0}")]
    Rejected(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Response envelope shared by every backend function.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwraps the payload, turning `success: false` into [`GatewayError::Rejected`].
    pub fn into_result(self) -> GatewayResult<Option<T>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(GatewayError::Rejected(
                self.error
                    .unwrap_or_else(|| "unspecified backend error".to_string()),
            ))
        }
    }
}

#[async_trait]
pub trait Gateway: Send + Sync {
    /// Seeds the backend with demo records; idempotent on the backend side.
    async fn initialize_demo_data(&self) -> GatewayResult<()>;
    async fn log_activity(&self, event: &ActivityEvent) -> GatewayResult<()>;
    /// Most recent activity entries, newest first.
    async fn list_activity(&self, limit: usize) -> GatewayResult<Vec<ActivityEvent>>;
    async fn list(&self, resource: Resource) -> GatewayResult<Vec<Value>>;
    async fn kv_get(&self, key: &str) -> GatewayResult<Option<Value>>;
    async fn kv_set(&self, key: &str, value: &Value) -> GatewayResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_envelope_yields_data() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success": true, "data": [1, 2]}"#).unwrap();
        assert_eq!(envelope.into_result().unwrap(), Some(vec![1, 2]));
    }

    #[test]
    fn failed_envelope_carries_backend_error() {
        let envelope: Envelope<Value> =
            serde_json::from_str(r#"{"success": false, "error": "boom"}"#).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert!(matches!(err, GatewayError::Rejected(message) if message == "boom"));
    }

    #[test]
    fn failed_envelope_without_message_still_fails() {
        let envelope: Envelope<Value> = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(envelope.into_result().is_err());
    }
}
