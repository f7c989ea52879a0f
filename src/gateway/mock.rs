//! Mock gateway for isolating services and routes in tests.

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use crate::domain::activity::ActivityEvent;
use crate::domain::resource::Resource;
use crate::gateway::{Gateway, GatewayResult};

mock! {
    pub Gateway {}

    #[async_trait]
    impl Gateway for Gateway {
        async fn initialize_demo_data(&self) -> GatewayResult<()>;
        async fn log_activity(&self, event: &ActivityEvent) -> GatewayResult<()>;
        async fn list_activity(&self, limit: usize) -> GatewayResult<Vec<ActivityEvent>>;
        async fn list(&self, resource: Resource) -> GatewayResult<Vec<Value>>;
        async fn kv_get(&self, key: &str) -> GatewayResult<Option<Value>>;
        async fn kv_set(&self, key: &str, value: &Value) -> GatewayResult<()>;
    }
}
