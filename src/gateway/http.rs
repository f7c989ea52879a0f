//! HTTP implementation of [`Gateway`] against the backend functions origin.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::domain::activity::ActivityEvent;
use crate::domain::resource::Resource;
use crate::gateway::{Envelope, Gateway, GatewayError, GatewayResult};

/// Gateway calling the backend over HTTPS with a static bearer token.
#[derive(Clone)]
pub struct HttpGateway {
    http: Client,
    base_url: String,
    token: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> GatewayResult<Self> {
        let http = Client::builder()
            .build()
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}/{}", self.base_url, path))
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
    }

    /// Sends the request and unwraps the response envelope.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> GatewayResult<Option<T>> {
        let response = request
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        response
            .json::<Envelope<T>>()
            .await
            .map_err(|err| GatewayError::Decode(err.to_string()))?
            .into_result()
    }

    async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> GatewayResult<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(method, path).json(body)).await
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn initialize_demo_data(&self) -> GatewayResult<()> {
        self.send::<Value>(self.request(Method::POST, "init-demo-data"))
            .await
            .map(|_| ())
    }

    async fn log_activity(&self, event: &ActivityEvent) -> GatewayResult<()> {
        self.send_json::<_, Value>(Method::POST, "activity", event)
            .await
            .map(|_| ())
    }

    async fn list_activity(&self, limit: usize) -> GatewayResult<Vec<ActivityEvent>> {
        let request = self
            .request(Method::GET, "activity")
            .query(&[("limit", limit)]);
        Ok(self.send(request).await?.unwrap_or_default())
    }

    async fn list(&self, resource: Resource) -> GatewayResult<Vec<Value>> {
        Ok(self
            .send(self.request(Method::GET, resource.as_str()))
            .await?
            .unwrap_or_default())
    }

    async fn kv_get(&self, key: &str) -> GatewayResult<Option<Value>> {
        self.send(self.request(Method::GET, &format!("kv/{key}")))
            .await
    }

    async fn kv_set(&self, key: &str, value: &Value) -> GatewayResult<()> {
        self.send_json::<_, Value>(Method::PUT, &format!("kv/{key}"), &json!({ "value": value }))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let gateway = HttpGateway::new("https://backend.example.com/functions/v1/", "token")
            .unwrap();
        assert_eq!(gateway.base_url, "https://backend.example.com/functions/v1");
    }
}
