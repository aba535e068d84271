//! HTTP client adapter: runs core requests over the network.
//!
//! # Design
//! `UreqTransport` is the blocking [`Transport`] used in production. `Api`
//! pairs it with an `ItemsClient` and moves every exchange onto tokio's
//! blocking pool, so the event loop only ever suspends at the network
//! boundary.

use std::sync::Arc;
use std::time::Duration;

use items_core::{
    ClientError, HttpMethod, HttpRequest, HttpResponse, Item, ItemId, ItemsClient, NewItem, Transport,
    TransportError,
};
use tracing::debug;

/// Blocking transport backed by a shared ureq agent.
///
/// Status codes are returned as data; only failures to exchange the
/// request at all become `TransportError`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let failed = |reason: String| TransportError {
            method: req.method.as_str(),
            url: req.path.clone(),
            reason,
        };

        let result = match req.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&req.path);
                for (key, value) in &req.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Delete => {
                let mut builder = self.agent.delete(&req.path);
                for (key, value) in &req.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(&req.path);
                for (key, value) in &req.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                match req.body.as_deref() {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };
        let mut response = result.map_err(|e| failed(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(key, value)| Some((key.as_str().to_string(), value.to_str().ok()?.to_string())))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| failed(format!("reading body: {e}")))?;

        Ok(HttpResponse { status, headers, body })
    }
}

/// Async facade over the items API.
#[derive(Clone)]
pub struct Api {
    client: ItemsClient,
    transport: Arc<dyn Transport + Send + Sync>,
}

impl Api {
    pub fn new(client: ItemsClient, transport: Arc<dyn Transport + Send + Sync>) -> Self {
        Self { client, transport }
    }

    pub async fn health(&self) -> Result<(), ClientError> {
        let response = self.exchange(self.client.build_health()).await?;
        Ok(self.client.parse_health(response)?)
    }

    pub async fn list_items(&self) -> Result<Vec<Item>, ClientError> {
        let response = self.exchange(self.client.build_list_items()).await?;
        Ok(self.client.parse_list_items(response)?)
    }

    pub async fn create_item(&self, input: &NewItem) -> Result<(), ClientError> {
        let request = self.client.build_create_item(input)?;
        let response = self.exchange(request).await?;
        Ok(self.client.parse_create_item(response)?)
    }

    pub async fn delete_item(&self, id: ItemId) -> Result<(), ClientError> {
        let response = self.exchange(self.client.build_delete_item(id)).await?;
        Ok(self.client.parse_delete_item(response)?)
    }

    async fn exchange(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!(method = request.method.as_str(), url = %request.path, "sending request");
        let method = request.method.as_str();
        let url = request.path.clone();
        let transport = Arc::clone(&self.transport);
        let response = tokio::task::spawn_blocking(move || transport.execute(&request))
            .await
            .map_err(|e| TransportError {
                method,
                url,
                reason: format!("request task failed: {e}"),
            })??;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}
