//! HTTP client for network-based API calls
//!
//! [`RestClient`] is the transport seam: the network client here and the
//! in-process oneshot client (behind the `in-process` feature) both
//! implement it, so the per-resource services work over either.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::status_to_error;
use crate::{ClientConfig, ClientResult};

/// Transport trait implemented by the network and in-process clients
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Make a GET request
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;

    /// Make a POST request without body
    async fn post_empty<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;

    /// Make a PUT request with JSON body
    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;

    /// Make a DELETE request
    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;

    /// Replace the authentication token
    async fn set_token(&self, token: Option<String>);

    /// Get the current token
    async fn token(&self) -> Option<String>;
}

/// HTTP client for making network requests to the Saffron server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: Arc::new(RwLock::new(config.token.clone())),
        }
    }

    /// Build the full URL for an API path
    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    async fn auth_header(&self) -> Option<String> {
        self.token
            .read()
            .await
            .as_ref()
            .map(|t| format!("Bearer {}", t))
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            tracing::debug!(status = %status, "API request failed");
            return Err(status_to_error(status, text));
        }

        response.json().await.map_err(Into::into)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        mut request: reqwest::RequestBuilder,
    ) -> ClientResult<T> {
        if let Some(auth) = self.auth_header().await {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }
}

#[async_trait]
impl RestClient for HttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.get(self.url(path))).await
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    async fn post_empty<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.post(self.url(path))).await
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.delete(self.url(path))).await
    }

    async fn set_token(&self, token: Option<String>) {
        let mut guard = self.token.write().await;
        *guard = token;
    }

    async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }
}
