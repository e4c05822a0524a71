//! Oneshot HTTP 客户端 - 内存通信 (Local Mode)
//!
//! 使用 Tower Service 的 oneshot 模式直接调用 Router，
//! 适用于同进程的服务器-客户端通信，零网络开销。
//!
//! 需要启用 "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

use crate::error::status_to_error;
use crate::http::RestClient;
use crate::{ClientError, ClientResult};

/// Oneshot HTTP 客户端 (内存调用)
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use saffron_client::OneshotHttpClient;
///
/// let router: Router = build_app(&state).with_state(state);
/// let client = OneshotHttpClient::new(router);
///
/// // 直接内存调用，无网络开销
/// let menu: Vec<MenuItem> = client.get("/api/menu").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Arc<RwLock<Router>>,
    token: Arc<RwLock<Option<String>>>,
}

impl OneshotHttpClient {
    /// 创建新的 Oneshot HTTP 客户端
    ///
    /// # Arguments
    /// * `router` - 已初始化的 Axum Router (with_state 已调用)
    pub fn new(router: Router) -> Self {
        Self {
            router: Arc::new(RwLock::new(router)),
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// 构建带认证头的请求
    async fn build_request(
        &self,
        method: http::Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = self.token.read().await.clone() {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        let body = match body {
            Some(bytes) => Body::from(bytes),
            None => Body::empty(),
        };

        builder
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ClientError::InvalidResponse(format!("Failed to build request: {e}")))
    }

    /// 发送请求并解析响应
    async fn dispatch<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let router = self.router.read().await.clone();
        let response = router
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {e}")))?;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("Failed to read body: {e}")))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes).to_string();
            return Err(status_to_error(status, text));
        }

        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}

#[async_trait]
impl RestClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(http::Method::GET, path, None).await?;
        self.dispatch(request).await
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = self
            .build_request(http::Method::POST, path, Some(bytes))
            .await?;
        self.dispatch(request).await
    }

    async fn post_empty<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(http::Method::POST, path, None).await?;
        self.dispatch(request).await
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = self
            .build_request(http::Method::PUT, path, Some(bytes))
            .await?;
        self.dispatch(request).await
    }

    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(http::Method::DELETE, path, None).await?;
        self.dispatch(request).await
    }

    async fn set_token(&self, token: Option<String>) {
        let mut guard = self.token.write().await;
        *guard = token;
    }

    async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }
}
