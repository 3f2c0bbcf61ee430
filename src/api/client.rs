use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::session::SessionContext;
use crate::config::Config;
use crate::error::Result;
use crate::middleware::{RefreshInterceptor, check_response};

/// REST 客户端
///
/// 所有请求先经过 [`RefreshInterceptor`] 附加认证信息，再统一检查响应状态。
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<Config>,
    http_client: reqwest::Client,
    session: Arc<SessionContext>,
    interceptor: RefreshInterceptor,
}

impl ApiClient {
    pub fn new(config: Config, http_client: reqwest::Client, session: Arc<SessionContext>) -> Self {
        Self {
            config: Arc::new(config),
            http_client,
            interceptor: RefreshInterceptor::new(session.clone()),
            session,
        }
    }

    /// 按配置创建 HTTP 客户端、存储和会话上下文
    pub async fn connect(config: Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()?;
        let session = SessionContext::from_config(&config, http_client.clone()).await?;
        Ok(Self::new(config, http_client, session))
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        Ok(response.json().await?)
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .execute(self.request(Method::POST, path).json(body))
            .await?;
        Ok(response.json().await?)
    }

    /// 不关心响应体的 POST
    pub async fn post_empty<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.execute(self.request(Method::POST, path).json(body))
            .await?;
        Ok(())
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .execute(self.request(Method::PUT, path).json(body))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn put_empty<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.execute(self.request(Method::PUT, path).json(body))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client.request(method, self.config.api_url(path))
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let request = self.interceptor.authorize(request).await;
        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, "API request failed to send");
            e
        })?;
        check_response(response).await
    }
}
