//! 令牌端点客户端：密码授权、刷新授权和令牌吊销。

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use tracing::{debug, error};

use crate::cache::models::TokenGrant;
use crate::config::Config;
use crate::error::{Error, Result};

/// 令牌端点
///
/// `HttpTokenClient` 为默认实现，测试中可替换为内存实现。
#[async_trait]
pub trait TokenEndpoint: Send + Sync {
    /// 用户名密码换取令牌
    async fn password_grant(&self, username: &str, password: &str) -> Result<TokenGrant>;

    /// 用 refresh token 换取新的令牌
    async fn refresh_grant(&self, refresh_token: &str) -> Result<TokenGrant>;

    /// 吊销访问令牌
    async fn revoke(&self, access_token: &str) -> Result<()>;
}

/// 基于 reqwest 的令牌端点实现
pub struct HttpTokenClient {
    http_client: reqwest::Client,
    token_url: String,
    client_id: Option<String>,
    requested_scope: Option<String>,
}

impl HttpTokenClient {
    pub fn new(config: &Config, http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            token_url: config.token_url(),
            client_id: config.client_id.clone(),
            requested_scope: config.requested_scope.clone(),
        }
    }

    async fn exchange(&self, params: Vec<(&str, &str)>) -> Result<TokenGrant> {
        let response = self
            .http_client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Token endpoint request failed");
                Error::Network(e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Token exchange rejected");
            return Err(Error::TokenExchange { status, body });
        }

        let grant: TokenGrant = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to decode token response");
            Error::Network(e)
        })?;

        debug!(expires_in = ?grant.expires_in, "Token exchange succeeded");
        Ok(grant)
    }
}

#[async_trait]
impl TokenEndpoint for HttpTokenClient {
    async fn password_grant(&self, username: &str, password: &str) -> Result<TokenGrant> {
        debug!(username = %username, token_url = %self.token_url, "Requesting password grant");

        let mut params = vec![
            ("grant_type", "password"),
            ("username", username),
            ("password", password),
        ];
        if let Some(client_id) = &self.client_id {
            params.push(("client_id", client_id.as_str()));
        }
        if let Some(scope) = &self.requested_scope {
            params.push(("scope", scope.as_str()));
        }
        self.exchange(params).await
    }

    async fn refresh_grant(&self, refresh_token: &str) -> Result<TokenGrant> {
        debug!(token_url = %self.token_url, "Requesting refresh grant");

        let mut params = vec![
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ];
        if let Some(client_id) = &self.client_id {
            params.push(("client_id", client_id.as_str()));
        }
        self.exchange(params).await
    }

    async fn revoke(&self, access_token: &str) -> Result<()> {
        let response = self
            .http_client
            .delete(&self.token_url)
            .header(AUTHORIZATION, format!("Bearer {}", access_token))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::TokenExchange { status, body });
        }
        debug!("Access token revoked");
        Ok(())
    }
}
