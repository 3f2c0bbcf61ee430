//! 会话上下文
//!
//! 登录状态的唯一持有者。所有使用方共享同一个 `Arc<SessionContext>`，
//! 只能通过这里读取副本或订阅变化，不能直接修改记录。

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{Mutex, watch};

use super::token::{HttpTokenClient, TokenEndpoint};
use crate::cache::models::{SessionRecord, SessionSnapshot};
use crate::cache::operations::{SelectionStore, TokenStore};
use crate::cache::storage::{Storage, open_storage};
use crate::config::Config;
use crate::error::Result;

pub struct SessionContext {
    tokens: TokenStore,
    selections: SelectionStore,
    endpoint: Arc<dyn TokenEndpoint>,
    refresh_lock: Mutex<()>,
    refresh_leeway: chrono::Duration,
}

impl SessionContext {
    pub async fn new(
        config: &Config,
        storage: Arc<dyn Storage>,
        endpoint: Arc<dyn TokenEndpoint>,
    ) -> Self {
        Self {
            tokens: TokenStore::open(storage.clone()).await,
            selections: SelectionStore::new(storage),
            endpoint,
            refresh_lock: Mutex::new(()),
            refresh_leeway: config.refresh_leeway(),
        }
    }

    /// 按配置打开存储并使用 HTTP 令牌端点
    pub async fn from_config(config: &Config, http_client: reqwest::Client) -> Result<Arc<Self>> {
        let storage = open_storage(&config.storage)?;
        let endpoint = Arc::new(HttpTokenClient::new(config, http_client));
        Ok(Arc::new(Self::new(config, storage, endpoint).await))
    }

    /// 密码登录，成功后写入会话记录
    ///
    /// 失败时不改动已有记录。
    pub async fn login(&self, username: &str, password: &str) -> Result<Arc<SessionSnapshot>> {
        let grant = match self.endpoint.password_grant(username, password).await {
            Ok(grant) => grant,
            Err(e) => {
                tracing::warn!(username = %username, error = %e, "Login failed");
                return Err(e);
            }
        };

        let record = SessionRecord::from_grant(username, grant, Utc::now());
        self.tokens.set(record).await?;

        tracing::info!(username = %username, "User logged in");
        Ok(self.tokens.snapshot())
    }

    /// 登出：尽力吊销访问令牌，然后清空会话和选择状态
    pub async fn logout(&self) -> Result<()> {
        let record = self.tokens.get().await;
        if let Some(access_token) = record.access_token.as_deref() {
            if let Err(e) = self.endpoint.revoke(access_token).await {
                tracing::warn!(error = %e, "Token revocation failed, clearing session anyway");
            }
        }

        self.tokens.clear().await?;
        self.selections.clear().await?;

        tracing::info!(username = ?record.username, "User logged out");
        Ok(())
    }

    /// 当前会话的只读副本
    pub fn current(&self) -> Arc<SessionSnapshot> {
        self.tokens.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<SessionSnapshot>> {
        self.tokens.subscribe()
    }

    /// 当前会话是否满足 `required` 中的全部权限
    pub fn is_authorized(&self, required: &str) -> bool {
        self.current().is_authorized(required)
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn selections(&self) -> &SelectionStore {
        &self.selections
    }

    pub(crate) fn endpoint(&self) -> &dyn TokenEndpoint {
        self.endpoint.as_ref()
    }

    pub(crate) fn refresh_lock(&self) -> &Mutex<()> {
        &self.refresh_lock
    }

    pub(crate) fn refresh_leeway(&self) -> chrono::Duration {
        self.refresh_leeway
    }

    /// 强制登出，不调用吊销接口
    pub(crate) async fn discard(&self) {
        if let Err(e) = self.tokens.clear().await {
            tracing::error!(error = %e, "Failed to clear session record");
        }
        if let Err(e) = self.selections.clear().await {
            tracing::error!(error = %e, "Failed to clear cached selections");
        }
    }
}
