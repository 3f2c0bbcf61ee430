use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

fn default_api_prefix() -> String {
    "/api".to_string()
}

fn default_token_path() -> String {
    "/token".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_storage() -> String {
    "memory".to_string()
}

/// 客户端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 服务端根地址，例如 `https://lists.example.com`
    pub base_url: String,
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    #[serde(default = "default_token_path")]
    pub token_path: String,
    /// 令牌端点要求的 client_id（可选）
    pub client_id: Option<String>,
    /// 登录时请求的 scope（可选）
    pub requested_scope: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub http_timeout_secs: u64,
    /// 距离过期多少秒内即视为已过期，默认 0
    #[serde(default)]
    pub refresh_leeway_secs: u64,
    /// 会话存储位置：`memory`、`redis://...` 或目录路径
    #[serde(default = "default_storage")]
    pub storage: String,
}

impl Config {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_prefix: default_api_prefix(),
            token_path: default_token_path(),
            client_id: None,
            requested_scope: None,
            http_timeout_secs: default_timeout_secs(),
            refresh_leeway_secs: 0,
            storage: default_storage(),
        }
    }

    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let base_url = env::var("API_BASE_URL")
            .map_err(|_| Error::Config("API_BASE_URL 未设置".to_string()))?;

        let mut config = Config::new(&base_url);
        if let Ok(prefix) = env::var("API_PREFIX") {
            config.api_prefix = prefix;
        }
        if let Ok(path) = env::var("TOKEN_PATH") {
            config.token_path = path;
        }
        config.client_id = env::var("CLIENT_ID").ok().filter(|s| !s.is_empty());
        config.requested_scope = env::var("REQUESTED_SCOPE").ok().filter(|s| !s.is_empty());
        config.http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default_timeout_secs());
        config.refresh_leeway_secs = env::var("REFRESH_LEEWAY_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        if let Ok(storage) = env::var("SESSION_STORAGE") {
            config.storage = storage;
        }

        Ok(config)
    }

    pub fn with_client_id(mut self, client_id: &str) -> Self {
        self.client_id = Some(client_id.to_string());
        self
    }

    pub fn with_requested_scope(mut self, scope: &str) -> Self {
        self.requested_scope = Some(scope.to_string());
        self
    }

    pub fn with_refresh_leeway_secs(mut self, secs: u64) -> Self {
        self.refresh_leeway_secs = secs;
        self
    }

    pub fn with_storage(mut self, storage: &str) -> Self {
        self.storage = storage.to_string();
        self
    }

    pub fn token_url(&self) -> String {
        format!("{}{}", self.base_url, self.token_path)
    }

    /// 拼接 REST 接口地址，`path` 以 `/` 开头
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.api_prefix, path)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// 超出范围时取最大值，令牌总是被视为需要刷新
    pub fn refresh_leeway(&self) -> chrono::Duration {
        i64::try_from(self.refresh_leeway_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }
}
