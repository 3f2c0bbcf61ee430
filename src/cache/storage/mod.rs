//! 键值持久化后端
//!
//! 会话记录和界面选择状态都以 JSON 字符串的形式保存在某个后端中。

mod file;
mod memory;
mod redis_store;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use redis_store::RedisStorage;

/// 字符串键值存储
#[async_trait]
pub trait Storage: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<String>>;

    async fn save(&self, key: &str, value: &str) -> Result<()>;

    async fn remove(&self, key: &str) -> Result<()>;
}

/// 根据配置字符串选择后端：`memory`、`redis://...`/`rediss://...`，其余视为目录路径
pub fn open_storage(location: &str) -> Result<Arc<dyn Storage>> {
    let location = location.trim();
    if location.is_empty() || location == "memory" {
        tracing::debug!("Using in-memory session storage");
        return Ok(Arc::new(MemoryStorage::new()));
    }
    if location.starts_with("redis://") || location.starts_with("rediss://") {
        tracing::debug!("Using redis session storage");
        return Ok(Arc::new(RedisStorage::open(location, "listshare")?));
    }
    tracing::debug!(dir = %location, "Using file session storage");
    Ok(Arc::new(FileStorage::new(location)))
}
