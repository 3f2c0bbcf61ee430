use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};

use super::Storage;
use crate::cache::keys::namespaced_key;
use crate::error::Result;

/// Redis 存储，键不设过期时间
pub struct RedisStorage {
    redis: Arc<RedisClient>,
    prefix: String,
}

impl RedisStorage {
    pub fn new(redis: Arc<RedisClient>, prefix: &str) -> Self {
        Self {
            redis,
            prefix: prefix.to_string(),
        }
    }

    pub fn open(url: &str, prefix: &str) -> Result<Self> {
        let client = RedisClient::open(url)?;
        Ok(Self::new(Arc::new(client), prefix))
    }
}

#[async_trait]
impl Storage for RedisStorage {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let result: Option<String> = conn.get(namespaced_key(&self.prefix, key)).await?;
        Ok(result)
    }

    async fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let _: () = conn.set(namespaced_key(&self.prefix, key), value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let _: () = conn.del(namespaced_key(&self.prefix, key)).await?;
        Ok(())
    }
}
