use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cache::keys::{
    CURRENT_CATEGORY_KEY, CURRENT_ITEM_KEY, CURRENT_LIST_KEY, SELECTION_KEYS, USER_PROFILE_KEY,
};
use crate::cache::models::{CachedUserProfile, Selection};
use crate::cache::storage::Storage;
use crate::error::Result;

/// 界面选择状态与用户资料缓存
#[derive(Clone)]
pub struct SelectionStore {
    storage: Arc<dyn Storage>,
}

impl SelectionStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn current_list(&self) -> Option<i64> {
        self.read(CURRENT_LIST_KEY).await
    }

    pub async fn set_current_list(&self, list_id: Option<i64>) -> Result<()> {
        self.write(CURRENT_LIST_KEY, list_id.as_ref()).await
    }

    pub async fn current_category(&self) -> Option<i64> {
        self.read(CURRENT_CATEGORY_KEY).await
    }

    pub async fn set_current_category(&self, category_id: Option<i64>) -> Result<()> {
        self.write(CURRENT_CATEGORY_KEY, category_id.as_ref()).await
    }

    pub async fn current_item(&self) -> Option<i64> {
        self.read(CURRENT_ITEM_KEY).await
    }

    pub async fn set_current_item(&self, item_id: Option<i64>) -> Result<()> {
        self.write(CURRENT_ITEM_KEY, item_id.as_ref()).await
    }

    pub async fn selection(&self) -> Selection {
        Selection {
            list_id: self.current_list().await,
            category_id: self.current_category().await,
            item_id: self.current_item().await,
        }
    }

    pub async fn user_profile(&self) -> Option<CachedUserProfile> {
        self.read(USER_PROFILE_KEY).await
    }

    pub async fn set_user_profile(&self, profile: &CachedUserProfile) -> Result<()> {
        self.write(USER_PROFILE_KEY, Some(profile)).await
    }

    /// 清除全部选择状态和用户资料
    pub async fn clear(&self) -> Result<()> {
        for key in SELECTION_KEYS {
            self.storage.remove(key).await?;
        }
        Ok(())
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let json = match self.storage.load(key).await {
            Ok(json) => json?,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read cached value");
                return None;
            }
        };
        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Ignoring corrupt cached value");
                None
            }
        }
    }

    /// `None` 表示删除该键
    async fn write<T: Serialize>(&self, key: &str, value: Option<&T>) -> Result<()> {
        match value {
            Some(value) => {
                let json = serde_json::to_string(value)?;
                self.storage.save(key, &json).await
            }
            None => self.storage.remove(key).await,
        }
    }
}
