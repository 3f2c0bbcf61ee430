use serde::{Deserialize, Serialize};

/// 缓存的当前用户资料
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CachedUserProfile {
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub cached_at: i64, // Unix timestamp
}
