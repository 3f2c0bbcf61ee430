use serde::{Deserialize, Serialize};

use crate::cache::models::CachedUserProfile;

/// 用户信息
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct User {
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub is_superuser: bool,
}

impl User {
    /// 转成本地缓存的用户资料
    pub fn to_profile(&self, cached_at: i64) -> CachedUserProfile {
        CachedUserProfile {
            username: self.username.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            cached_at,
        }
    }
}

/// 注册新用户请求
#[derive(Debug, Serialize, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// 更新用户请求
#[derive(Debug, Serialize, Clone, Default)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}
