// 用户接口

use crate::api::client::ApiClient;
use crate::api::models::user::*;
use crate::error::{Error, Result};

/// 用户操作
pub struct UserOperations;

impl UserOperations {
    pub async fn list_users(client: &ApiClient) -> Result<Vec<User>> {
        client.get("/users").await
    }

    pub async fn get_user(client: &ApiClient, username: &str) -> Result<User> {
        client.get(&format!("/users/{}", username)).await
    }

    /// 注册新用户，无需登录
    pub async fn register_user(client: &ApiClient, user: &NewUser) -> Result<User> {
        let created: User = client.post("/users", user).await?;
        tracing::info!("注册用户成功: {}", created.username);
        Ok(created)
    }

    pub async fn update_user(client: &ApiClient, username: &str, update: &UserUpdate) -> Result<User> {
        let updated: User = client.put(&format!("/users/{}", username), update).await?;
        if client.session().current().username() == Some(username) {
            Self::cache_profile(client, &updated).await;
        }
        Ok(updated)
    }

    pub async fn delete_user(client: &ApiClient, username: &str) -> Result<()> {
        client.delete(&format!("/users/{}", username)).await
    }

    /// 获取当前登录用户并缓存其资料
    pub async fn current_user(client: &ApiClient) -> Result<User> {
        let snapshot = client.session().current();
        let Some(username) = snapshot.username() else {
            return Err(Error::Unauthorized("尚未登录".to_string()));
        };

        let user = Self::get_user(client, username).await?;
        Self::cache_profile(client, &user).await;
        Ok(user)
    }

    async fn cache_profile(client: &ApiClient, user: &User) {
        let profile = user.to_profile(chrono::Utc::now().timestamp());
        if let Err(e) = client.session().selections().set_user_profile(&profile).await {
            tracing::warn!("缓存用户资料失败: {}", e);
        }
    }
}
