// 密码重置与修改接口

use crate::api::client::ApiClient;
use crate::api::models::password::*;
use crate::error::Result;

/// 密码操作
pub struct PasswordOperations;

impl PasswordOperations {
    /// 申请重置密码，无需登录
    pub async fn request_reset(client: &ApiClient, email: &str) -> Result<()> {
        let request = PasswordResetRequest {
            email: email.to_string(),
        };
        client.post_empty("/passwords/reset", &request).await
    }

    /// 使用邮件中的重置令牌设置新密码
    pub async fn complete_reset(client: &ApiClient, token: &str, new_password: &str) -> Result<()> {
        let reset = PasswordReset {
            password: new_password.to_string(),
        };
        client
            .post_empty(&format!("/passwords/reset/{}", token), &reset)
            .await
    }

    pub async fn change_password(
        client: &ApiClient,
        old_password: &str,
        new_password: &str,
    ) -> Result<()> {
        let change = PasswordChange {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        client.put_empty("/passwords", &change).await
    }
}
