// 清单共享接口

use crate::api::client::ApiClient;
use crate::api::models::share::*;
use crate::error::Result;

/// 共享与邀请操作
pub struct ShareOperations;

impl ShareOperations {
    pub async fn list_shares(client: &ApiClient, list_id: i64) -> Result<Vec<Share>> {
        client.get(&format!("/lists/{}/shares", list_id)).await
    }

    /// 向邮箱发送清单邀请
    pub async fn invite(client: &ApiClient, list_id: i64, email: &str, admin: bool) -> Result<Share> {
        let invitation = Invitation {
            email: email.to_string(),
            admin,
        };
        let share: Share = client
            .post(&format!("/lists/{}/shares", list_id), &invitation)
            .await?;
        tracing::info!("已邀请 {} 加入清单 {}", email, list_id);
        Ok(share)
    }

    /// 接受邀请
    ///
    /// 新授予的权限要等下一次换取令牌后才会出现在会话的授权范围里。
    pub async fn accept_invitation(client: &ApiClient, token: &str) -> Result<Share> {
        client
            .post(&format!("/shares/{}", token), &serde_json::json!({}))
            .await
    }

    pub async fn revoke_share(client: &ApiClient, list_id: i64, username: &str) -> Result<()> {
        client
            .delete(&format!("/lists/{}/shares/{}", list_id, username))
            .await
    }
}
