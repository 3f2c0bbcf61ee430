use std::sync::Arc;

use chrono::Utc;
use reqwest::RequestBuilder;
use tracing::{debug, warn};

use crate::auth::session::SessionContext;
use crate::cache::models::SessionRecord;

/// 携带用户名的请求头
pub const USERNAME_HEADER: &str = "X-Username";

/// 请求前的令牌刷新拦截器
///
/// 每个出站请求都先经过这里：
/// - 没有访问令牌：不加认证头直接放行
/// - 令牌未过期：附加 Bearer 令牌和用户名头
/// - 令牌已过期且有 refresh token：换取新令牌、写回会话后附加
/// - 令牌端点拒绝刷新（4xx）或无法刷新：记录日志、清空会话，以未认证身份放行，由下游返回授权错误
/// - 网络错误或 5xx：保留会话，本次请求以未认证身份放行，下次请求再尝试刷新
///
/// 刷新在会话的刷新锁内串行执行，等锁的请求直接复用刚换到的令牌。
#[derive(Clone)]
pub struct RefreshInterceptor {
    session: Arc<SessionContext>,
}

impl RefreshInterceptor {
    pub fn new(session: Arc<SessionContext>) -> Self {
        Self { session }
    }

    pub async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.usable_record().await {
            Some(record) => attach_credentials(request, &record),
            None => request,
        }
    }

    /// 返回带有可用访问令牌的记录，必要时先刷新
    pub async fn usable_record(&self) -> Option<SessionRecord> {
        let record = self.session.tokens().get().await;
        if !record.has_access_token() {
            return None;
        }
        if !record.is_expired(Utc::now(), self.session.refresh_leeway()) {
            return Some(record);
        }
        self.refresh().await
    }

    async fn refresh(&self) -> Option<SessionRecord> {
        let _guard = self.session.refresh_lock().lock().await;

        // 等锁期间可能已有其他请求完成了刷新，或者刷新失败已清空会话
        let current = self.session.tokens().get().await;
        if !current.has_access_token() {
            return None;
        }
        if !current.is_expired(Utc::now(), self.session.refresh_leeway()) {
            debug!("Reusing token refreshed by a concurrent request");
            return Some(current);
        }

        let Some(refresh_token) = current.refresh_token.clone() else {
            warn!(username = ?current.username, "Access token expired without refresh token, logging out");
            self.session.discard().await;
            return None;
        };

        match self.session.endpoint().refresh_grant(&refresh_token).await {
            Ok(grant) => {
                let updated = current.with_refreshed(grant, Utc::now());
                if let Err(e) = self.session.tokens().set(updated.clone()).await {
                    warn!(error = %e, "Failed to persist refreshed session");
                }
                debug!(username = ?updated.username, "Access token refreshed");
                Some(updated)
            }
            Err(e) if e.is_grant_rejected() => {
                warn!(error = %e, "Refresh token rejected, logging out");
                self.session.discard().await;
                None
            }
            Err(e) => {
                warn!(error = %e, "Token refresh failed, keeping session and sending request unauthenticated");
                None
            }
        }
    }
}

fn attach_credentials(request: RequestBuilder, record: &SessionRecord) -> RequestBuilder {
    let Some(access_token) = record.access_token.as_deref() else {
        return request;
    };
    let request = request.bearer_auth(access_token);
    match record.username.as_deref() {
        Some(username) => request.header(USERNAME_HEADER, username),
        None => request,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attaches_bearer_and_username() {
        let record = SessionRecord {
            access_token: Some("a1".to_string()),
            username: Some("alice".to_string()),
            logged_in: true,
            ..Default::default()
        };
        let request = attach_credentials(reqwest::Client::new().get("http://localhost/api/lists"), &record)
            .build()
            .unwrap();

        assert_eq!(request.headers()["authorization"], "Bearer a1");
        assert_eq!(request.headers()[USERNAME_HEADER], "alice");
    }

    #[test]
    fn tokenless_record_adds_nothing() {
        let request = attach_credentials(
            reqwest::Client::new().get("http://localhost/api/lists"),
            &SessionRecord::default(),
        )
        .build()
        .unwrap();

        assert!(request.headers().get("authorization").is_none());
        assert!(request.headers().get(USERNAME_HEADER).is_none());
    }
}
