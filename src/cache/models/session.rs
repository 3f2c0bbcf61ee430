use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::token::TokenGrant;
use crate::auth::scope::Scopes;

/// 持久化的会话记录
///
/// 空记录即未登录状态。`logged_in` 只在访问令牌存在且未确认过期时为真，
/// 从存储读出后由 [`SessionRecord::normalized`] 重新计算。
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SessionRecord {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub logged_in: bool,
    pub username: Option<String>,
    /// 以空格分隔的授权范围
    pub scope: Option<String>,
}

impl SessionRecord {
    /// 由密码授权的响应构造已登录记录
    pub fn from_grant(username: &str, grant: TokenGrant, now: DateTime<Utc>) -> Self {
        let record = Self {
            access_token: Some(grant.access_token),
            refresh_token: grant.refresh_token,
            expires_at: expiry_from(grant.expires_in, now),
            logged_in: false,
            username: Some(username.to_string()),
            scope: grant.scope,
        };
        record.normalized(now)
    }

    /// 用刷新授权的响应更新记录
    ///
    /// 服务端未返回新的 refresh token 时沿用旧值；未返回 scope 时保留原授权范围。
    pub fn with_refreshed(&self, grant: TokenGrant, now: DateTime<Utc>) -> Self {
        let record = Self {
            access_token: Some(grant.access_token),
            refresh_token: grant.refresh_token.or_else(|| self.refresh_token.clone()),
            expires_at: expiry_from(grant.expires_in, now),
            logged_in: false,
            username: self.username.clone(),
            scope: grant.scope.or_else(|| self.scope.clone()),
        };
        record.normalized(now)
    }

    /// 过期时间减去 `leeway` 后不晚于 `now` 即视为过期；没有过期时间则不算过期
    pub fn is_expired(&self, now: DateTime<Utc>, leeway: Duration) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at
                .checked_sub_signed(leeway)
                .is_none_or(|deadline| deadline <= now),
            None => false,
        }
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// 访问令牌存在且在 `now` 时未确认过期
    pub fn is_logged_in_at(&self, now: DateTime<Utc>) -> bool {
        self.has_access_token() && !self.is_expired(now, Duration::zero())
    }

    /// 按当前时间重新计算 `logged_in`
    pub fn normalized(mut self, now: DateTime<Utc>) -> Self {
        self.logged_in = self.is_logged_in_at(now);
        self
    }

    pub fn bearer_header(&self) -> Option<String> {
        self.access_token.as_ref().map(|t| format!("Bearer {}", t))
    }
}

/// 会话记录及其解析后的授权范围
///
/// 观察者拿到的是只读副本，授权字符串在构造时解析一次。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub record: SessionRecord,
    pub scopes: Scopes,
}

impl SessionSnapshot {
    pub fn new(record: SessionRecord) -> Self {
        let scopes = Scopes::parse(record.scope.as_deref().unwrap_or_default());
        Self { record, scopes }
    }

    /// 快照会被长期持有，登录状态每次按当前时间判定，不依赖写入时的 `logged_in`
    pub fn is_logged_in(&self) -> bool {
        self.record.is_logged_in_at(Utc::now())
    }

    pub fn username(&self) -> Option<&str> {
        self.record.username.as_deref()
    }

    /// 未登录时任何查询都不满足；已登录时按授权范围判定，空查询总是满足
    pub fn is_authorized(&self, required: &str) -> bool {
        self.is_logged_in() && self.scopes.satisfies(required)
    }
}

/// 超出可表示范围的 `expires_in` 按没有过期时间处理
fn expiry_from(expires_in: Option<u64>, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let secs = i64::try_from(expires_in?).ok()?;
    Duration::try_seconds(secs).and_then(|lifetime| now.checked_add_signed(lifetime))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grant(access: &str, refresh: Option<&str>, expires_in: Option<u64>) -> TokenGrant {
        TokenGrant {
            access_token: access.to_string(),
            refresh_token: refresh.map(str::to_string),
            expires_in,
            scope: Some("list:1 admin:1".to_string()),
            token_type: Some("bearer".to_string()),
        }
    }

    #[test]
    fn default_is_logged_out() {
        let record = SessionRecord::default();
        assert!(!record.logged_in);
        assert!(record.access_token.is_none());
        assert!(record.bearer_header().is_none());
    }

    #[test]
    fn from_grant_is_logged_in() {
        let now = Utc::now();
        let record = SessionRecord::from_grant("alice", grant("a1", Some("r1"), Some(3600)), now);
        assert!(record.logged_in);
        assert_eq!(record.username.as_deref(), Some("alice"));
        assert_eq!(record.expires_at, Some(now + Duration::seconds(3600)));
        assert_eq!(record.bearer_header().as_deref(), Some("Bearer a1"));
    }

    #[test]
    fn missing_expiry_is_never_expired() {
        let now = Utc::now();
        let record = SessionRecord::from_grant("alice", grant("a1", None, None), now);
        assert!(!record.is_expired(now + Duration::days(365), Duration::zero()));
        assert!(record.logged_in);
    }

    #[test]
    fn expiry_boundary_counts_as_expired() {
        let now = Utc::now();
        let record = SessionRecord::from_grant("alice", grant("a1", None, Some(60)), now);
        assert!(!record.is_expired(now + Duration::seconds(59), Duration::zero()));
        assert!(record.is_expired(now + Duration::seconds(60), Duration::zero()));
        assert!(record.is_expired(now + Duration::seconds(31), Duration::seconds(30)));
    }

    #[test]
    fn oversized_expires_in_means_no_expiry() {
        let now = Utc::now();
        for expires_in in [10_000_000_000_000, u64::MAX] {
            let record =
                SessionRecord::from_grant("alice", grant("a1", None, Some(expires_in)), now);
            assert!(record.expires_at.is_none());
            assert!(record.logged_in);
            assert!(!record.is_expired(now, Duration::zero()));
        }

        let refreshed = SessionRecord::default().with_refreshed(grant("a2", None, Some(u64::MAX)), now);
        assert!(refreshed.expires_at.is_none());
        assert!(refreshed.logged_in);
    }

    #[test]
    fn huge_leeway_counts_as_expired() {
        let now = Utc::now();
        let record = SessionRecord::from_grant("alice", grant("a1", None, Some(60)), now);
        assert!(record.is_expired(now, Duration::MAX));
    }

    #[test]
    fn refreshed_reuses_refresh_token_and_username() {
        let now = Utc::now();
        let record = SessionRecord::from_grant("alice", grant("a1", Some("r1"), Some(60)), now);
        let mut next = grant("a2", None, Some(120));
        next.scope = None;
        let refreshed = record.with_refreshed(next, now);
        assert_eq!(refreshed.access_token.as_deref(), Some("a2"));
        assert_eq!(refreshed.refresh_token.as_deref(), Some("r1"));
        assert_eq!(refreshed.username.as_deref(), Some("alice"));
        assert_eq!(refreshed.scope.as_deref(), Some("list:1 admin:1"));
        assert!(refreshed.logged_in);
    }

    #[test]
    fn normalized_clears_stale_flag() {
        let now = Utc::now();
        let stale = SessionRecord {
            access_token: Some("a1".to_string()),
            expires_at: Some(now - Duration::seconds(1)),
            logged_in: true,
            ..Default::default()
        };
        assert!(!stale.normalized(now).logged_in);

        let tokenless = SessionRecord {
            logged_in: true,
            ..Default::default()
        };
        assert!(!tokenless.normalized(now).logged_in);
    }

    #[test]
    fn snapshot_authorization() {
        let now = Utc::now();
        let mut g = grant("a1", None, Some(60));
        g.scope = Some("list:42".to_string());
        let snapshot = SessionSnapshot::new(SessionRecord::from_grant("alice", g, now));
        assert!(snapshot.is_authorized(""));
        assert!(snapshot.is_authorized("list:42"));
        assert!(!snapshot.is_authorized("list:42 admin:42"));

        let logged_out = SessionSnapshot::new(SessionRecord {
            scope: Some("superuser".to_string()),
            ..Default::default()
        });
        assert!(!logged_out.is_authorized(""));
        assert!(!logged_out.is_authorized("list:1"));
    }

    #[test]
    fn snapshot_logs_out_once_token_expires() {
        let now = Utc::now();
        let mut g = grant("a1", Some("r1"), Some(60));
        g.scope = Some("list:42".to_string());
        let record = SessionRecord::from_grant("alice", g, now - Duration::seconds(120));
        assert!(record.logged_in);

        let snapshot = SessionSnapshot::new(record);
        assert!(!snapshot.is_logged_in());
        assert!(!snapshot.is_authorized(""));
        assert!(!snapshot.is_authorized("list:42"));
    }

    #[test]
    fn snapshot_without_scope_grants_nothing() {
        let now = Utc::now();
        let mut g = grant("a1", None, Some(60));
        g.scope = None;
        let snapshot = SessionSnapshot::new(SessionRecord::from_grant("alice", g, now));
        assert!(snapshot.scopes.is_empty());
        assert!(snapshot.is_authorized(""));
        assert!(!snapshot.is_authorized("list:1"));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let record: SessionRecord = serde_json::from_str(r#"{"username":"bob"}"#).unwrap();
        assert_eq!(record.username.as_deref(), Some("bob"));
        assert!(!record.logged_in);
        assert!(record.access_token.is_none());
    }
}
