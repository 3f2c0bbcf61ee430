use serde::{Deserialize, Serialize};

/// 令牌端点响应（OAuth2 标准字段）
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TokenGrant {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// 有效期（秒），服务端可能省略
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// 以空格分隔的授权范围
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default_to_none() {
        let grant: TokenGrant = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(grant.access_token, "abc");
        assert!(grant.refresh_token.is_none());
        assert!(grant.expires_in.is_none());
        assert!(grant.scope.is_none());
    }
}
