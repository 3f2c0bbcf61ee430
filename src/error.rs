use reqwest::StatusCode;

/// 客户端错误类型
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 网络请求失败（连接、超时等）
    #[error("网络请求失败: {0}")]
    Network(#[from] reqwest::Error),

    /// 令牌端点返回了非成功状态
    #[error("令牌交换失败: HTTP {status} - {body}")]
    TokenExchange { status: StatusCode, body: String },

    /// 未登录、令牌失效或权限不足
    #[error("未授权访问: {0}")]
    Unauthorized(String),

    /// REST 接口返回了非成功状态
    #[error("请求失败: HTTP {status} - {message}")]
    Http { status: StatusCode, message: String },

    /// 序列化或反序列化失败
    #[error("数据格式错误: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 持久化存储读写失败
    #[error("存储错误: {0}")]
    Storage(String),

    /// 配置缺失或无效
    #[error("配置错误: {0}")]
    Config(String),
}

impl From<redis::RedisError> for Error {
    fn from(e: redis::RedisError) -> Self {
        Error::Storage(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Storage(e.to_string())
    }
}

impl Error {
    /// 是否为授权类错误（401/403 或本地判定未登录）
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Error::Unauthorized(_) => true,
            Error::TokenExchange { status, .. } | Error::Http { status, .. } => {
                *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
            }
            _ => false,
        }
    }

    /// 令牌端点明确拒绝了授权（4xx），凭据已不可再用
    pub fn is_grant_rejected(&self) -> bool {
        matches!(self, Error::TokenExchange { status, .. } if status.is_client_error())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_variants() {
        assert!(Error::Unauthorized("no session".into()).is_unauthorized());
        assert!(
            Error::TokenExchange {
                status: StatusCode::UNAUTHORIZED,
                body: String::new(),
            }
            .is_unauthorized()
        );
        assert!(
            !Error::Http {
                status: StatusCode::NOT_FOUND,
                message: "missing".into(),
            }
            .is_unauthorized()
        );
        assert!(!Error::Storage("disk full".into()).is_unauthorized());
    }

    #[test]
    fn only_client_errors_reject_grant() {
        let exchange = |status| Error::TokenExchange {
            status,
            body: String::new(),
        };
        assert!(exchange(StatusCode::BAD_REQUEST).is_grant_rejected());
        assert!(exchange(StatusCode::UNAUTHORIZED).is_grant_rejected());
        assert!(!exchange(StatusCode::SERVICE_UNAVAILABLE).is_grant_rejected());
        assert!(
            !Error::Http {
                status: StatusCode::BAD_REQUEST,
                message: String::new(),
            }
            .is_grant_rejected()
        );
    }

    #[test]
    fn display_contains_status() {
        let e = Error::Http {
            status: StatusCode::CONFLICT,
            message: "duplicate".into(),
        };
        let text = e.to_string();
        assert!(text.contains("409"));
        assert!(text.contains("duplicate"));
    }
}
