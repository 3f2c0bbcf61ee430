//! 购物清单服务的客户端：会话管理、令牌自动刷新、授权范围判定，
//! 以及清单、分类、条目、用户、共享和密码相关的 REST 接口。

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;

pub use api::ApiClient;
pub use auth::{Scopes, SessionContext};
pub use cache::{SessionRecord, SessionSnapshot};
pub use config::Config;
pub use error::{Error, Result};
