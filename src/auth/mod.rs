//! 认证与授权：令牌端点、会话上下文和授权范围判定

pub mod scope;
pub mod session;
pub mod token;

pub use scope::{SUPERUSER, Scopes};
pub use session::SessionContext;
pub use token::{HttpTokenClient, TokenEndpoint};
