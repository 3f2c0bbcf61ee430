//! 持久化数据模型

pub mod selection;
pub mod session;
pub mod token;
pub mod user;

pub use selection::Selection;
pub use session::{SessionRecord, SessionSnapshot};
pub use token::TokenGrant;
pub use user::CachedUserProfile;
