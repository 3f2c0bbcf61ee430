// 本地缓存模块
// 会话记录、界面选择状态和用户资料都保存在这里

pub mod keys;
pub mod models;
pub mod operations;
pub mod storage;

// 重新导出常用类型
pub use models::{CachedUserProfile, Selection, SessionRecord, SessionSnapshot, TokenGrant};
pub use operations::{SelectionStore, TokenStore};
pub use storage::{FileStorage, MemoryStorage, RedisStorage, Storage, open_storage};
