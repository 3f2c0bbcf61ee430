// REST 接口操作模块
// 每类资源一个操作集合，全部经由 ApiClient 发送

pub mod category;
pub mod item;
pub mod list;
pub mod password;
pub mod share;
pub mod user;

// 重新导出常用操作
pub use category::CategoryOperations;
pub use item::ItemOperations;
pub use list::ListOperations;
pub use password::PasswordOperations;
pub use share::ShareOperations;
pub use user::UserOperations;
