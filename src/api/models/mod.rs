// API 数据传输对象模块
// 与服务端交互的数据结构，缺省字段使用默认值

pub mod category;
pub mod item;
pub mod list;
pub mod password;
pub mod share;
pub mod user;

// 重新导出常用类型
pub use category::*;
pub use item::*;
pub use list::*;
pub use password::*;
pub use share::*;
pub use user::*;
