//! 持久化数据的读写操作

pub mod selection;
pub mod session;

pub use selection::SelectionStore;
pub use session::TokenStore;
