// REST 客户端模块

pub mod client;
pub mod models;
pub mod operations;

pub use client::ApiClient;
