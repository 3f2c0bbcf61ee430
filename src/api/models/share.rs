use serde::{Deserialize, Serialize};

/// 清单共享（邀请）记录
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Share {
    pub list_id: i64,
    /// 接受邀请后才有用户名
    pub username: Option<String>,
    pub email: String,
    /// 受邀者是否获得管理员权限
    pub admin: bool,
    pub accepted: bool,
    /// 邀请令牌，只在创建时返回
    pub token: Option<String>,
}

/// 发送邀请请求
#[derive(Debug, Serialize, Clone)]
pub struct Invitation {
    pub email: String,
    pub admin: bool,
}
