use serde::Serialize;

/// 申请重置密码，服务端向邮箱发送重置链接
#[derive(Debug, Serialize, Clone)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// 使用重置令牌设置新密码
#[derive(Debug, Serialize, Clone)]
pub struct PasswordReset {
    pub password: String,
}

/// 已登录用户修改密码
#[derive(Debug, Serialize, Clone)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}
