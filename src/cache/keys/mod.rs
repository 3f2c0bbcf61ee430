//! 持久化存储键
//! 每个键对应一段不透明的 JSON

/// 会话记录
pub const SESSION_KEY: &str = "session";

/// 当前选中的清单
pub const CURRENT_LIST_KEY: &str = "current_list";

/// 当前选中的分类
pub const CURRENT_CATEGORY_KEY: &str = "current_category";

/// 当前选中的条目
pub const CURRENT_ITEM_KEY: &str = "current_item";

/// 缓存的用户资料
pub const USER_PROFILE_KEY: &str = "user_profile";

/// 登出时需要一并清除的选择状态键
pub const SELECTION_KEYS: [&str; 4] = [
    CURRENT_LIST_KEY,
    CURRENT_CATEGORY_KEY,
    CURRENT_ITEM_KEY,
    USER_PROFILE_KEY,
];

/// 生成带命名空间前缀的键，前缀为空时原样返回
pub fn namespaced_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}:{}", prefix, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespaced_key_joins_with_colon() {
        assert_eq!(namespaced_key("listshare", SESSION_KEY), "listshare:session");
        assert_eq!(namespaced_key("", SESSION_KEY), "session");
    }
}
