//! 授权范围（scope）解析与判定
//!
//! 授权字符串是以空白分隔的权限列表，例如 `list:42 admin:42`。
//! `superuser` 满足任何查询。

use std::collections::HashSet;
use std::fmt;

/// 超级用户权限
pub const SUPERUSER: &str = "superuser";

/// 解析后的权限集合，每次会话记录变化时构造一次
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scopes {
    granted: HashSet<String>,
}

impl Scopes {
    pub fn parse(granted: &str) -> Self {
        Self {
            granted: granted.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// 清单普通权限
    pub fn list_scope(list_id: i64) -> String {
        format!("list:{}", list_id)
    }

    /// 清单管理员权限
    pub fn admin_scope(list_id: i64) -> String {
        format!("admin:{}", list_id)
    }

    pub fn contains(&self, scope: &str) -> bool {
        self.granted.contains(scope)
    }

    pub fn is_superuser(&self) -> bool {
        self.contains(SUPERUSER)
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }

    /// `required` 中的每一项都已授予时返回 true；空查询总是满足
    pub fn satisfies(&self, required: &str) -> bool {
        if self.is_superuser() {
            return true;
        }
        required.split_whitespace().all(|scope| self.contains(scope))
    }

    /// 普通成员或管理员都可以查看清单
    pub fn can_view_list(&self, list_id: i64) -> bool {
        self.satisfies(&Self::list_scope(list_id)) || self.satisfies(&Self::admin_scope(list_id))
    }

    pub fn can_admin_list(&self, list_id: i64) -> bool {
        self.satisfies(&Self::admin_scope(list_id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.granted.iter().map(String::as_str)
    }
}

impl fmt::Display for Scopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut scopes: Vec<&str> = self.iter().collect();
        scopes.sort_unstable();
        write!(f, "{}", scopes.join(" "))
    }
}
