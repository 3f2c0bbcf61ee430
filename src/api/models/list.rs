use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 购物清单
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ShoppingList {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// 创建者用户名
    pub owner: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// 创建清单请求
#[derive(Debug, Serialize, Clone)]
pub struct NewShoppingList {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl NewShoppingList {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

/// 更新清单请求，未设置的字段不修改
#[derive(Debug, Serialize, Clone, Default)]
pub struct ShoppingListUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
