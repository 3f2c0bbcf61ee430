use serde::{Deserialize, Serialize};

fn default_quantity() -> u32 {
    1
}

/// 分类下的条目
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Item {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub category_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// 是否已购买
    #[serde(default)]
    pub checked: bool,
}

/// 创建条目请求
#[derive(Debug, Serialize, Clone)]
pub struct NewItem {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub quantity: u32,
}

impl NewItem {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            quantity: default_quantity(),
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// 更新条目请求
#[derive(Debug, Serialize, Clone, Default)]
pub struct ItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}
