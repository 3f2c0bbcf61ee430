use serde::{Deserialize, Serialize};

/// 清单下的分类
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Category {
    pub id: i64,
    pub list_id: i64,
    pub name: String,
    pub description: String,
}

/// 创建分类请求
#[derive(Debug, Serialize, Clone)]
pub struct NewCategory {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl NewCategory {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
        }
    }
}

/// 更新分类请求
#[derive(Debug, Serialize, Clone, Default)]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
