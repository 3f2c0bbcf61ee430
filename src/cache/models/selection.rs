use serde::{Deserialize, Serialize};

/// 界面当前选中的清单、分类和条目
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub list_id: Option<i64>,
    pub category_id: Option<i64>,
    pub item_id: Option<i64>,
}
