// 清单接口

use crate::api::client::ApiClient;
use crate::api::models::list::*;
use crate::error::Result;

/// 清单操作
pub struct ListOperations;

impl ListOperations {
    /// 当前用户可见的全部清单
    pub async fn list_lists(client: &ApiClient) -> Result<Vec<ShoppingList>> {
        client.get("/lists").await
    }

    pub async fn get_list(client: &ApiClient, list_id: i64) -> Result<ShoppingList> {
        client.get(&format!("/lists/{}", list_id)).await
    }

    pub async fn create_list(client: &ApiClient, list: &NewShoppingList) -> Result<ShoppingList> {
        let created: ShoppingList = client.post("/lists", list).await?;
        tracing::info!("创建清单成功: {} ({})", created.name, created.id);
        Ok(created)
    }

    pub async fn update_list(
        client: &ApiClient,
        list_id: i64,
        update: &ShoppingListUpdate,
    ) -> Result<ShoppingList> {
        client.put(&format!("/lists/{}", list_id), update).await
    }

    /// 删除清单；如果它正是当前选中的清单，一并清除选择状态
    pub async fn delete_list(client: &ApiClient, list_id: i64) -> Result<()> {
        client.delete(&format!("/lists/{}", list_id)).await?;

        let selections = client.session().selections();
        if selections.current_list().await == Some(list_id) {
            selections.set_current_list(None).await?;
            selections.set_current_category(None).await?;
            selections.set_current_item(None).await?;
        }
        tracing::info!("删除清单成功: {}", list_id);
        Ok(())
    }
}
