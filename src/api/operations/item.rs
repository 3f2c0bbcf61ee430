// 条目接口

use crate::api::client::ApiClient;
use crate::api::models::item::*;
use crate::error::Result;

/// 条目操作
pub struct ItemOperations;

impl ItemOperations {
    pub async fn list_items(client: &ApiClient, category_id: i64) -> Result<Vec<Item>> {
        client
            .get(&format!("/categories/{}/items", category_id))
            .await
    }

    pub async fn get_item(client: &ApiClient, item_id: i64) -> Result<Item> {
        client.get(&format!("/items/{}", item_id)).await
    }

    pub async fn create_item(client: &ApiClient, category_id: i64, item: &NewItem) -> Result<Item> {
        client
            .post(&format!("/categories/{}/items", category_id), item)
            .await
    }

    pub async fn update_item(client: &ApiClient, item_id: i64, update: &ItemUpdate) -> Result<Item> {
        client.put(&format!("/items/{}", item_id), update).await
    }

    /// 勾选或取消勾选
    pub async fn set_checked(client: &ApiClient, item_id: i64, checked: bool) -> Result<Item> {
        let update = ItemUpdate {
            checked: Some(checked),
            ..Default::default()
        };
        Self::update_item(client, item_id, &update).await
    }

    pub async fn delete_item(client: &ApiClient, item_id: i64) -> Result<()> {
        client.delete(&format!("/items/{}", item_id)).await?;

        let selections = client.session().selections();
        if selections.current_item().await == Some(item_id) {
            selections.set_current_item(None).await?;
        }
        Ok(())
    }
}
