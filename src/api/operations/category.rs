// 分类接口

use crate::api::client::ApiClient;
use crate::api::models::category::*;
use crate::error::Result;

/// 分类操作
pub struct CategoryOperations;

impl CategoryOperations {
    pub async fn list_categories(client: &ApiClient, list_id: i64) -> Result<Vec<Category>> {
        client.get(&format!("/lists/{}/categories", list_id)).await
    }

    pub async fn get_category(client: &ApiClient, category_id: i64) -> Result<Category> {
        client.get(&format!("/categories/{}", category_id)).await
    }

    pub async fn create_category(
        client: &ApiClient,
        list_id: i64,
        category: &NewCategory,
    ) -> Result<Category> {
        client
            .post(&format!("/lists/{}/categories", list_id), category)
            .await
    }

    pub async fn update_category(
        client: &ApiClient,
        category_id: i64,
        update: &CategoryUpdate,
    ) -> Result<Category> {
        client
            .put(&format!("/categories/{}", category_id), update)
            .await
    }

    pub async fn delete_category(client: &ApiClient, category_id: i64) -> Result<()> {
        client
            .delete(&format!("/categories/{}", category_id))
            .await?;

        let selections = client.session().selections();
        if selections.current_category().await == Some(category_id) {
            selections.set_current_category(None).await?;
            selections.set_current_item(None).await?;
        }
        Ok(())
    }
}
