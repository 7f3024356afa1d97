// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::dish::{DishRecord, DishSource};
use crate::domain::models::menu_item::MenuItem;
use crate::domain::models::recipe_page::{ExtractionStatus, RecipePage};
use crate::domain::repositories::dish_repository::DishRepository;
use crate::domain::repositories::menu_item_repository::MenuItemRepository;
use crate::domain::repositories::recipe_url_repository::RecipeUrlRepository;
use crate::domain::services::ServiceError;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// 入库服务
///
/// 落盘外部提取器交来的结构化菜品数据并推进父行的提取
/// 状态。菜品保存成功后父行标记为完成；保存失败时父行
/// 标记为失败并带上失败原因，原始错误继续向上传播。
pub struct IngestionService {
    /// 页面仓库
    pages: Arc<dyn RecipeUrlRepository>,
    /// recipe模式菜品仓库
    recipe_dishes: Arc<dyn DishRepository>,
    /// 菜单条目仓库
    items: Arc<dyn MenuItemRepository>,
    /// menu模式菜品仓库
    menu_dishes: Arc<dyn DishRepository>,
}

impl IngestionService {
    /// 创建新的入库服务实例
    ///
    /// # 参数
    ///
    /// * `pages` - 页面仓库
    /// * `recipe_dishes` - recipe模式菜品仓库
    /// * `items` - 菜单条目仓库
    /// * `menu_dishes` - menu模式菜品仓库
    ///
    /// # 返回值
    ///
    /// 返回新的入库服务实例
    pub fn new(
        pages: Arc<dyn RecipeUrlRepository>,
        recipe_dishes: Arc<dyn DishRepository>,
        items: Arc<dyn MenuItemRepository>,
        menu_dishes: Arc<dyn DishRepository>,
    ) -> Self {
        Self {
            pages,
            recipe_dishes,
            items,
            menu_dishes,
        }
    }

    /// 获取一批满足提取条件的食谱页面
    pub async fn recipe_extraction_batch(
        &self,
        limit: u64,
    ) -> Result<Vec<RecipePage>, ServiceError> {
        Ok(self.pages.fetch_extraction_pending(limit).await?)
    }

    /// 获取一批满足提取条件的菜单条目
    pub async fn menu_extraction_batch(&self, limit: u64) -> Result<Vec<MenuItem>, ServiceError> {
        Ok(self.items.fetch_extraction_pending(limit).await?)
    }

    /// 落盘食谱页面的提取结果
    ///
    /// 菜品标识符必须与页面标识符一致，来源必须为recipe。
    ///
    /// # 参数
    ///
    /// * `page_id` - 页面ID
    /// * `record` - 提取得到的菜品聚合
    pub async fn record_recipe_extraction(
        &self,
        page_id: Uuid,
        record: &DishRecord,
    ) -> Result<(), ServiceError> {
        if record.dish.dish_id != page_id {
            return Err(ServiceError::Validation(format!(
                "dish_id {} does not match page id {}",
                record.dish.dish_id, page_id
            )));
        }
        if record.dish.source != DishSource::Recipe {
            return Err(ServiceError::Validation(
                "recipe extraction requires a dish with source=recipe".to_string(),
            ));
        }

        if let Err(err) = self.recipe_dishes.save(record).await {
            error!(%page_id, error = %err, "Failed to save dish");
            let _ = self
                .pages
                .update_extraction_status(page_id, ExtractionStatus::Failed, Some(&err.to_string()))
                .await;
            return Err(err.into());
        }

        self.pages
            .update_extraction_status(page_id, ExtractionStatus::Complete, None)
            .await?;
        info!(%page_id, ingredients = record.ingredients.len(), "Recorded recipe extraction");

        Ok(())
    }

    /// 记录食谱页面提取失败
    pub async fn record_recipe_extraction_failure(
        &self,
        page_id: Uuid,
        reason: &str,
    ) -> Result<(), ServiceError> {
        self.pages
            .update_extraction_status(page_id, ExtractionStatus::Failed, Some(reason))
            .await?;
        Ok(())
    }

    /// 落盘菜单条目的提取结果
    ///
    /// 菜品标识符必须与条目标识符一致，来源必须为menu。
    ///
    /// # 参数
    ///
    /// * `item_id` - 条目ID
    /// * `record` - 提取得到的菜品聚合
    pub async fn record_menu_extraction(
        &self,
        item_id: Uuid,
        record: &DishRecord,
    ) -> Result<(), ServiceError> {
        if record.dish.dish_id != item_id {
            return Err(ServiceError::Validation(format!(
                "dish_id {} does not match item id {}",
                record.dish.dish_id, item_id
            )));
        }
        if record.dish.source != DishSource::Menu {
            return Err(ServiceError::Validation(
                "menu extraction requires a dish with source=menu".to_string(),
            ));
        }

        if let Err(err) = self.menu_dishes.save(record).await {
            error!(%item_id, error = %err, "Failed to save dish");
            let _ = self
                .items
                .update_extraction_status(item_id, ExtractionStatus::Failed, Some(&err.to_string()))
                .await;
            return Err(err.into());
        }

        self.items
            .update_extraction_status(item_id, ExtractionStatus::Complete, None)
            .await?;
        info!(%item_id, ingredients = record.ingredients.len(), "Recorded menu extraction");

        Ok(())
    }

    /// 记录菜单条目提取失败
    pub async fn record_menu_extraction_failure(
        &self,
        item_id: Uuid,
        reason: &str,
    ) -> Result<(), ServiceError> {
        self.items
            .update_extraction_status(item_id, ExtractionStatus::Failed, Some(reason))
            .await?;
        Ok(())
    }
}
