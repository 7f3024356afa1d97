// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::dish::{DishRecord, DishSource};
use crate::domain::repositories::dish_repository::DishRepository;
use crate::domain::repositories::menu_item_repository::MenuItemRepository;
use crate::domain::repositories::recipe_url_repository::RecipeUrlRepository;
use crate::domain::repositories::staging_repository::StagingRepository;
use crate::domain::services::ServiceError;
use std::sync::Arc;
use tracing::{info, warn};

/// 对账结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// 成功并入受约束模式的菜品数
    pub applied: u64,
    /// 因缺少父行而丢弃的菜品数
    pub orphaned: u64,
}

/// 对账服务
///
/// 将暂存表中的菜品行校验后并入受约束模式。一行暂存菜品
/// 有效当且仅当其dish_id对应一条存活的父行（按source分别
/// 查recipe_urls和menu_items）。有效行连同其配料与属性走
/// 常规的事务性保存路径，因此对账不会触发约束冲突；孤儿
/// 行计数后丢弃。每批处理完成后相应暂存行即被删除。
pub struct ReconciliationService {
    /// 暂存仓库
    staging: Arc<dyn StagingRepository>,
    /// 页面仓库，用于校验recipe来源的父行
    pages: Arc<dyn RecipeUrlRepository>,
    /// 菜单条目仓库，用于校验menu来源的父行
    items: Arc<dyn MenuItemRepository>,
    /// recipe模式菜品仓库
    recipe_dishes: Arc<dyn DishRepository>,
    /// menu模式菜品仓库
    menu_dishes: Arc<dyn DishRepository>,
}

impl ReconciliationService {
    /// 创建新的对账服务实例
    ///
    /// # 参数
    ///
    /// * `staging` - 暂存仓库
    /// * `pages` - 页面仓库
    /// * `items` - 菜单条目仓库
    /// * `recipe_dishes` - recipe模式菜品仓库
    /// * `menu_dishes` - menu模式菜品仓库
    ///
    /// # 返回值
    ///
    /// 返回新的对账服务实例
    pub fn new(
        staging: Arc<dyn StagingRepository>,
        pages: Arc<dyn RecipeUrlRepository>,
        items: Arc<dyn MenuItemRepository>,
        recipe_dishes: Arc<dyn DishRepository>,
        menu_dishes: Arc<dyn DishRepository>,
    ) -> Self {
        Self {
            staging,
            pages,
            items,
            recipe_dishes,
            menu_dishes,
        }
    }

    /// 执行一次完整对账
    ///
    /// 分批消费暂存菜品行直到暂存表为空。
    ///
    /// # 参数
    ///
    /// * `batch_size` - 每批处理的菜品行数
    ///
    /// # 返回值
    ///
    /// * `Ok(ReconcileReport)` - 并入与丢弃的行数统计
    /// * `Err(ServiceError)` - 对账中断，未处理的暂存行保持原样
    pub async fn reconcile(&self, batch_size: u64) -> Result<ReconcileReport, ServiceError> {
        let mut report = ReconcileReport::default();

        loop {
            let batch = self.staging.fetch_dish_batch(batch_size).await?;
            if batch.is_empty() {
                break;
            }

            let mut processed = Vec::with_capacity(batch.len());

            for dish in batch {
                let dish_id = dish.dish_id;
                let parent_alive = match dish.source {
                    DishSource::Recipe => self.pages.exists(dish_id).await?,
                    DishSource::Menu => self.items.exists(dish_id).await?,
                };

                if parent_alive {
                    let ingredients = self.staging.ingredients_for(dish_id).await?;
                    let attributes = self.staging.attributes_for(dish_id).await?;
                    let source = dish.source;
                    let record = DishRecord {
                        dish,
                        ingredients,
                        attributes,
                    };

                    match source {
                        DishSource::Recipe => self.recipe_dishes.save(&record).await?,
                        DishSource::Menu => self.menu_dishes.save(&record).await?,
                    }
                    report.applied += 1;
                } else {
                    warn!(%dish_id, "Discarding staged dish without a live parent row");
                    report.orphaned += 1;
                }

                processed.push(dish_id);
            }

            self.staging.remove(&processed).await?;
            info!(
                applied = report.applied,
                orphaned = report.orphaned,
                "Reconciliation batch complete"
            );
        }

        Ok(report)
    }
}
