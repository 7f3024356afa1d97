// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::menu_item::MenuItem;
use crate::domain::models::recipe_page::ExtractionStatus;
use crate::domain::repositories::menu_item_repository::MenuItemRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::menu::menu_item as item_entity;
use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbBackend, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, Statement,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// 图片回填的单批更新语句
///
/// 按old_image_id关联menu_images，DISTINCT ON消除同一
/// old_image_id下的重复图片行
const BACKFILL_IMAGES_SQL: &str = r#"
WITH batch_items AS (
    SELECT item_id, old_image_id
    FROM menu.menu_items
    WHERE old_image_id IS NOT NULL
      AND (image_id IS NULL OR date_uploaded IS NULL)
    LIMIT $1
),
distinct_images AS (
    SELECT DISTINCT ON (old_image_id)
           old_image_id, image_id, date_uploaded
    FROM menu.menu_images
    WHERE old_image_id IN (SELECT old_image_id FROM batch_items)
      AND old_image_id IS NOT NULL
    ORDER BY old_image_id, image_id
)
UPDATE menu.menu_items
SET image_id = di.image_id,
    date_uploaded = di.date_uploaded
FROM distinct_images di
WHERE menu.menu_items.old_image_id = di.old_image_id
  AND menu.menu_items.item_id IN (SELECT item_id FROM batch_items)
"#;

/// 菜单条目仓库实现
///
/// 基于SeaORM实现的菜单条目数据访问层
#[derive(Clone)]
pub struct MenuItemRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl MenuItemRepositoryImpl {
    /// 创建新的菜单条目仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的菜单条目仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<item_entity::Model> for MenuItem {
    fn from(model: item_entity::Model) -> Self {
        Self {
            item_id: model.item_id,
            name: model.name,
            description: model.description,
            category: model.category,
            image_id: model.image_id,
            old_image_id: model.old_image_id,
            date_uploaded: model.date_uploaded,
            llm_status: model.llm_status.parse().unwrap_or_default(),
            llm_error_reason: model.llm_error_reason,
        }
    }
}

impl From<&MenuItem> for item_entity::ActiveModel {
    fn from(item: &MenuItem) -> Self {
        Self {
            item_id: Set(item.item_id),
            name: Set(item.name.clone()),
            description: Set(item.description.clone()),
            category: Set(item.category.clone()),
            image_id: Set(item.image_id),
            old_image_id: Set(item.old_image_id.clone()),
            date_uploaded: Set(item.date_uploaded),
            llm_status: Set(item.llm_status.to_string()),
            llm_error_reason: Set(item.llm_error_reason.clone()),
        }
    }
}

#[async_trait]
impl MenuItemRepository for MenuItemRepositoryImpl {
    async fn create(&self, item: &MenuItem) -> Result<MenuItem, RepositoryError> {
        let model: item_entity::ActiveModel = item.into();

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MenuItem>, RepositoryError> {
        let model = item_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let count = item_entity::Entity::find()
            .filter(item_entity::Column::ItemId.eq(id))
            .count(self.db.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn fetch_extraction_pending(
        &self,
        limit: u64,
    ) -> Result<Vec<MenuItem>, RepositoryError> {
        let models = item_entity::Entity::find()
            .filter(item_entity::Column::LlmStatus.eq(ExtractionStatus::Pending.to_string()))
            .filter(item_entity::Column::Description.is_not_null())
            .filter(item_entity::Column::Description.ne(""))
            .order_by_desc(item_entity::Column::DateUploaded)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update_extraction_status(
        &self,
        id: Uuid,
        status: ExtractionStatus,
        failure_reason: Option<&str>,
    ) -> Result<(), RepositoryError> {
        let result = item_entity::Entity::update_many()
            .col_expr(
                item_entity::Column::LlmStatus,
                Expr::value(status.to_string()),
            )
            .col_expr(
                item_entity::Column::LlmErrorReason,
                Expr::value(failure_reason.map(str::to_string)),
            )
            .filter(item_entity::Column::ItemId.eq(id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn backfill_images(&self, batch_size: u64) -> Result<u64, RepositoryError> {
        let mut total: u64 = 0;

        loop {
            let result = self
                .db
                .execute(Statement::from_sql_and_values(
                    DbBackend::Postgres,
                    BACKFILL_IMAGES_SQL,
                    [(batch_size as i64).into()],
                ))
                .await?;

            let updated = result.rows_affected();
            if updated == 0 {
                break;
            }

            total += updated;
            info!(updated, total, "Backfilled menu item images");
        }

        Ok(total)
    }
}
