// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::site::{Site, SiteStatus};
use crate::domain::repositories::site_repository::SiteRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::recipe::site as site_entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    NotSet, QueryFilter, Set,
};
use std::sync::Arc;

/// 站点仓库实现
///
/// 基于SeaORM实现的站点数据访问层
#[derive(Clone)]
pub struct SiteRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl SiteRepositoryImpl {
    /// 创建新的站点仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的站点仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<site_entity::Model> for Site {
    fn from(model: site_entity::Model) -> Self {
        Self {
            id: model.id,
            recipe_site_url: model.recipe_site_url,
            manual_sitemaps: model.manual_sitemaps,
            status: model.status.parse().unwrap_or_default(),
            last_processed: model.last_processed,
        }
    }
}

#[async_trait]
impl SiteRepository for SiteRepositoryImpl {
    async fn create(&self, site: &Site) -> Result<Site, RepositoryError> {
        let model = site_entity::ActiveModel {
            id: NotSet,
            recipe_site_url: Set(site.recipe_site_url.clone()),
            manual_sitemaps: Set(site.manual_sitemaps.clone()),
            status: Set(site.status.to_string()),
            last_processed: Set(site.last_processed),
        };

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Site>, RepositoryError> {
        let model = site_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<Site>, RepositoryError> {
        let model = site_entity::Entity::find()
            .filter(site_entity::Column::RecipeSiteUrl.eq(url))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_due_for_extraction(
        &self,
        stale_after: chrono::Duration,
    ) -> Result<Vec<Site>, RepositoryError> {
        let cutoff = Utc::now() - stale_after;

        let models = site_entity::Entity::find()
            .filter(
                Condition::any()
                    .add(
                        site_entity::Column::Status
                            .eq(SiteStatus::UrlExtractionPending.to_string()),
                    )
                    .add(site_entity::Column::LastProcessed.lt(cutoff)),
            )
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn mark_complete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = site_entity::Entity::update_many()
            .col_expr(
                site_entity::Column::Status,
                Expr::value(SiteStatus::Complete.to_string()),
            )
            .col_expr(
                site_entity::Column::LastProcessed,
                Expr::current_timestamp().into(),
            )
            .filter(site_entity::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn mark_failed(&self, id: i32) -> Result<(), RepositoryError> {
        let result = site_entity::Entity::update_many()
            .col_expr(
                site_entity::Column::Status,
                Expr::value(SiteStatus::Failed.to_string()),
            )
            .col_expr(
                site_entity::Column::LastProcessed,
                Expr::current_timestamp().into(),
            )
            .filter(site_entity::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
