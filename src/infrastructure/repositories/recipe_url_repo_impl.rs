// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::recipe_page::{CrawlContent, CrawlStatus, ExtractionStatus, RecipePage};
use crate::domain::repositories::recipe_url_repository::{DiscoveredUrl, RecipeUrlRepository};
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::recipe::recipe_url as url_entity;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use rand::Rng;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 页面仓库实现
///
/// 基于SeaORM实现的食谱URL数据访问层
#[derive(Clone)]
pub struct RecipeUrlRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl RecipeUrlRepositoryImpl {
    /// 创建新的页面仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的页面仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<url_entity::Model> for RecipePage {
    fn from(model: url_entity::Model) -> Self {
        Self {
            id: model.id,
            url: model.url,
            original_url: model.original_url,
            site_id: model.site_id,
            sitemap_url: model.sitemap_url,
            last_modified: model.last_modified,
            last_extracted: model.last_extracted,
            last_crawled: model.last_crawled,
            last_attempt: model.last_attempt,
            status: model.status.parse().unwrap_or_default(),
            failure_reason: model.failure_reason,
            llm_status: model.llm_status.parse().unwrap_or_default(),
            llm_failure_reason: model.llm_failure_reason,
            parsed_text: model.parsed_text,
            parsed_md: model.parsed_md,
            title: model.title,
            description: model.description,
            proxy_used: model.proxy_used,
            is_recipe: model.is_recipe,
            randnum: model.randnum,
        }
    }
}

impl From<RecipePage> for url_entity::ActiveModel {
    fn from(page: RecipePage) -> Self {
        Self {
            id: Set(page.id),
            url: Set(page.url),
            original_url: Set(page.original_url),
            site_id: Set(page.site_id),
            sitemap_url: Set(page.sitemap_url),
            last_modified: Set(page.last_modified),
            last_extracted: Set(page.last_extracted),
            last_crawled: Set(page.last_crawled),
            last_attempt: Set(page.last_attempt),
            status: Set(page.status.to_string()),
            failure_reason: Set(page.failure_reason),
            llm_status: Set(page.llm_status.to_string()),
            llm_failure_reason: Set(page.llm_failure_reason),
            parsed_text: Set(page.parsed_text),
            parsed_md: Set(page.parsed_md),
            title: Set(page.title),
            description: Set(page.description),
            proxy_used: Set(page.proxy_used),
            is_recipe: Set(page.is_recipe),
            randnum: Set(page.randnum),
        }
    }
}

#[async_trait]
impl RecipeUrlRepository for RecipeUrlRepositoryImpl {
    async fn insert_discovered(&self, urls: &[DiscoveredUrl]) -> Result<u64, RepositoryError> {
        if urls.is_empty() {
            return Ok(0);
        }

        let now: DateTime<FixedOffset> = Utc::now().into();

        let models: Vec<url_entity::ActiveModel> = {
            let mut rng = rand::rng();
            urls
                .iter()
                .map(|discovered| url_entity::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    url: Set(discovered.url.clone()),
                    original_url: Set(Some(discovered.original_url.clone())),
                    site_id: Set(discovered.site_id),
                    sitemap_url: Set(discovered.sitemap_url.clone()),
                    last_extracted: Set(Some(now)),
                    status: Set(CrawlStatus::CrawlPending.to_string()),
                    llm_status: Set(ExtractionStatus::Pending.to_string()),
                    randnum: Set(Some(rng.random_range(0..=10))),
                    ..Default::default()
                })
                .collect()
        };

        // Duplicate normalized URLs are silently skipped
        let inserted = url_entity::Entity::insert_many(models)
            .on_conflict(
                OnConflict::column(url_entity::Column::Url)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db.as_ref())
            .await?;

        Ok(inserted)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<RecipePage>, RepositoryError> {
        let model = url_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<RecipePage>, RepositoryError> {
        let model = url_entity::Entity::find()
            .filter(url_entity::Column::Url.eq(url))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let count = url_entity::Entity::find()
            .filter(url_entity::Column::Id.eq(id))
            .count(self.db.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn fetch_crawl_pending(&self, limit: u64) -> Result<Vec<RecipePage>, RepositoryError> {
        let models = url_entity::Entity::find()
            .filter(url_entity::Column::Status.eq(CrawlStatus::CrawlPending.to_string()))
            .limit(limit)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn save_crawl_success(
        &self,
        id: Uuid,
        content: CrawlContent,
    ) -> Result<RecipePage, RepositoryError> {
        let model = url_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let page = RecipePage::from(model).mark_crawled(content)?;

        let active: url_entity::ActiveModel = page.into();
        let updated = active.update(self.db.as_ref()).await?;
        Ok(updated.into())
    }

    async fn save_crawl_failure(
        &self,
        id: Uuid,
        reason: &str,
    ) -> Result<RecipePage, RepositoryError> {
        let model = url_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let page = RecipePage::from(model).mark_crawl_failed(reason.to_string())?;

        let active: url_entity::ActiveModel = page.into();
        let updated = active.update(self.db.as_ref()).await?;
        Ok(updated.into())
    }

    async fn fetch_extraction_pending(
        &self,
        limit: u64,
    ) -> Result<Vec<RecipePage>, RepositoryError> {
        let models = url_entity::Entity::find()
            .filter(url_entity::Column::IsRecipe.eq(true))
            .filter(url_entity::Column::Status.eq(CrawlStatus::Crawled.to_string()))
            .filter(url_entity::Column::ParsedText.is_not_null())
            .filter(url_entity::Column::LlmStatus.eq(ExtractionStatus::Pending.to_string()))
            .order_by_desc(url_entity::Column::LastCrawled)
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
        let result = url_entity::Entity::update_many()
            .col_expr(
                url_entity::Column::LlmStatus,
                Expr::value(status.to_string()),
            )
            .col_expr(
                url_entity::Column::LlmFailureReason,
                Expr::value(failure_reason.map(str::to_string)),
            )
            .filter(url_entity::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn sample(
        &self,
        randnum_max: i32,
        limit: u64,
    ) -> Result<Vec<RecipePage>, RepositoryError> {
        let models = url_entity::Entity::find()
            .filter(url_entity::Column::Randnum.lte(randnum_max))
            .order_by_asc(url_entity::Column::Randnum)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
