// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::recipe_page::{CrawlContent, ExtractionStatus, RecipePage};
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 待入库的已发现URL
///
/// 站点地图处理的产物，尚未持久化的最小表示
#[derive(Debug, Clone)]
pub struct DiscoveredUrl {
    /// 规范化后的URL
    pub url: String,
    /// 规范化之前的原始URL
    pub original_url: String,
    /// 所属站点ID
    pub site_id: Option<i32>,
    /// 发现该URL的站点地图
    pub sitemap_url: Option<String>,
}

/// 页面仓库特质
///
/// 定义食谱URL的数据访问接口，覆盖从发现、抓取到
/// 结构化提取的完整生命周期
#[async_trait]
pub trait RecipeUrlRepository: Send + Sync {
    /// 批量插入发现的URL
    ///
    /// 规范化URL冲突的行静默跳过，randnum在插入时均匀分配。
    /// 返回实际插入的行数。
    async fn insert_discovered(&self, urls: &[DiscoveredUrl]) -> Result<u64, RepositoryError>;
    /// 根据ID查找页面
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RecipePage>, RepositoryError>;
    /// 根据规范化URL查找页面
    async fn find_by_url(&self, url: &str) -> Result<Option<RecipePage>, RepositoryError>;
    /// 判断页面是否存在
    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError>;
    /// 获取一批等待抓取的页面
    async fn fetch_crawl_pending(&self, limit: u64) -> Result<Vec<RecipePage>, RepositoryError>;
    /// 写回抓取成功结果并推进抓取状态
    async fn save_crawl_success(
        &self,
        id: Uuid,
        content: CrawlContent,
    ) -> Result<RecipePage, RepositoryError>;
    /// 写回抓取失败结果
    async fn save_crawl_failure(
        &self,
        id: Uuid,
        reason: &str,
    ) -> Result<RecipePage, RepositoryError>;
    /// 获取一批满足结构化提取条件的页面，按最近抓取时间倒序
    async fn fetch_extraction_pending(
        &self,
        limit: u64,
    ) -> Result<Vec<RecipePage>, RepositoryError>;
    /// 更新结构化提取状态
    async fn update_extraction_status(
        &self,
        id: Uuid,
        status: ExtractionStatus,
        failure_reason: Option<&str>,
    ) -> Result<(), RepositoryError>;
    /// 按randnum列均匀抽样
    async fn sample(&self, randnum_max: i32, limit: u64) -> Result<Vec<RecipePage>, RepositoryError>;
}
