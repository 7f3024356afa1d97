// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::site::Site;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;

/// 站点仓库特质
///
/// 定义爬取目标站点的数据访问接口
#[async_trait]
pub trait SiteRepository: Send + Sync {
    /// 创建新站点，URL重复时返回数据库唯一性错误
    async fn create(&self, site: &Site) -> Result<Site, RepositoryError>;
    /// 根据ID查找站点
    async fn find_by_id(&self, id: i32) -> Result<Option<Site>, RepositoryError>;
    /// 根据URL查找站点
    async fn find_by_url(&self, url: &str) -> Result<Option<Site>, RepositoryError>;
    /// 查找待抽取的站点：等待抽取或上次处理早于给定时长
    async fn find_due_for_extraction(
        &self,
        stale_after: chrono::Duration,
    ) -> Result<Vec<Site>, RepositoryError>;
    /// 标记站点抽取完成
    async fn mark_complete(&self, id: i32) -> Result<(), RepositoryError>;
    /// 标记站点抽取失败
    async fn mark_failed(&self, id: i32) -> Result<(), RepositoryError>;
}
