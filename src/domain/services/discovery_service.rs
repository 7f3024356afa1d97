// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::site::Site;
use crate::domain::repositories::recipe_url_repository::{DiscoveredUrl, RecipeUrlRepository};
use crate::domain::repositories::site_repository::SiteRepository;
use crate::domain::services::ServiceError;
use crate::utils::url::{normalize_url, validate_url};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

/// 站点地图条目
///
/// 外部站点地图处理器交来的原始条目，尚未校验和规范化
#[derive(Debug, Clone)]
pub struct SitemapEntry {
    /// 原始URL
    pub url: String,
    /// 来源站点地图
    pub sitemap_url: Option<String>,
}

/// 发现服务
///
/// 登记站点地图处理产出的URL。条目先经过有效性校验与
/// 规范化，按规范化URL去重后批量入库，最后推进站点状态。
/// 入库失败时站点标记为失败。
pub struct DiscoveryService {
    /// 站点仓库
    sites: Arc<dyn SiteRepository>,
    /// 页面仓库
    pages: Arc<dyn RecipeUrlRepository>,
}

impl DiscoveryService {
    /// 创建新的发现服务实例
    ///
    /// # 参数
    ///
    /// * `sites` - 站点仓库
    /// * `pages` - 页面仓库
    ///
    /// # 返回值
    ///
    /// 返回新的发现服务实例
    pub fn new(sites: Arc<dyn SiteRepository>, pages: Arc<dyn RecipeUrlRepository>) -> Self {
        Self { sites, pages }
    }

    /// 查找待抽取的站点
    ///
    /// # 参数
    ///
    /// * `stale_after` - 超过该时长未处理的站点视为待抽取
    pub async fn sites_due(&self, stale_after: chrono::Duration) -> Result<Vec<Site>, ServiceError> {
        Ok(self.sites.find_due_for_extraction(stale_after).await?)
    }

    /// 登记一个站点的地图抽取结果
    ///
    /// 过滤无效URL，按规范化URL去重（保留先出现的条目），
    /// 批量插入后将站点标记为完成。插入失败时站点标记为失败
    /// 并返回原始错误。
    ///
    /// # 参数
    ///
    /// * `site_id` - 站点ID
    /// * `entries` - 站点地图条目
    ///
    /// # 返回值
    ///
    /// * `Ok(u64)` - 实际新插入的URL数量
    /// * `Err(ServiceError)` - 入库失败
    pub async fn record_sitemap_results(
        &self,
        site_id: i32,
        entries: Vec<SitemapEntry>,
    ) -> Result<u64, ServiceError> {
        let mut seen = HashSet::new();
        let mut to_insert = Vec::new();

        for entry in entries {
            if validate_url(&entry.url) != Some(true) {
                continue;
            }

            let normalized = normalize_url(&entry.url);
            if !seen.insert(normalized.clone()) {
                continue;
            }

            to_insert.push(DiscoveredUrl {
                url: normalized,
                original_url: entry.url,
                site_id: Some(site_id),
                sitemap_url: entry.sitemap_url,
            });
        }

        let inserted = match self.pages.insert_discovered(&to_insert).await {
            Ok(inserted) => inserted,
            Err(err) => {
                warn!(site_id, error = %err, "Failed to save discovered URLs, marking site failed");
                let _ = self.sites.mark_failed(site_id).await;
                return Err(err.into());
            }
        };

        self.sites.mark_complete(site_id).await?;
        info!(site_id, candidates = seen.len(), inserted, "Recorded sitemap results");

        Ok(inserted)
    }
}
