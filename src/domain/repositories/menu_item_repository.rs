// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::menu_item::MenuItem;
use crate::domain::models::recipe_page::ExtractionStatus;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 菜单条目仓库特质
///
/// 定义菜单条目的数据访问接口
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// 创建新条目
    async fn create(&self, item: &MenuItem) -> Result<MenuItem, RepositoryError>;
    /// 根据ID查找条目
    async fn find_by_id(&self, id: Uuid) -> Result<Option<MenuItem>, RepositoryError>;
    /// 判断条目是否存在
    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError>;
    /// 获取一批满足结构化提取条件的条目，按上传时间倒序
    async fn fetch_extraction_pending(&self, limit: u64)
        -> Result<Vec<MenuItem>, RepositoryError>;
    /// 更新结构化提取状态
    async fn update_extraction_status(
        &self,
        id: Uuid,
        status: ExtractionStatus,
        failure_reason: Option<&str>,
    ) -> Result<(), RepositoryError>;
    /// 批量回填图片信息
    ///
    /// 按old_image_id关联menu_images，分批补齐image_id与
    /// date_uploaded，直到没有行可更新为止。返回更新的总行数。
    async fn backfill_images(&self, batch_size: u64) -> Result<u64, RepositoryError>;
}
