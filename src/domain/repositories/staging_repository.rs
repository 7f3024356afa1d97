// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::dish::{Dish, DishAttributes, DishIngredient};
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 暂存表行数统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StagingCounts {
    pub dishes: u64,
    pub ingredients: u64,
    pub attributes: u64,
}

/// 暂存仓库特质
///
/// 定义无约束暂存表的数据访问接口。装载操作不做任何校验，
/// 引用有效性由对账服务在之后恢复。
#[async_trait]
pub trait StagingRepository: Send + Sync {
    /// 批量装载菜品主体行
    async fn load_dishes(&self, rows: &[Dish]) -> Result<u64, RepositoryError>;
    /// 批量装载配料行
    async fn load_ingredients(&self, rows: &[DishIngredient]) -> Result<u64, RepositoryError>;
    /// 批量装载属性行
    async fn load_attributes(&self, rows: &[DishAttributes]) -> Result<u64, RepositoryError>;
    /// 各暂存表行数
    async fn counts(&self) -> Result<StagingCounts, RepositoryError>;
    /// 读取一批暂存菜品行
    async fn fetch_dish_batch(&self, limit: u64) -> Result<Vec<Dish>, RepositoryError>;
    /// 读取某菜品的全部暂存配料行
    async fn ingredients_for(&self, dish_id: Uuid)
        -> Result<Vec<DishIngredient>, RepositoryError>;
    /// 读取某菜品的暂存属性行
    async fn attributes_for(
        &self,
        dish_id: Uuid,
    ) -> Result<Option<DishAttributes>, RepositoryError>;
    /// 删除给定菜品的全部暂存行（三表）
    async fn remove(&self, dish_ids: &[Uuid]) -> Result<u64, RepositoryError>;
}
