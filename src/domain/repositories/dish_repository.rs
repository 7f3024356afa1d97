// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::dish::{Dish, DishAttributes, DishIngredient, DishRecord};
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 菜品仓库特质
///
/// 定义菜品聚合的数据访问接口。recipe与menu两个模式各有
/// 一个实现，接口完全一致。
#[async_trait]
pub trait DishRepository: Send + Sync {
    /// 事务性保存菜品聚合
    ///
    /// 菜品主体按dish_id插入或更新（更新时刷新date_modified），
    /// 配料整体替换，属性按dish_id插入或更新。
    async fn save(&self, record: &DishRecord) -> Result<(), RepositoryError>;
    /// 读取菜品聚合：主体、配料与属性
    async fn find(&self, dish_id: Uuid) -> Result<Option<DishRecord>, RepositoryError>;
    /// 删除菜品主体，配料与属性随级联删除
    async fn delete(&self, dish_id: Uuid) -> Result<bool, RepositoryError>;
    /// 记录一次评分并增量更新聚合值
    async fn record_rating(&self, dish_id: Uuid, stars: f64) -> Result<Dish, RepositoryError>;
    /// 记录一条评论
    async fn record_review(&self, dish_id: Uuid) -> Result<(), RepositoryError>;
    /// 菜品总数
    async fn count(&self) -> Result<u64, RepositoryError>;
    /// 分页读取菜品主体，按dish_id排序
    async fn fetch_dishes(&self, limit: u64, offset: u64) -> Result<Vec<Dish>, RepositoryError>;
    /// 分页读取配料行，按(dish_id, ingredient_id)排序
    async fn fetch_ingredients(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<DishIngredient>, RepositoryError>;
    /// 分页读取属性行，按dish_id排序
    async fn fetch_attributes(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<DishAttributes>, RepositoryError>;
}
