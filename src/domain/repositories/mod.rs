// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 站点仓库（site_repository）：管理爬取目标站点
/// - 页面仓库（recipe_url_repository）：管理发现的食谱URL及其生命周期
/// - 菜品仓库（dish_repository）：管理菜品聚合的事务性读写
/// - 菜单条目仓库（menu_item_repository）：管理菜单条目与图片回填
/// - 暂存仓库（staging_repository）：管理无约束暂存表的装载与读取
///
/// 这些接口确保了领域层不依赖于具体的数据存储技术，
/// 提高了系统的可测试性和可维护性.
pub mod dish_repository;
pub mod menu_item_repository;
pub mod recipe_url_repository;
pub mod site_repository;
pub mod staging_repository;

use crate::domain::models::DomainError;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 领域规则被违反，例如非法的状态转换
    #[error("Domain rule violation: {0}")]
    Domain(#[from] DomainError),
}
