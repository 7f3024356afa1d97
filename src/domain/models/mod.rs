// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 站点（site）：一个待抽取URL的爬取目标站点
/// - 食谱页面（recipe_page）：从站点地图发现的单个食谱URL
/// - 菜品（dish）：从食谱页面或菜单条目提炼出的菜品及其配料与属性
/// - 菜单条目（menu_item）：餐厅菜单上的单个条目
///
/// 这些模型构成了系统的数据基础，定义了业务概念的
/// 结构和行为，是领域驱动设计的核心组成部分。
pub mod dish;
pub mod menu_item;
pub mod recipe_page;
pub mod site;

use thiserror::Error;

/// 领域错误类型
///
/// 表示在领域层可能发生的各种错误情况
#[derive(Error, Debug)]
pub enum DomainError {
    /// 无效的状态转换，当状态变更不符合生命周期规则时发生
    #[error("Invalid state transition")]
    InvalidStateTransition,

    /// 验证错误，当输入数据不符合领域规则时发生
    #[error("Validation error: {0}")]
    ValidationError(String),
}
