// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务，这些服务封装了复杂的
/// 业务规则和领域逻辑，协调多个领域对象来完成业务操作。
///
/// 包含的服务：
/// - 发现服务（discovery_service）：登记站点地图处理产出的URL
/// - 入库服务（ingestion_service）：落盘结构化提取结果并推进提取状态
/// - 对账服务（reconciliation_service）：将暂存表行校验后并入受约束模式
/// - 导出服务（export_service）：分批导出菜品数据并做列名重映射
///
/// 领域服务与应用程序服务的区别在于：领域服务包含纯粹的业务逻辑，
/// 而应用程序服务负责协调和编排，可能包含技术实现细节。
pub mod discovery_service;
pub mod export_service;
pub mod ingestion_service;
pub mod reconciliation_service;

use crate::domain::repositories::RepositoryError;
use thiserror::Error;

/// 服务层错误类型
#[derive(Error, Debug)]
pub enum ServiceError {
    /// 仓库错误
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    /// 验证错误
    #[error("Validation error: {0}")]
    Validation(String),
    /// IO错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 序列化错误
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
