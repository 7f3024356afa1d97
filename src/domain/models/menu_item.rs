// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::recipe_page::ExtractionStatus;

/// 菜单条目实体
///
/// 餐厅菜单上的单个条目，是menu模式下菜品的父行。
/// image_id与date_uploaded由图片回填任务根据old_image_id
/// 从menu_images补齐。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// 条目唯一标识符
    pub item_id: Uuid,
    /// 条目名称
    pub name: String,
    /// 条目描述
    pub description: Option<String>,
    /// 菜单分类
    pub category: Option<String>,
    /// 关联图片ID
    pub image_id: Option<Uuid>,
    /// 迁移前的旧图片ID
    pub old_image_id: Option<String>,
    /// 图片上传时间
    pub date_uploaded: Option<DateTime<FixedOffset>>,
    /// 结构化提取状态
    pub llm_status: ExtractionStatus,
    /// 结构化提取失败原因
    pub llm_error_reason: Option<String>,
}

impl MenuItem {
    /// 创建一个新的菜单条目
    pub fn new(name: String, description: Option<String>, category: Option<String>) -> Self {
        Self {
            item_id: Uuid::new_v4(),
            name,
            description,
            category,
            image_id: None,
            old_image_id: None,
            date_uploaded: None,
            llm_status: ExtractionStatus::Pending,
            llm_error_reason: None,
        }
    }

    /// 判断条目是否满足结构化提取条件
    pub fn is_extraction_ready(&self) -> bool {
        self.llm_status == ExtractionStatus::Pending
            && self.description.as_deref().is_some_and(|d| !d.is_empty())
    }
}
