// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 站点实体
///
/// 表示一个待抽取URL的爬取目标站点。站点记录其URL、
/// 可选的人工指定站点地图列表、抽取状态以及最近一次
/// 处理的时间。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    /// 站点唯一标识符，由数据库分配
    pub id: i32,
    /// 站点URL，全局唯一
    pub recipe_site_url: String,
    /// 人工指定的站点地图列表，为空时由外部系统探测标准位置
    pub manual_sitemaps: Option<Vec<String>>,
    /// 站点状态
    pub status: SiteStatus,
    /// 最近一次处理时间
    pub last_processed: Option<DateTime<FixedOffset>>,
}

/// 站点状态枚举
///
/// 状态转换遵循以下流程：
/// UrlExtractionPending → Complete/Failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SiteStatus {
    /// 等待URL抽取
    #[default]
    UrlExtractionPending,
    /// 抽取完成
    Complete,
    /// 抽取失败
    Failed,
}

impl fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SiteStatus::UrlExtractionPending => write!(f, "url_extraction_pending"),
            SiteStatus::Complete => write!(f, "complete"),
            SiteStatus::Failed => write!(f, "failed"),
        }
    }
}

impl FromStr for SiteStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "url_extraction_pending" => Ok(SiteStatus::UrlExtractionPending),
            "complete" => Ok(SiteStatus::Complete),
            "failed" => Ok(SiteStatus::Failed),
            _ => Err(()),
        }
    }
}

impl Site {
    /// 创建一个新的站点
    ///
    /// # 参数
    ///
    /// * `recipe_site_url` - 站点URL
    /// * `manual_sitemaps` - 人工指定的站点地图列表
    ///
    /// # 返回值
    ///
    /// 返回新创建的站点实例，标识符在持久化时由数据库分配
    pub fn new(recipe_site_url: String, manual_sitemaps: Option<Vec<String>>) -> Self {
        Self {
            id: 0,
            recipe_site_url,
            manual_sitemaps,
            status: SiteStatus::UrlExtractionPending,
            last_processed: None,
        }
    }

    /// 标记站点抽取完成，记录处理时间
    pub fn complete(mut self) -> Self {
        self.status = SiteStatus::Complete;
        self.last_processed = Some(Utc::now().into());
        self
    }

    /// 标记站点抽取失败，记录处理时间
    pub fn fail(mut self) -> Self {
        self.status = SiteStatus::Failed;
        self.last_processed = Some(Utc::now().into());
        self
    }
}
