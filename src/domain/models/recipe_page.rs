// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::models::DomainError;

/// 食谱页面实体
///
/// 表示从站点地图中发现的单个食谱URL及其处理过程中
/// 积累的全部状态：抓取结果、页面元数据、分类标志以及
/// 结构化提取的进度。页面经历两段生命周期：先是抓取
/// （status），随后是结构化提取（llm_status）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipePage {
    /// 页面唯一标识符
    pub id: Uuid,
    /// 规范化后的URL，全局唯一
    pub url: String,
    /// 规范化之前的原始URL
    pub original_url: Option<String>,
    /// 所属站点ID
    pub site_id: Option<i32>,
    /// 发现该URL的站点地图
    pub sitemap_url: Option<String>,
    /// 站点地图声明的最后修改时间
    pub last_modified: Option<DateTime<FixedOffset>>,
    /// 最近一次从站点地图抽取的时间
    pub last_extracted: Option<DateTime<FixedOffset>>,
    /// 最近一次成功抓取的时间
    pub last_crawled: Option<DateTime<FixedOffset>>,
    /// 最近一次抓取尝试的时间
    pub last_attempt: Option<DateTime<FixedOffset>>,
    /// 抓取状态
    pub status: CrawlStatus,
    /// 抓取失败原因
    pub failure_reason: Option<String>,
    /// 结构化提取状态
    pub llm_status: ExtractionStatus,
    /// 结构化提取失败原因
    pub llm_failure_reason: Option<String>,
    /// 抓取得到的纯文本正文
    pub parsed_text: Option<String>,
    /// 抓取得到的Markdown正文
    pub parsed_md: Option<String>,
    /// 页面标题
    pub title: Option<String>,
    /// 页面描述（meta description）
    pub description: Option<String>,
    /// 抓取时使用的代理类型
    pub proxy_used: Option<String>,
    /// 是否为食谱页面，未分类时为空
    pub is_recipe: Option<bool>,
    /// 抽样用随机数，插入时在0..=10内均匀分配
    pub randnum: Option<i32>,
}

/// 抓取状态枚举
///
/// 状态转换遵循以下流程：
/// CrawlPending → Crawled/CrawlFailed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CrawlStatus {
    /// 等待抓取
    #[default]
    CrawlPending,
    /// 抓取完成
    Crawled,
    /// 抓取失败
    CrawlFailed,
}

impl fmt::Display for CrawlStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CrawlStatus::CrawlPending => write!(f, "crawl_pending"),
            CrawlStatus::Crawled => write!(f, "crawled"),
            CrawlStatus::CrawlFailed => write!(f, "crawl_failed"),
        }
    }
}

impl FromStr for CrawlStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "crawl_pending" => Ok(CrawlStatus::CrawlPending),
            "crawled" => Ok(CrawlStatus::Crawled),
            "crawl_failed" => Ok(CrawlStatus::CrawlFailed),
            _ => Err(()),
        }
    }
}

/// 结构化提取状态枚举
///
/// 抓取完成后的第二段生命周期，menu_items沿用同一组状态。
/// 状态转换遵循以下流程：
/// Pending → Complete/Failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStatus {
    /// 等待提取
    #[default]
    Pending,
    /// 提取完成
    Complete,
    /// 提取失败
    Failed,
}

impl fmt::Display for ExtractionStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExtractionStatus::Pending => write!(f, "pending"),
            ExtractionStatus::Complete => write!(f, "complete"),
            ExtractionStatus::Failed => write!(f, "failed"),
        }
    }
}

impl FromStr for ExtractionStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ExtractionStatus::Pending),
            "complete" => Ok(ExtractionStatus::Complete),
            "failed" => Ok(ExtractionStatus::Failed),
            _ => Err(()),
        }
    }
}

/// 抓取成功后写回页面的内容
#[derive(Debug, Clone, Default)]
pub struct CrawlContent {
    pub parsed_text: Option<String>,
    pub parsed_md: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_recipe: Option<bool>,
    pub proxy_used: Option<String>,
}

impl RecipePage {
    /// 创建一个新的食谱页面
    ///
    /// # 参数
    ///
    /// * `url` - 规范化后的URL
    /// * `original_url` - 原始URL
    /// * `site_id` - 所属站点ID
    /// * `sitemap_url` - 发现该URL的站点地图
    ///
    /// # 返回值
    ///
    /// 返回新创建的页面实例，randnum由仓库在插入时分配
    pub fn new(
        url: String,
        original_url: Option<String>,
        site_id: Option<i32>,
        sitemap_url: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            url,
            original_url,
            site_id,
            sitemap_url,
            last_modified: None,
            last_extracted: Some(Utc::now().into()),
            last_crawled: None,
            last_attempt: None,
            status: CrawlStatus::CrawlPending,
            failure_reason: None,
            llm_status: ExtractionStatus::Pending,
            llm_failure_reason: None,
            parsed_text: None,
            parsed_md: None,
            title: None,
            description: None,
            proxy_used: None,
            is_recipe: None,
            randnum: None,
        }
    }

    /// 记录抓取成功
    ///
    /// 将页面状态从CrawlPending变更为Crawled并写入抓取内容
    ///
    /// # 参数
    ///
    /// * `content` - 抓取得到的页面内容
    ///
    /// # 返回值
    ///
    /// * `Ok(RecipePage)` - 更新后的页面
    /// * `Err(DomainError)` - 状态转换失败
    pub fn mark_crawled(mut self, content: CrawlContent) -> Result<Self, DomainError> {
        match self.status {
            CrawlStatus::CrawlPending => {
                self.status = CrawlStatus::Crawled;
                self.parsed_text = content.parsed_text;
                self.parsed_md = content.parsed_md;
                self.title = content.title;
                self.description = content.description;
                self.is_recipe = content.is_recipe;
                self.proxy_used = content.proxy_used;
                self.failure_reason = None;
                self.last_crawled = Some(Utc::now().into());
                self.last_attempt = Some(Utc::now().into());
                Ok(self)
            }
            _ => Err(DomainError::InvalidStateTransition),
        }
    }

    /// 记录抓取失败
    ///
    /// 将页面状态从CrawlPending变更为CrawlFailed并记录原因
    ///
    /// # 返回值
    ///
    /// * `Ok(RecipePage)` - 更新后的页面
    /// * `Err(DomainError)` - 状态转换失败
    pub fn mark_crawl_failed(mut self, reason: String) -> Result<Self, DomainError> {
        match self.status {
            CrawlStatus::CrawlPending => {
                self.status = CrawlStatus::CrawlFailed;
                self.failure_reason = Some(reason);
                self.last_attempt = Some(Utc::now().into());
                Ok(self)
            }
            _ => Err(DomainError::InvalidStateTransition),
        }
    }

    /// 判断页面是否满足结构化提取条件
    ///
    /// # 返回值
    ///
    /// 页面已抓取、确认为食谱、正文非空且尚未提取时返回true
    pub fn is_extraction_ready(&self) -> bool {
        self.status == CrawlStatus::Crawled
            && self.is_recipe == Some(true)
            && self.parsed_text.is_some()
            && self.llm_status == ExtractionStatus::Pending
    }
}
