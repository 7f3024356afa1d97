// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含数据库、批处理和导出等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 批处理配置
    pub batch: BatchSettings,
    /// 导出配置
    pub export: ExportSettings,
}

/// 数据库配置设置
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 批处理配置设置
#[derive(Debug, Deserialize)]
pub struct BatchSettings {
    /// 结构化提取的单批页面/条目数
    pub extraction_batch_size: u64,
    /// 对账的单批菜品行数
    pub reconcile_batch_size: u64,
    /// 图片回填的单批条目数
    pub image_backfill_batch_size: u64,
}

/// 导出配置设置
#[derive(Debug, Deserialize)]
pub struct ExportSettings {
    /// 每批导出的行数
    pub batch_size: u64,
    /// 默认输出目录
    pub output_dir: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default DB pool settings
            .set_default("database.max_connections", 100)?
            .set_default("database.min_connections", 10)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default batch settings
            .set_default("batch.extraction_batch_size", 64)?
            .set_default("batch.reconcile_batch_size", 500)?
            .set_default("batch.image_backfill_batch_size", 50000)?
            // Default export settings
            .set_default("export.batch_size", 1000)?
            .set_default("export.output_dir", "./export")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("DISHSTORE").separator("__"));

        builder.build()?.try_deserialize()
    }
}
