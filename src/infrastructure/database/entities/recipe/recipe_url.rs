// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(schema_name = "recipe", table_name = "recipe_urls")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub url: String,
    pub original_url: Option<String>,
    pub site_id: Option<i32>,
    pub sitemap_url: Option<String>,
    pub last_modified: Option<ChronoDateTimeWithTimeZone>,
    pub last_extracted: Option<ChronoDateTimeWithTimeZone>,
    pub last_crawled: Option<ChronoDateTimeWithTimeZone>,
    pub last_attempt: Option<ChronoDateTimeWithTimeZone>,
    pub status: String,
    pub failure_reason: Option<String>,
    pub llm_status: String,
    pub llm_failure_reason: Option<String>,
    pub parsed_text: Option<String>,
    pub parsed_md: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub proxy_used: Option<String>,
    pub is_recipe: Option<bool>,
    pub randnum: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
