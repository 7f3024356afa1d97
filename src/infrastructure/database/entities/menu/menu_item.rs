// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(schema_name = "menu", table_name = "menu_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_id: Option<Uuid>,
    pub old_image_id: Option<String>,
    pub date_uploaded: Option<ChronoDateTimeWithTimeZone>,
    pub llm_status: String,
    pub llm_error_reason: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
