// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(schema_name = "recipe", table_name = "recipe_sites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub recipe_site_url: String,
    pub manual_sitemaps: Option<Vec<String>>,
    pub status: String,
    pub last_processed: Option<ChronoDateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
