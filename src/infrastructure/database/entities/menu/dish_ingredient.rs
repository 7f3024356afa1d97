// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(schema_name = "menu", table_name = "dish_ingredients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub dish_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub ingredient_id: i32,
    pub ingredient: Option<String>,
    pub flavor_ingredient: Option<String>,
    pub quantity: Option<f64>,
    pub units: Option<String>,
    pub format: Option<String>,
    #[sea_orm(column_name = "type")]
    pub kind: Option<String>,
    pub ingredient_role: Option<String>,
    pub flavor_role: Option<String>,
    pub prep_method: Option<String>,
    pub alternative_ingredients: Option<Vec<String>>,
    pub date_added: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
