// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(schema_name = "menu", table_name = "dish_attributes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub dish_id: Uuid,
    pub flavor_attributes: Option<Vec<String>>,
    pub texture_attributes: Option<Vec<String>>,
    pub aroma_attributes: Option<Vec<String>>,
    pub cooking_techniques: Option<Vec<String>>,
    pub diet_preferences: Option<Vec<String>>,
    pub functional_health: Option<Vec<String>>,
    pub occasions: Option<Vec<String>>,
    pub convenience_attributes: Option<Vec<String>>,
    pub social_setting: Option<Vec<String>>,
    pub emotional_attributes: Option<Vec<String>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
