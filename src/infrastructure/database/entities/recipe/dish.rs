// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(schema_name = "recipe", table_name = "dishes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub dish_id: Uuid,
    pub dish_name: String,
    pub description: Option<String>,
    pub meal_time: Option<String>,
    pub general_category: Option<String>,
    pub specific_category: Option<String>,
    pub cuisine: Option<String>,
    pub complexity: Option<String>,
    pub serving_temperature: Option<String>,
    pub season: Option<String>,
    pub source: String,
    pub star_rating: Option<f64>,
    pub num_ratings: i32,
    pub num_reviews: i32,
    pub date_published: Option<ChronoDate>,
    pub date_updated: Option<ChronoDate>,
    pub date_created: ChronoDateTimeWithTimeZone,
    pub date_modified: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
