// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::dish::{Dish, DishAttributes, DishIngredient};
use crate::domain::repositories::dish_repository::DishRepository;
use crate::domain::services::ServiceError;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// 导出的菜品行
///
/// 下游仓库的列布局与本库不同，导出时在这里完成重映射：
/// dish_base_type、food_format、country在本库没有对应列，
/// 导出为空占位。
#[derive(Debug, Serialize)]
pub struct ExportedDish {
    pub dish_id: Uuid,
    pub dish_name: String,
    pub description: Option<String>,
    pub dish_base_type: Option<String>,
    pub meal_time: Option<String>,
    pub food_format: Option<String>,
    pub general_category: Option<String>,
    pub specific_category: Option<String>,
    pub cuisine: Option<String>,
    pub country: Option<String>,
    pub complexity: Option<String>,
    pub serving_temperature: Option<String>,
    pub season: Option<String>,
    pub source: String,
    pub date_updated: Option<NaiveDate>,
    pub date_published: Option<NaiveDate>,
    pub date_created: DateTime<FixedOffset>,
    pub date_modified: DateTime<FixedOffset>,
    pub star_rating: Option<f64>,
    pub num_ratings: i32,
    pub num_reviews: i32,
}

impl From<&Dish> for ExportedDish {
    fn from(dish: &Dish) -> Self {
        Self {
            dish_id: dish.dish_id,
            dish_name: dish.dish_name.clone(),
            description: dish.description.clone(),
            dish_base_type: None,
            meal_time: dish.meal_time.clone(),
            food_format: None,
            general_category: dish.general_category.clone(),
            specific_category: dish.specific_category.clone(),
            cuisine: dish.cuisine.clone(),
            country: None,
            complexity: dish.complexity.clone(),
            serving_temperature: dish.serving_temperature.clone(),
            season: dish.season.clone(),
            source: dish.source.to_string(),
            date_updated: dish.date_updated,
            date_published: dish.date_published,
            date_created: dish.date_created,
            date_modified: dish.date_modified,
            star_rating: dish.star_rating,
            num_ratings: dish.num_ratings,
            num_reviews: dish.num_reviews,
        }
    }
}

/// 导出的配料行
///
/// 下游列名与本库不同：flavor_ingredient导出为name，
/// ingredient导出为full_ingredient，prep_method导出为
/// cooking_technique，alternative_ingredients导出为
/// alternatives。flavor_notes在本库没有对应列。
#[derive(Debug, Serialize)]
pub struct ExportedIngredient {
    pub dish_id: Uuid,
    pub ingredient_id: i32,
    pub name: Option<String>,
    pub full_ingredient: Option<String>,
    pub quantity: Option<f64>,
    pub units: Option<String>,
    pub format: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub ingredient_role: Option<String>,
    pub cooking_technique: Option<String>,
    pub flavor_role: Option<String>,
    pub alternatives: Option<Vec<String>>,
    pub flavor_notes: Option<String>,
    pub date_added: DateTime<FixedOffset>,
}

impl From<&DishIngredient> for ExportedIngredient {
    fn from(ingredient: &DishIngredient) -> Self {
        Self {
            dish_id: ingredient.dish_id,
            ingredient_id: ingredient.ingredient_id,
            name: ingredient.flavor_ingredient.clone(),
            full_ingredient: ingredient.ingredient.clone(),
            quantity: ingredient.quantity,
            units: ingredient.units.clone(),
            format: ingredient.format.clone(),
            kind: ingredient.kind.clone(),
            ingredient_role: ingredient.ingredient_role.clone(),
            cooking_technique: ingredient.prep_method.clone(),
            flavor_role: ingredient.flavor_role.clone(),
            alternatives: ingredient.alternative_ingredients.clone(),
            flavor_notes: None,
            date_added: ingredient.date_added,
        }
    }
}

/// 导出的属性行，列布局与本库一致
#[derive(Debug, Serialize)]
pub struct ExportedAttributes {
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

impl From<&DishAttributes> for ExportedAttributes {
    fn from(attrs: &DishAttributes) -> Self {
        Self {
            dish_id: attrs.dish_id,
            flavor_attributes: attrs.flavor_attributes.clone(),
            texture_attributes: attrs.texture_attributes.clone(),
            aroma_attributes: attrs.aroma_attributes.clone(),
            cooking_techniques: attrs.cooking_techniques.clone(),
            diet_preferences: attrs.diet_preferences.clone(),
            functional_health: attrs.functional_health.clone(),
            occasions: attrs.occasions.clone(),
            convenience_attributes: attrs.convenience_attributes.clone(),
            social_setting: attrs.social_setting.clone(),
            emotional_attributes: attrs.emotional_attributes.clone(),
        }
    }
}

/// 导出统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub dishes: u64,
    pub ingredients: u64,
    pub attributes: u64,
}

/// 导出服务
///
/// 将一个模式下的菜品数据分批导出为NDJSON文件，每张表
/// 一个文件。菜品先导出，配料与属性随后，与下游的依赖
/// 顺序一致。
pub struct ExportService {
    /// 菜品仓库
    dishes: Arc<dyn DishRepository>,
    /// 每批读取的行数
    batch_size: u64,
}

impl ExportService {
    /// 创建新的导出服务实例
    ///
    /// # 参数
    ///
    /// * `dishes` - 菜品仓库
    /// * `batch_size` - 每批读取的行数
    ///
    /// # 返回值
    ///
    /// 返回新的导出服务实例
    pub fn new(dishes: Arc<dyn DishRepository>, batch_size: u64) -> Self {
        Self { dishes, batch_size }
    }

    /// 导出到目标目录
    ///
    /// 目录不存在时创建。产出dishes.ndjson、
    /// dish_ingredients.ndjson与dish_attributes.ndjson三个文件。
    ///
    /// # 参数
    ///
    /// * `dir` - 目标目录
    ///
    /// # 返回值
    ///
    /// * `Ok(ExportSummary)` - 各表导出的行数
    /// * `Err(ServiceError)` - 导出失败
    pub async fn export_to_dir(&self, dir: &Path) -> Result<ExportSummary, ServiceError> {
        std::fs::create_dir_all(dir)?;

        let total = self.dishes.count().await?;
        info!(total, "Starting dish export");

        let dishes = self.export_dishes(&dir.join("dishes.ndjson")).await?;
        let ingredients = self
            .export_ingredients(&dir.join("dish_ingredients.ndjson"))
            .await?;
        let attributes = self
            .export_attributes(&dir.join("dish_attributes.ndjson"))
            .await?;

        info!(dishes, ingredients, attributes, "Export complete");
        Ok(ExportSummary {
            dishes,
            ingredients,
            attributes,
        })
    }

    async fn export_dishes(&self, path: &Path) -> Result<u64, ServiceError> {
        let mut writer = BufWriter::new(File::create(path)?);
        let mut offset = 0u64;
        let mut copied = 0u64;

        loop {
            let batch = self.dishes.fetch_dishes(self.batch_size, offset).await?;
            if batch.is_empty() {
                break;
            }

            for dish in &batch {
                serde_json::to_writer(&mut writer, &ExportedDish::from(dish))?;
                writer.write_all(b"\n")?;
            }

            copied += batch.len() as u64;
            offset += self.batch_size;
            info!(copied, "Copied dishes");
        }

        writer.flush()?;
        Ok(copied)
    }

    async fn export_ingredients(&self, path: &Path) -> Result<u64, ServiceError> {
        let mut writer = BufWriter::new(File::create(path)?);
        let mut offset = 0u64;
        let mut copied = 0u64;

        loop {
            let batch = self
                .dishes
                .fetch_ingredients(self.batch_size, offset)
                .await?;
            if batch.is_empty() {
                break;
            }

            for ingredient in &batch {
                serde_json::to_writer(&mut writer, &ExportedIngredient::from(ingredient))?;
                writer.write_all(b"\n")?;
            }

            copied += batch.len() as u64;
            offset += self.batch_size;
            info!(copied, "Copied dish_ingredients");
        }

        writer.flush()?;
        Ok(copied)
    }

    async fn export_attributes(&self, path: &Path) -> Result<u64, ServiceError> {
        let mut writer = BufWriter::new(File::create(path)?);
        let mut offset = 0u64;
        let mut copied = 0u64;

        loop {
            let batch = self
                .dishes
                .fetch_attributes(self.batch_size, offset)
                .await?;
            if batch.is_empty() {
                break;
            }

            for attrs in &batch {
                serde_json::to_writer(&mut writer, &ExportedAttributes::from(attrs))?;
                writer.write_all(b"\n")?;
            }

            copied += batch.len() as u64;
            offset += self.batch_size;
            info!(copied, "Copied dish_attributes");
        }

        writer.flush()?;
        Ok(copied)
    }
}
