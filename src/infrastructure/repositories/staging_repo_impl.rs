// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::dish::{Dish, DishAttributes, DishIngredient};
use crate::domain::repositories::staging_repository::{StagingCounts, StagingRepository};
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::staging::dish as dish_entity;
use crate::infrastructure::database::entities::staging::dish_attributes as attrs_entity;
use crate::infrastructure::database::entities::staging::dish_ingredient as ingredient_entity;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 暂存仓库实现
///
/// 基于SeaORM实现的无约束暂存表数据访问层。装载路径上
/// 没有冲突处理：表没有键，重复与孤儿都被原样接受。
#[derive(Clone)]
pub struct StagingRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl StagingRepositoryImpl {
    /// 创建新的暂存仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的暂存仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<dish_entity::Model> for Dish {
    fn from(model: dish_entity::Model) -> Self {
        Self {
            dish_id: model.dish_id,
            dish_name: model.dish_name.unwrap_or_default(),
            description: model.description,
            meal_time: model.meal_time,
            general_category: model.general_category,
            specific_category: model.specific_category,
            cuisine: model.cuisine,
            complexity: model.complexity,
            serving_temperature: model.serving_temperature,
            season: model.season,
            source: model
                .source
                .as_deref()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            star_rating: model.star_rating,
            num_ratings: model.num_ratings.unwrap_or(0),
            num_reviews: model.num_reviews.unwrap_or(0),
            date_published: model.date_published,
            date_updated: model.date_updated,
            date_created: model
                .date_created
                .unwrap_or_else(|| chrono::Utc::now().into()),
            date_modified: model
                .date_modified
                .unwrap_or_else(|| chrono::Utc::now().into()),
        }
    }
}

impl From<ingredient_entity::Model> for DishIngredient {
    fn from(model: ingredient_entity::Model) -> Self {
        Self {
            dish_id: model.dish_id,
            ingredient_id: model.ingredient_id,
            ingredient: model.ingredient,
            flavor_ingredient: model.flavor_ingredient,
            quantity: model.quantity,
            units: model.units,
            format: model.format,
            kind: model.kind,
            ingredient_role: model.ingredient_role,
            flavor_role: model.flavor_role,
            prep_method: model.prep_method,
            alternative_ingredients: model.alternative_ingredients,
            date_added: model
                .date_added
                .unwrap_or_else(|| chrono::Utc::now().into()),
        }
    }
}

impl From<attrs_entity::Model> for DishAttributes {
    fn from(model: attrs_entity::Model) -> Self {
        Self {
            dish_id: model.dish_id,
            flavor_attributes: model.flavor_attributes,
            texture_attributes: model.texture_attributes,
            aroma_attributes: model.aroma_attributes,
            cooking_techniques: model.cooking_techniques,
            diet_preferences: model.diet_preferences,
            functional_health: model.functional_health,
            occasions: model.occasions,
            convenience_attributes: model.convenience_attributes,
            social_setting: model.social_setting,
            emotional_attributes: model.emotional_attributes,
        }
    }
}

#[async_trait]
impl StagingRepository for StagingRepositoryImpl {
    async fn load_dishes(&self, rows: &[Dish]) -> Result<u64, RepositoryError> {
        if rows.is_empty() {
            return Ok(0);
        }

        let models: Vec<dish_entity::ActiveModel> = rows
            .iter()
            .map(|dish| dish_entity::ActiveModel {
                dish_id: Set(dish.dish_id),
                dish_name: Set(Some(dish.dish_name.clone())),
                description: Set(dish.description.clone()),
                meal_time: Set(dish.meal_time.clone()),
                general_category: Set(dish.general_category.clone()),
                specific_category: Set(dish.specific_category.clone()),
                cuisine: Set(dish.cuisine.clone()),
                complexity: Set(dish.complexity.clone()),
                serving_temperature: Set(dish.serving_temperature.clone()),
                season: Set(dish.season.clone()),
                source: Set(Some(dish.source.to_string())),
                star_rating: Set(dish.star_rating),
                num_ratings: Set(Some(dish.num_ratings)),
                num_reviews: Set(Some(dish.num_reviews)),
                date_published: Set(dish.date_published),
                date_updated: Set(dish.date_updated),
                date_created: Set(Some(dish.date_created)),
                date_modified: Set(Some(dish.date_modified)),
            })
            .collect();

        let inserted = dish_entity::Entity::insert_many(models)
            .exec_without_returning(self.db.as_ref())
            .await?;

        Ok(inserted)
    }

    async fn load_ingredients(&self, rows: &[DishIngredient]) -> Result<u64, RepositoryError> {
        if rows.is_empty() {
            return Ok(0);
        }

        let models: Vec<ingredient_entity::ActiveModel> = rows
            .iter()
            .map(|ingredient| ingredient_entity::ActiveModel {
                dish_id: Set(ingredient.dish_id),
                ingredient_id: Set(ingredient.ingredient_id),
                ingredient: Set(ingredient.ingredient.clone()),
                flavor_ingredient: Set(ingredient.flavor_ingredient.clone()),
                quantity: Set(ingredient.quantity),
                units: Set(ingredient.units.clone()),
                format: Set(ingredient.format.clone()),
                kind: Set(ingredient.kind.clone()),
                ingredient_role: Set(ingredient.ingredient_role.clone()),
                flavor_role: Set(ingredient.flavor_role.clone()),
                prep_method: Set(ingredient.prep_method.clone()),
                alternative_ingredients: Set(ingredient.alternative_ingredients.clone()),
                date_added: Set(Some(ingredient.date_added)),
            })
            .collect();

        let inserted = ingredient_entity::Entity::insert_many(models)
            .exec_without_returning(self.db.as_ref())
            .await?;

        Ok(inserted)
    }

    async fn load_attributes(&self, rows: &[DishAttributes]) -> Result<u64, RepositoryError> {
        if rows.is_empty() {
            return Ok(0);
        }

        let models: Vec<attrs_entity::ActiveModel> = rows
            .iter()
            .map(|attrs| attrs_entity::ActiveModel {
                dish_id: Set(attrs.dish_id),
                flavor_attributes: Set(attrs.flavor_attributes.clone()),
                texture_attributes: Set(attrs.texture_attributes.clone()),
                aroma_attributes: Set(attrs.aroma_attributes.clone()),
                cooking_techniques: Set(attrs.cooking_techniques.clone()),
                diet_preferences: Set(attrs.diet_preferences.clone()),
                functional_health: Set(attrs.functional_health.clone()),
                occasions: Set(attrs.occasions.clone()),
                convenience_attributes: Set(attrs.convenience_attributes.clone()),
                social_setting: Set(attrs.social_setting.clone()),
                emotional_attributes: Set(attrs.emotional_attributes.clone()),
            })
            .collect();

        let inserted = attrs_entity::Entity::insert_many(models)
            .exec_without_returning(self.db.as_ref())
            .await?;

        Ok(inserted)
    }

    async fn counts(&self) -> Result<StagingCounts, RepositoryError> {
        let dishes = dish_entity::Entity::find().count(self.db.as_ref()).await?;
        let ingredients = ingredient_entity::Entity::find()
            .count(self.db.as_ref())
            .await?;
        let attributes = attrs_entity::Entity::find().count(self.db.as_ref()).await?;

        Ok(StagingCounts {
            dishes,
            ingredients,
            attributes,
        })
    }

    async fn fetch_dish_batch(&self, limit: u64) -> Result<Vec<Dish>, RepositoryError> {
        let models = dish_entity::Entity::find()
            .limit(limit)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn ingredients_for(
        &self,
        dish_id: Uuid,
    ) -> Result<Vec<DishIngredient>, RepositoryError> {
        let models = ingredient_entity::Entity::find()
            .filter(ingredient_entity::Column::DishId.eq(dish_id))
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn attributes_for(
        &self,
        dish_id: Uuid,
    ) -> Result<Option<DishAttributes>, RepositoryError> {
        let model = attrs_entity::Entity::find()
            .filter(attrs_entity::Column::DishId.eq(dish_id))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn remove(&self, dish_ids: &[Uuid]) -> Result<u64, RepositoryError> {
        if dish_ids.is_empty() {
            return Ok(0);
        }

        let ids = dish_ids.to_vec();
        let mut removed = 0;

        removed += attrs_entity::Entity::delete_many()
            .filter(attrs_entity::Column::DishId.is_in(ids.clone()))
            .exec(self.db.as_ref())
            .await?
            .rows_affected;

        removed += ingredient_entity::Entity::delete_many()
            .filter(ingredient_entity::Column::DishId.is_in(ids.clone()))
            .exec(self.db.as_ref())
            .await?
            .rows_affected;

        removed += dish_entity::Entity::delete_many()
            .filter(dish_entity::Column::DishId.is_in(ids))
            .exec(self.db.as_ref())
            .await?
            .rows_affected;

        Ok(removed)
    }
}
