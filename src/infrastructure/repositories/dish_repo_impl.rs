// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::dish::{Dish, DishAttributes, DishIngredient, DishRecord};
use crate::domain::repositories::dish_repository::DishRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::recipe::dish as dish_entity;
use crate::infrastructure::database::entities::recipe::dish_attributes as attrs_entity;
use crate::infrastructure::database::entities::recipe::dish_ingredient as ingredient_entity;
use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

/// recipe模式菜品仓库实现
///
/// 基于SeaORM实现的菜品聚合数据访问层。menu模式由
/// MenuDishRepositoryImpl提供同构实现，两个模式下的表
/// 结构一致但schema限定不同。
#[derive(Clone)]
pub struct RecipeDishRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl RecipeDishRepositoryImpl {
    /// 创建新的菜品仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的菜品仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<dish_entity::Model> for Dish {
    fn from(model: dish_entity::Model) -> Self {
        Self {
            dish_id: model.dish_id,
            dish_name: model.dish_name,
            description: model.description,
            meal_time: model.meal_time,
            general_category: model.general_category,
            specific_category: model.specific_category,
            cuisine: model.cuisine,
            complexity: model.complexity,
            serving_temperature: model.serving_temperature,
            season: model.season,
            source: model.source.parse().unwrap_or_default(),
            star_rating: model.star_rating,
            num_ratings: model.num_ratings,
            num_reviews: model.num_reviews,
            date_published: model.date_published,
            date_updated: model.date_updated,
            date_created: model.date_created,
            date_modified: model.date_modified,
        }
    }
}

impl From<&Dish> for dish_entity::ActiveModel {
    fn from(dish: &Dish) -> Self {
        Self {
            dish_id: Set(dish.dish_id),
            dish_name: Set(dish.dish_name.clone()),
            description: Set(dish.description.clone()),
            meal_time: Set(dish.meal_time.clone()),
            general_category: Set(dish.general_category.clone()),
            specific_category: Set(dish.specific_category.clone()),
            cuisine: Set(dish.cuisine.clone()),
            complexity: Set(dish.complexity.clone()),
            serving_temperature: Set(dish.serving_temperature.clone()),
            season: Set(dish.season.clone()),
            source: Set(dish.source.to_string()),
            star_rating: Set(dish.star_rating),
            num_ratings: Set(dish.num_ratings),
            num_reviews: Set(dish.num_reviews),
            date_published: Set(dish.date_published),
            date_updated: Set(dish.date_updated),
            date_created: Set(dish.date_created),
            date_modified: Set(dish.date_modified),
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
            date_added: model.date_added,
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

impl From<&DishAttributes> for attrs_entity::ActiveModel {
    fn from(attrs: &DishAttributes) -> Self {
        Self {
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
        }
    }
}

#[async_trait]
impl DishRepository for RecipeDishRepositoryImpl {
    async fn save(&self, record: &DishRecord) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        let dish_id = record.dish.dish_id;

        // Upsert the dish row; an update refreshes date_modified
        let dish_model: dish_entity::ActiveModel = (&record.dish).into();
        dish_entity::Entity::insert(dish_model)
            .on_conflict(
                OnConflict::column(dish_entity::Column::DishId)
                    .update_columns([
                        dish_entity::Column::DishName,
                        dish_entity::Column::Description,
                        dish_entity::Column::MealTime,
                        dish_entity::Column::GeneralCategory,
                        dish_entity::Column::SpecificCategory,
                        dish_entity::Column::Cuisine,
                        dish_entity::Column::Complexity,
                        dish_entity::Column::ServingTemperature,
                        dish_entity::Column::Season,
                        dish_entity::Column::Source,
                        dish_entity::Column::StarRating,
                        dish_entity::Column::NumRatings,
                        dish_entity::Column::NumReviews,
                        dish_entity::Column::DatePublished,
                        dish_entity::Column::DateUpdated,
                    ])
                    .value(dish_entity::Column::DateModified, Expr::current_timestamp())
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;

        // Replace ingredients wholesale, renumbering from 1
        ingredient_entity::Entity::delete_many()
            .filter(ingredient_entity::Column::DishId.eq(dish_id))
            .exec(&txn)
            .await?;

        if !record.ingredients.is_empty() {
            let rows: Vec<ingredient_entity::ActiveModel> = record
                .ingredients
                .iter()
                .enumerate()
                .map(|(index, ingredient)| ingredient_entity::ActiveModel {
                    dish_id: Set(dish_id),
                    ingredient_id: Set(index as i32 + 1),
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
                    date_added: Set(ingredient.date_added),
                })
                .collect();

            ingredient_entity::Entity::insert_many(rows)
                .exec_without_returning(&txn)
                .await?;
        }

        // Upsert attributes when present
        if let Some(attributes) = &record.attributes {
            let attrs_model: attrs_entity::ActiveModel = attributes.into();
            attrs_entity::Entity::insert(attrs_model)
                .on_conflict(
                    OnConflict::column(attrs_entity::Column::DishId)
                        .update_columns([
                            attrs_entity::Column::FlavorAttributes,
                            attrs_entity::Column::TextureAttributes,
                            attrs_entity::Column::AromaAttributes,
                            attrs_entity::Column::CookingTechniques,
                            attrs_entity::Column::DietPreferences,
                            attrs_entity::Column::FunctionalHealth,
                            attrs_entity::Column::Occasions,
                            attrs_entity::Column::ConvenienceAttributes,
                            attrs_entity::Column::SocialSetting,
                            attrs_entity::Column::EmotionalAttributes,
                        ])
                        .to_owned(),
                )
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(())
    }

    async fn find(&self, dish_id: Uuid) -> Result<Option<DishRecord>, RepositoryError> {
        let Some(dish_model) = dish_entity::Entity::find_by_id(dish_id)
            .one(self.db.as_ref())
            .await?
        else {
            return Ok(None);
        };

        let ingredients = ingredient_entity::Entity::find()
            .filter(ingredient_entity::Column::DishId.eq(dish_id))
            .order_by_asc(ingredient_entity::Column::IngredientId)
            .all(self.db.as_ref())
            .await?;

        let attributes = attrs_entity::Entity::find_by_id(dish_id)
            .one(self.db.as_ref())
            .await?;

        Ok(Some(DishRecord {
            dish: dish_model.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            attributes: attributes.map(Into::into),
        }))
    }

    async fn delete(&self, dish_id: Uuid) -> Result<bool, RepositoryError> {
        let result = dish_entity::Entity::delete_by_id(dish_id)
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn record_rating(&self, dish_id: Uuid, stars: f64) -> Result<Dish, RepositoryError> {
        let txn = self.db.begin().await?;

        let model = dish_entity::Entity::find_by_id(dish_id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let mut dish = Dish::from(model.clone());
        dish.apply_rating(stars);

        let mut active: dish_entity::ActiveModel = model.into();
        active.star_rating = Set(dish.star_rating);
        active.num_ratings = Set(dish.num_ratings);
        active.date_modified = Set(dish.date_modified);
        active.update(&txn).await?;

        txn.commit().await?;
        Ok(dish)
    }

    async fn record_review(&self, dish_id: Uuid) -> Result<(), RepositoryError> {
        let result = dish_entity::Entity::update_many()
            .col_expr(
                dish_entity::Column::NumReviews,
                Expr::col(dish_entity::Column::NumReviews).add(1),
            )
            .col_expr(
                dish_entity::Column::DateModified,
                Expr::current_timestamp().into(),
            )
            .filter(dish_entity::Column::DishId.eq(dish_id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let total = dish_entity::Entity::find().count(self.db.as_ref()).await?;
        Ok(total)
    }

    async fn fetch_dishes(&self, limit: u64, offset: u64) -> Result<Vec<Dish>, RepositoryError> {
        let models = dish_entity::Entity::find()
            .order_by_asc(dish_entity::Column::DishId)
            .limit(limit)
            .offset(offset)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn fetch_ingredients(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<DishIngredient>, RepositoryError> {
        let models = ingredient_entity::Entity::find()
            .order_by_asc(ingredient_entity::Column::DishId)
            .order_by_asc(ingredient_entity::Column::IngredientId)
            .limit(limit)
            .offset(offset)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn fetch_attributes(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<DishAttributes>, RepositoryError> {
        let models = attrs_entity::Entity::find()
            .order_by_asc(attrs_entity::Column::DishId)
            .limit(limit)
            .offset(offset)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
