// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DbBackend;

use crate::m20260118_000002_create_dish_tables::{DishAttributes, DishIngredients, Dishes};

/// 暂存表迁移
///
/// 创建staging模式下的无约束菜品三表。批量装载先落到这里，
/// 主键、外键和唯一性校验全部推迟到对账阶段。时间戳默认值
/// 保留，其余列一律可空。
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    /// 应用数据库迁移
    ///
    /// # 参数
    ///
    /// * `manager` - 数据库模式管理器
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 迁移成功
    /// * `Err(DbErr)` - 迁移失败
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() == DbBackend::Postgres {
            manager
                .get_connection()
                .execute_unprepared("CREATE SCHEMA IF NOT EXISTS staging")
                .await?;
        }

        // 1. Create staging.dishes (no keys, no uniqueness)
        manager
            .create_table(
                Table::create()
                    .table((Staging, Dishes::Table))
                    .if_not_exists()
                    .col(ColumnDef::new(Dishes::DishId).uuid())
                    .col(ColumnDef::new(Dishes::DishName).text())
                    .col(ColumnDef::new(Dishes::Description).text())
                    .col(ColumnDef::new(Dishes::MealTime).text())
                    .col(ColumnDef::new(Dishes::GeneralCategory).text())
                    .col(ColumnDef::new(Dishes::SpecificCategory).text())
                    .col(ColumnDef::new(Dishes::Cuisine).text())
                    .col(ColumnDef::new(Dishes::Complexity).text())
                    .col(ColumnDef::new(Dishes::ServingTemperature).text())
                    .col(ColumnDef::new(Dishes::Season).text())
                    .col(ColumnDef::new(Dishes::Source).text())
                    .col(ColumnDef::new(Dishes::StarRating).double())
                    .col(ColumnDef::new(Dishes::NumRatings).integer())
                    .col(ColumnDef::new(Dishes::NumReviews).integer())
                    .col(ColumnDef::new(Dishes::DatePublished).date())
                    .col(ColumnDef::new(Dishes::DateUpdated).date())
                    .col(
                        ColumnDef::new(Dishes::DateCreated)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Dishes::DateModified)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 2. Create staging.dish_ingredients
        manager
            .create_table(
                Table::create()
                    .table((Staging, DishIngredients::Table))
                    .if_not_exists()
                    .col(ColumnDef::new(DishIngredients::DishId).uuid())
                    .col(ColumnDef::new(DishIngredients::IngredientId).integer())
                    .col(ColumnDef::new(DishIngredients::Ingredient).text())
                    .col(ColumnDef::new(DishIngredients::FlavorIngredient).text())
                    .col(ColumnDef::new(DishIngredients::Quantity).double())
                    .col(ColumnDef::new(DishIngredients::Units).text())
                    .col(ColumnDef::new(DishIngredients::Format).text())
                    .col(ColumnDef::new(DishIngredients::Type).text())
                    .col(ColumnDef::new(DishIngredients::IngredientRole).text())
                    .col(ColumnDef::new(DishIngredients::FlavorRole).text())
                    .col(ColumnDef::new(DishIngredients::PrepMethod).text())
                    .col(
                        ColumnDef::new(DishIngredients::AlternativeIngredients)
                            .array(ColumnType::Text),
                    )
                    .col(
                        ColumnDef::new(DishIngredients::DateAdded)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 3. Create staging.dish_attributes
        manager
            .create_table(
                Table::create()
                    .table((Staging, DishAttributes::Table))
                    .if_not_exists()
                    .col(ColumnDef::new(DishAttributes::DishId).uuid())
                    .col(
                        ColumnDef::new(DishAttributes::FlavorAttributes).array(ColumnType::Text),
                    )
                    .col(
                        ColumnDef::new(DishAttributes::TextureAttributes).array(ColumnType::Text),
                    )
                    .col(ColumnDef::new(DishAttributes::AromaAttributes).array(ColumnType::Text))
                    .col(
                        ColumnDef::new(DishAttributes::CookingTechniques).array(ColumnType::Text),
                    )
                    .col(ColumnDef::new(DishAttributes::DietPreferences).array(ColumnType::Text))
                    .col(ColumnDef::new(DishAttributes::FunctionalHealth).array(ColumnType::Text))
                    .col(ColumnDef::new(DishAttributes::Occasions).array(ColumnType::Text))
                    .col(
                        ColumnDef::new(DishAttributes::ConvenienceAttributes)
                            .array(ColumnType::Text),
                    )
                    .col(ColumnDef::new(DishAttributes::SocialSetting).array(ColumnType::Text))
                    .col(
                        ColumnDef::new(DishAttributes::EmotionalAttributes)
                            .array(ColumnType::Text),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table((Staging, DishAttributes::Table)).to_owned())
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table((Staging, DishIngredients::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table((Staging, Dishes::Table)).to_owned())
            .await?;

        if manager.get_database_backend() == DbBackend::Postgres {
            manager
                .get_connection()
                .execute_unprepared("DROP SCHEMA IF EXISTS staging")
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
struct Staging;
