// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 菜品表迁移
///
/// 在recipe模式下创建dishes、dish_ingredients和dish_attributes表。
/// 菜品行通过级联外键挂在recipe_urls之下，父行删除时菜品及其
/// 配料和属性一并删除。
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
        // 1. Create dishes table (depends on recipe_urls)
        manager
            .create_table(
                Table::create()
                    .table((Recipe, Dishes::Table))
                    .if_not_exists()
                    .col(ColumnDef::new(Dishes::DishId).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Dishes::DishName).text().not_null())
                    .col(ColumnDef::new(Dishes::Description).text())
                    .col(ColumnDef::new(Dishes::MealTime).text())
                    .col(ColumnDef::new(Dishes::GeneralCategory).text())
                    .col(ColumnDef::new(Dishes::SpecificCategory).text())
                    .col(ColumnDef::new(Dishes::Cuisine).text())
                    .col(ColumnDef::new(Dishes::Complexity).text())
                    .col(ColumnDef::new(Dishes::ServingTemperature).text())
                    .col(ColumnDef::new(Dishes::Season).text())
                    .col(ColumnDef::new(Dishes::Source).text().not_null())
                    .col(ColumnDef::new(Dishes::StarRating).double())
                    .col(
                        ColumnDef::new(Dishes::NumRatings)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Dishes::NumReviews)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Dishes::DatePublished).date())
                    .col(ColumnDef::new(Dishes::DateUpdated).date())
                    .col(
                        ColumnDef::new(Dishes::DateCreated)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Dishes::DateModified)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recipe_dishes_dish_id")
                            .from((Recipe, Dishes::Table), Dishes::DishId)
                            .to((Recipe, RecipeUrls::Table), RecipeUrls::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 2. Create dish_ingredients table (depends on dishes)
        manager
            .create_table(
                Table::create()
                    .table((Recipe, DishIngredients::Table))
                    .if_not_exists()
                    .col(ColumnDef::new(DishIngredients::DishId).uuid().not_null())
                    .col(
                        ColumnDef::new(DishIngredients::IngredientId)
                            .integer()
                            .not_null()
                            .auto_increment(),
                    )
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
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(DishIngredients::DishId)
                            .col(DishIngredients::IngredientId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recipe_dish_ingredients_dish_id")
                            .from((Recipe, DishIngredients::Table), DishIngredients::DishId)
                            .to((Recipe, Dishes::Table), Dishes::DishId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 3. Create dish_attributes table (depends on dishes)
        manager
            .create_table(
                Table::create()
                    .table((Recipe, DishAttributes::Table))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DishAttributes::DishId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
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
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recipe_dish_attributes_dish_id")
                            .from((Recipe, DishAttributes::Table), DishAttributes::DishId)
                            .to((Recipe, Dishes::Table), Dishes::DishId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order of creation/dependency
        manager
            .drop_table(Table::drop().table((Recipe, DishAttributes::Table)).to_owned())
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table((Recipe, DishIngredients::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table((Recipe, Dishes::Table)).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
struct Recipe;

#[derive(DeriveIden)]
enum RecipeUrls {
    Table,
    Id,
}

#[derive(DeriveIden)]
pub(crate) enum Dishes {
    Table,
    DishId,
    DishName,
    Description,
    MealTime,
    GeneralCategory,
    SpecificCategory,
    Cuisine,
    Complexity,
    ServingTemperature,
    Season,
    Source,
    StarRating,
    NumRatings,
    NumReviews,
    DatePublished,
    DateUpdated,
    DateCreated,
    DateModified,
}

#[derive(DeriveIden)]
pub(crate) enum DishIngredients {
    Table,
    DishId,
    IngredientId,
    Ingredient,
    FlavorIngredient,
    Quantity,
    Units,
    Format,
    Type,
    IngredientRole,
    FlavorRole,
    PrepMethod,
    AlternativeIngredients,
    DateAdded,
}

#[derive(DeriveIden)]
pub(crate) enum DishAttributes {
    Table,
    DishId,
    FlavorAttributes,
    TextureAttributes,
    AromaAttributes,
    CookingTechniques,
    DietPreferences,
    FunctionalHealth,
    Occasions,
    ConvenienceAttributes,
    SocialSetting,
    EmotionalAttributes,
}
