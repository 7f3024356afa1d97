// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DbBackend;

use crate::m20260118_000002_create_dish_tables::{DishAttributes, DishIngredients, Dishes};

/// 菜单模式迁移
///
/// 创建menu模式：menu_items、menu_images以及menu模式下的
/// 菜品三表。菜品三表与recipe模式同构，父表换为menu_items。
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
                .execute_unprepared("CREATE SCHEMA IF NOT EXISTS menu")
                .await?;
        }

        // 1. Create menu_items table (no dependencies)
        manager
            .create_table(
                Table::create()
                    .table((Menu, MenuItems::Table))
                    .if_not_exists()
                    .col({
                        let mut col = ColumnDef::new(MenuItems::ItemId);
                        col.uuid().not_null().primary_key();
                        if manager.get_database_backend() == DbBackend::Postgres {
                            col.default(Expr::cust("gen_random_uuid()"));
                        }
                        col
                    })
                    .col(ColumnDef::new(MenuItems::Name).text().not_null())
                    .col(ColumnDef::new(MenuItems::Description).text())
                    .col(ColumnDef::new(MenuItems::Category).text())
                    .col(ColumnDef::new(MenuItems::ImageId).uuid())
                    .col(ColumnDef::new(MenuItems::OldImageId).text())
                    .col(ColumnDef::new(MenuItems::DateUploaded).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(MenuItems::LlmStatus)
                            .text()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(MenuItems::LlmErrorReason).text())
                    .to_owned(),
            )
            .await?;

        // 2. Create menu_images table (no dependencies)
        manager
            .create_table(
                Table::create()
                    .table((Menu, MenuImages::Table))
                    .if_not_exists()
                    .col({
                        let mut col = ColumnDef::new(MenuImages::ImageId);
                        col.uuid().not_null().primary_key();
                        if manager.get_database_backend() == DbBackend::Postgres {
                            col.default(Expr::cust("gen_random_uuid()"));
                        }
                        col
                    })
                    .col(ColumnDef::new(MenuImages::OldImageId).text())
                    .col(ColumnDef::new(MenuImages::DateUploaded).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // 3. Create dishes table (depends on menu_items)
        manager
            .create_table(
                Table::create()
                    .table((Menu, Dishes::Table))
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
                            .name("fk_menu_dishes_dish_id")
                            .from((Menu, Dishes::Table), Dishes::DishId)
                            .to((Menu, MenuItems::Table), MenuItems::ItemId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 4. Create dish_ingredients table (depends on dishes)
        manager
            .create_table(
                Table::create()
                    .table((Menu, DishIngredients::Table))
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
                            .name("fk_menu_dish_ingredients_dish_id")
                            .from((Menu, DishIngredients::Table), DishIngredients::DishId)
                            .to((Menu, Dishes::Table), Dishes::DishId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 5. Create dish_attributes table (depends on dishes)
        manager
            .create_table(
                Table::create()
                    .table((Menu, DishAttributes::Table))
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
                            .name("fk_menu_dish_attributes_dish_id")
                            .from((Menu, DishAttributes::Table), DishAttributes::DishId)
                            .to((Menu, Dishes::Table), Dishes::DishId)
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
            .drop_table(Table::drop().table((Menu, DishAttributes::Table)).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table((Menu, DishIngredients::Table)).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table((Menu, Dishes::Table)).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table((Menu, MenuImages::Table)).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table((Menu, MenuItems::Table)).to_owned())
            .await?;

        if manager.get_database_backend() == DbBackend::Postgres {
            manager
                .get_connection()
                .execute_unprepared("DROP SCHEMA IF EXISTS menu")
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
struct Menu;

#[derive(DeriveIden)]
enum MenuItems {
    Table,
    ItemId,
    Name,
    Description,
    Category,
    ImageId,
    OldImageId,
    DateUploaded,
    LlmStatus,
    LlmErrorReason,
}

#[derive(DeriveIden)]
enum MenuImages {
    Table,
    ImageId,
    OldImageId,
    DateUploaded,
}
