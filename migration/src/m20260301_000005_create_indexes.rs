// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 二级索引迁移
///
/// 为状态轮询、抽样和图片回填的查询路径补充索引
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
        // Indexes for recipe.recipe_sites
        manager
            .create_index(
                Index::create()
                    .name("idx_recipe_sites_status")
                    .table((Recipe, RecipeSites::Table))
                    .col(RecipeSites::Status)
                    .to_owned(),
            )
            .await?;

        // Indexes for recipe.recipe_urls
        manager
            .create_index(
                Index::create()
                    .name("idx_recipe_urls_site_id")
                    .table((Recipe, RecipeUrls::Table))
                    .col(RecipeUrls::SiteId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_recipe_urls_status")
                    .table((Recipe, RecipeUrls::Table))
                    .col(RecipeUrls::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_recipe_urls_randnum")
                    .table((Recipe, RecipeUrls::Table))
                    .col(RecipeUrls::Randnum)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_recipe_urls_llm_status_is_recipe")
                    .table((Recipe, RecipeUrls::Table))
                    .col(RecipeUrls::LlmStatus)
                    .col(RecipeUrls::IsRecipe)
                    .to_owned(),
            )
            .await?;

        // Indexes for menu.menu_items
        manager
            .create_index(
                Index::create()
                    .name("idx_menu_items_llm_status")
                    .table((Menu, MenuItems::Table))
                    .col(MenuItems::LlmStatus)
                    .to_owned(),
            )
            .await?;

        // Index for menu.menu_images (backfill join column)
        manager
            .create_index(
                Index::create()
                    .name("idx_menu_images_old_image_id")
                    .table((Menu, MenuImages::Table))
                    .col(MenuImages::OldImageId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_menu_images_old_image_id")
                    .table((Menu, MenuImages::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_menu_items_llm_status")
                    .table((Menu, MenuItems::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_recipe_urls_llm_status_is_recipe")
                    .table((Recipe, RecipeUrls::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_recipe_urls_randnum")
                    .table((Recipe, RecipeUrls::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_recipe_urls_status")
                    .table((Recipe, RecipeUrls::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_recipe_urls_site_id")
                    .table((Recipe, RecipeUrls::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_recipe_sites_status")
                    .table((Recipe, RecipeSites::Table))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
struct Recipe;

#[derive(DeriveIden)]
struct Menu;

#[derive(DeriveIden)]
enum RecipeSites {
    Table,
    Status,
}

#[derive(DeriveIden)]
enum RecipeUrls {
    Table,
    SiteId,
    Status,
    Randnum,
    LlmStatus,
    IsRecipe,
}

#[derive(DeriveIden)]
enum MenuItems {
    Table,
    LlmStatus,
}

#[derive(DeriveIden)]
enum MenuImages {
    Table,
    OldImageId,
}
