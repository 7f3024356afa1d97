// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DbBackend;

/// 数据库初始模式迁移
///
/// 创建recipe模式以及站点表和URL表
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
                .execute_unprepared("CREATE SCHEMA IF NOT EXISTS recipe")
                .await?;
        }

        // 1. Create recipe_sites table (no dependencies)
        manager
            .create_table(
                Table::create()
                    .table((Recipe, RecipeSites::Table))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RecipeSites::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RecipeSites::RecipeSiteUrl)
                            .text()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(RecipeSites::ManualSitemaps).array(ColumnType::Text))
                    .col(
                        ColumnDef::new(RecipeSites::Status)
                            .text()
                            .not_null()
                            .default("url_extraction_pending"),
                    )
                    .col(ColumnDef::new(RecipeSites::LastProcessed).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // 2. Create recipe_urls table (depends on recipe_sites)
        manager
            .create_table(
                Table::create()
                    .table((Recipe, RecipeUrls::Table))
                    .if_not_exists()
                    .col({
                        let mut col = ColumnDef::new(RecipeUrls::Id);
                        col.uuid().not_null().primary_key();
                        if manager.get_database_backend() == DbBackend::Postgres {
                            col.default(Expr::cust("gen_random_uuid()"));
                        }
                        col
                    })
                    .col(ColumnDef::new(RecipeUrls::Url).text().not_null().unique_key())
                    .col(ColumnDef::new(RecipeUrls::OriginalUrl).text())
                    .col(ColumnDef::new(RecipeUrls::SiteId).integer())
                    .col(ColumnDef::new(RecipeUrls::SitemapUrl).text())
                    .col(ColumnDef::new(RecipeUrls::LastModified).timestamp_with_time_zone())
                    .col(ColumnDef::new(RecipeUrls::LastExtracted).timestamp_with_time_zone())
                    .col(ColumnDef::new(RecipeUrls::LastCrawled).timestamp_with_time_zone())
                    .col(ColumnDef::new(RecipeUrls::LastAttempt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(RecipeUrls::Status)
                            .text()
                            .not_null()
                            .default("crawl_pending"),
                    )
                    .col(ColumnDef::new(RecipeUrls::FailureReason).text())
                    .col(
                        ColumnDef::new(RecipeUrls::LlmStatus)
                            .text()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(RecipeUrls::LlmFailureReason).text())
                    .col(ColumnDef::new(RecipeUrls::ParsedText).text())
                    .col(ColumnDef::new(RecipeUrls::ParsedMd).text())
                    .col(ColumnDef::new(RecipeUrls::Title).text())
                    .col(ColumnDef::new(RecipeUrls::Description).text())
                    .col(ColumnDef::new(RecipeUrls::ProxyUsed).text())
                    .col(ColumnDef::new(RecipeUrls::IsRecipe).boolean())
                    .col(ColumnDef::new(RecipeUrls::Randnum).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recipe_urls_site_id")
                            .from((Recipe, RecipeUrls::Table), RecipeUrls::SiteId)
                            .to((Recipe, RecipeSites::Table), RecipeSites::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order of creation/dependency
        manager
            .drop_table(Table::drop().table((Recipe, RecipeUrls::Table)).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table((Recipe, RecipeSites::Table)).to_owned())
            .await?;

        if manager.get_database_backend() == DbBackend::Postgres {
            manager
                .get_connection()
                .execute_unprepared("DROP SCHEMA IF EXISTS recipe")
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
struct Recipe;

#[derive(DeriveIden)]
enum RecipeSites {
    Table,
    Id,
    RecipeSiteUrl,
    ManualSitemaps,
    Status,
    LastProcessed,
}

#[derive(DeriveIden)]
enum RecipeUrls {
    Table,
    Id,
    Url,
    OriginalUrl,
    SiteId,
    SitemapUrl,
    LastModified,
    LastExtracted,
    LastCrawled,
    LastAttempt,
    Status,
    FailureReason,
    LlmStatus,
    LlmFailureReason,
    ParsedText,
    ParsedMd,
    Title,
    Description,
    ProxyUsed,
    IsRecipe,
    Randnum,
}
