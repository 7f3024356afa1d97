// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_recipe_schema;
mod m20260118_000002_create_dish_tables;
mod m20260205_000003_create_menu_schema;
mod m20260219_000004_create_staging_tables;
mod m20260301_000005_create_indexes;

/// 数据库迁移器
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// 获取所有迁移
    ///
    /// # 返回值
    ///
    /// 返回迁移列表
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_recipe_schema::Migration),
            Box::new(m20260118_000002_create_dish_tables::Migration),
            Box::new(m20260205_000003_create_menu_schema::Migration),
            Box::new(m20260219_000004_create_staging_tables::Migration),
            Box::new(m20260301_000005_create_indexes::Migration),
        ]
    }
}
