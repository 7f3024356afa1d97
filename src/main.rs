// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use clap::{Parser, Subcommand, ValueEnum};
use dishstore::config::settings::Settings;
use dishstore::domain::models::site::Site;
use dishstore::domain::repositories::dish_repository::DishRepository;
use dishstore::domain::repositories::menu_item_repository::MenuItemRepository;
use dishstore::domain::repositories::site_repository::SiteRepository;
use dishstore::domain::repositories::staging_repository::StagingRepository;
use dishstore::domain::services::export_service::ExportService;
use dishstore::domain::services::reconciliation_service::ReconciliationService;
use dishstore::infrastructure::database::connection;
use dishstore::infrastructure::repositories::dish_repo_impl::RecipeDishRepositoryImpl;
use dishstore::infrastructure::repositories::menu_dish_repo_impl::MenuDishRepositoryImpl;
use dishstore::infrastructure::repositories::menu_item_repo_impl::MenuItemRepositoryImpl;
use dishstore::infrastructure::repositories::recipe_url_repo_impl::RecipeUrlRepositoryImpl;
use dishstore::infrastructure::repositories::site_repo_impl::SiteRepositoryImpl;
use dishstore::infrastructure::repositories::staging_repo_impl::StagingRepositoryImpl;
use dishstore::utils::telemetry;
use migration::{Migrator, MigratorTrait};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// 命令行入口
#[derive(Parser)]
#[command(name = "dishstore", about = "Recipe and menu dish data store administration")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run pending database migrations
    Migrate,
    /// Show row counts per schema
    Status,
    /// Register a crawl target site
    AddSite {
        /// Site URL
        url: String,
        /// Manually curated sitemap URL, repeatable
        #[arg(long = "sitemap")]
        sitemaps: Vec<String>,
    },
    /// Reconcile staged rows into the constrained schemas
    Reconcile {
        /// Dish rows per batch
        #[arg(long)]
        batch_size: Option<u64>,
    },
    /// Backfill menu item images from menu_images
    BackfillImages {
        /// Items per batch
        #[arg(long)]
        batch_size: Option<u64>,
    },
    /// Export a schema's dish data as NDJSON files
    Export {
        /// Source schema
        #[arg(value_enum)]
        schema: Schema,
        /// Output directory, defaults to the configured one
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Schema {
    Recipe,
    Menu,
}

/// 主函数
///
/// 应用程序入口点，负责初始化组件并分发子命令
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();

    let cli = Cli::parse();

    // 2. Load configuration
    let settings = Settings::new()?;

    // 3. Connect to database
    let db = Arc::new(connection::create_pool(&settings.database).await?);
    info!("Database connection established");

    match cli.command {
        Commands::Migrate => {
            info!("Running database migrations...");
            Migrator::up(db.as_ref(), None).await?;
            info!("Database migrations applied");
        }
        Commands::Status => {
            let recipe_dishes = RecipeDishRepositoryImpl::new(db.clone());
            let menu_dishes = MenuDishRepositoryImpl::new(db.clone());
            let staging = StagingRepositoryImpl::new(db.clone());

            let staged = staging.counts().await?;
            println!("recipe.dishes: {}", recipe_dishes.count().await?);
            println!("menu.dishes: {}", menu_dishes.count().await?);
            println!(
                "staging: {} dishes, {} ingredients, {} attributes",
                staged.dishes, staged.ingredients, staged.attributes
            );
        }
        Commands::AddSite { url, sitemaps } => {
            let repo = SiteRepositoryImpl::new(db.clone());
            let sitemaps = if sitemaps.is_empty() {
                None
            } else {
                Some(sitemaps)
            };
            let created = repo.create(&Site::new(url, sitemaps)).await?;
            println!(
                "Registered site {} (id {})",
                created.recipe_site_url, created.id
            );
        }
        Commands::Reconcile { batch_size } => {
            let service = ReconciliationService::new(
                Arc::new(StagingRepositoryImpl::new(db.clone())),
                Arc::new(RecipeUrlRepositoryImpl::new(db.clone())),
                Arc::new(MenuItemRepositoryImpl::new(db.clone())),
                Arc::new(RecipeDishRepositoryImpl::new(db.clone())),
                Arc::new(MenuDishRepositoryImpl::new(db.clone())),
            );

            let report = service
                .reconcile(batch_size.unwrap_or(settings.batch.reconcile_batch_size))
                .await?;
            println!(
                "Reconciled {} dishes, discarded {} orphans",
                report.applied, report.orphaned
            );
        }
        Commands::BackfillImages { batch_size } => {
            let repo = MenuItemRepositoryImpl::new(db.clone());
            let updated = repo
                .backfill_images(batch_size.unwrap_or(settings.batch.image_backfill_batch_size))
                .await?;
            println!("Backfilled {} menu items", updated);
        }
        Commands::Export { schema, out_dir } => {
            let dishes: Arc<dyn DishRepository> = match schema {
                Schema::Recipe => Arc::new(RecipeDishRepositoryImpl::new(db.clone())),
                Schema::Menu => Arc::new(MenuDishRepositoryImpl::new(db.clone())),
            };

            let out_dir =
                out_dir.unwrap_or_else(|| PathBuf::from(&settings.export.output_dir));
            let service = ExportService::new(dishes, settings.export.batch_size);
            let summary = service.export_to_dir(&out_dir).await?;
            println!(
                "Exported {} dishes, {} ingredients, {} attributes to {}",
                summary.dishes,
                summary.ingredients,
                summary.attributes,
                out_dir.display()
            );
        }
    }

    Ok(())
}
