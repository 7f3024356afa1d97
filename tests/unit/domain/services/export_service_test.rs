// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use dishstore::domain::models::dish::{
    Dish, DishAttributes, DishIngredient, DishRecord, DishSource,
};
use dishstore::domain::repositories::dish_repository::DishRepository;
use dishstore::domain::repositories::RepositoryError;
use dishstore::domain::services::export_service::{
    ExportService, ExportedDish, ExportedIngredient,
};
use mockall::mock;
use std::sync::Arc;
use uuid::Uuid;

mock! {
    pub DishRepo {}
    #[async_trait]
    impl DishRepository for DishRepo {
        async fn save(&self, record: &DishRecord) -> Result<(), RepositoryError>;
        async fn find(&self, dish_id: Uuid) -> Result<Option<DishRecord>, RepositoryError>;
        async fn delete(&self, dish_id: Uuid) -> Result<bool, RepositoryError>;
        async fn record_rating(&self, dish_id: Uuid, stars: f64) -> Result<Dish, RepositoryError>;
        async fn record_review(&self, dish_id: Uuid) -> Result<(), RepositoryError>;
        async fn count(&self) -> Result<u64, RepositoryError>;
        async fn fetch_dishes(&self, limit: u64, offset: u64) -> Result<Vec<Dish>, RepositoryError>;
        async fn fetch_ingredients(
            &self,
            limit: u64,
            offset: u64,
        ) -> Result<Vec<DishIngredient>, RepositoryError>;
        async fn fetch_attributes(
            &self,
            limit: u64,
            offset: u64,
        ) -> Result<Vec<DishAttributes>, RepositoryError>;
    }
}

/// 配料导出按下游列名重映射
#[test]
fn test_ingredient_remapping() {
    let mut ingredient = DishIngredient::new(Uuid::new_v4());
    ingredient.ingredient_id = 2;
    ingredient.ingredient = Some("2 tbsp soy sauce".to_string());
    ingredient.flavor_ingredient = Some("soy sauce".to_string());
    ingredient.prep_method = Some("whisked".to_string());
    ingredient.alternative_ingredients = Some(vec!["tamari".to_string()]);

    let exported = ExportedIngredient::from(&ingredient);

    assert_eq!(exported.name.as_deref(), Some("soy sauce"));
    assert_eq!(exported.full_ingredient.as_deref(), Some("2 tbsp soy sauce"));
    assert_eq!(exported.cooking_technique.as_deref(), Some("whisked"));
    assert_eq!(exported.alternatives, Some(vec!["tamari".to_string()]));
    assert!(exported.flavor_notes.is_none());
}

/// 菜品导出补上本库没有的占位列
#[test]
fn test_dish_remapping_adds_placeholder_columns() {
    let dish = Dish::new(Uuid::new_v4(), "Hotpot".to_string(), DishSource::Menu);
    let exported = ExportedDish::from(&dish);

    assert_eq!(exported.source, "menu");
    assert!(exported.dish_base_type.is_none());
    assert!(exported.food_format.is_none());
    assert!(exported.country.is_none());
    assert_eq!(exported.num_ratings, 0);
}

/// 导出产生三个NDJSON文件，行数与仓库内容一致
#[tokio::test]
async fn test_export_writes_ndjson_files() {
    let dish_id = Uuid::new_v4();
    let mut repo = MockDishRepo::new();

    repo.expect_count().returning(|| Ok(2));
    repo.expect_fetch_dishes().returning(move |_, offset| {
        if offset == 0 {
            Ok(vec![
                Dish::new(dish_id, "One".to_string(), DishSource::Recipe),
                Dish::new(Uuid::new_v4(), "Two".to_string(), DishSource::Recipe),
            ])
        } else {
            Ok(vec![])
        }
    });
    repo.expect_fetch_ingredients().returning(move |_, offset| {
        if offset == 0 {
            let mut ingredient = DishIngredient::new(dish_id);
            ingredient.ingredient_id = 1;
            Ok(vec![ingredient])
        } else {
            Ok(vec![])
        }
    });
    repo.expect_fetch_attributes().returning(|_, _| Ok(vec![]));

    let dir = tempfile::tempdir().unwrap();
    let service = ExportService::new(Arc::new(repo), 1000);
    let summary = service.export_to_dir(dir.path()).await.unwrap();

    assert_eq!(summary.dishes, 2);
    assert_eq!(summary.ingredients, 1);
    assert_eq!(summary.attributes, 0);

    let dishes_file = std::fs::read_to_string(dir.path().join("dishes.ndjson")).unwrap();
    assert_eq!(dishes_file.lines().count(), 2);
    let first: serde_json::Value = serde_json::from_str(dishes_file.lines().next().unwrap()).unwrap();
    assert_eq!(first["dish_name"], "One");
    assert!(first["dish_base_type"].is_null());

    let ingredients_file =
        std::fs::read_to_string(dir.path().join("dish_ingredients.ndjson")).unwrap();
    let row: serde_json::Value =
        serde_json::from_str(ingredients_file.lines().next().unwrap()).unwrap();
    // The downstream column is called "type"
    assert!(row.get("type").is_some());
    assert!(row.get("kind").is_none());
}
