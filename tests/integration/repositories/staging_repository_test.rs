// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_db;
use dishstore::domain::models::dish::{Dish, DishAttributes, DishIngredient, DishSource};
use dishstore::domain::repositories::staging_repository::StagingRepository;
use dishstore::infrastructure::repositories::staging_repo_impl::StagingRepositoryImpl;
use uuid::Uuid;

/// 测试无约束装载：孤儿行照收，计数与读取一致
#[tokio::test]
async fn test_load_and_fetch_without_validation() {
    let app = create_test_db().await;
    let repo = StagingRepositoryImpl::new(app.db.clone());

    // None of these dish ids have parent rows anywhere
    let ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
    let dishes: Vec<Dish> = ids
        .iter()
        .map(|id| Dish::new(*id, format!("Staged {}", id), DishSource::Recipe))
        .collect();
    assert_eq!(repo.load_dishes(&dishes).await.unwrap(), 3);

    let mut ingredient = DishIngredient::new(ids[0]);
    ingredient.ingredient_id = 1;
    ingredient.ingredient = Some("3 eggs".to_string());
    assert_eq!(repo.load_ingredients(&[ingredient]).await.unwrap(), 1);

    let attrs = DishAttributes {
        dish_id: ids[0],
        occasions: Some(vec!["brunch".to_string()]),
        ..Default::default()
    };
    assert_eq!(repo.load_attributes(&[attrs]).await.unwrap(), 1);

    let counts = repo.counts().await.unwrap();
    assert_eq!(counts.dishes, 3);
    assert_eq!(counts.ingredients, 1);
    assert_eq!(counts.attributes, 1);

    let batch = repo.fetch_dish_batch(10).await.unwrap();
    assert_eq!(batch.len(), 3);

    let loaded_ingredients = repo.ingredients_for(ids[0]).await.unwrap();
    assert_eq!(loaded_ingredients.len(), 1);
    assert_eq!(
        loaded_ingredients[0].ingredient.as_deref(),
        Some("3 eggs")
    );

    let loaded_attrs = repo.attributes_for(ids[0]).await.unwrap().unwrap();
    assert_eq!(loaded_attrs.occasions, Some(vec!["brunch".to_string()]));
    assert!(repo.attributes_for(ids[1]).await.unwrap().is_none());

    // Removing one dish clears all three tables for that id
    let removed = repo.remove(&[ids[0]]).await.unwrap();
    assert_eq!(removed, 3);
    let counts = repo.counts().await.unwrap();
    assert_eq!(counts.dishes, 2);
    assert_eq!(counts.ingredients, 0);
    assert_eq!(counts.attributes, 0);
}
