// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_db;
use dishstore::domain::models::dish::{
    Dish, DishAttributes, DishIngredient, DishRecord, DishSource,
};
use dishstore::domain::repositories::dish_repository::DishRepository;
use dishstore::domain::repositories::recipe_url_repository::{DiscoveredUrl, RecipeUrlRepository};
use dishstore::domain::repositories::RepositoryError;
use dishstore::infrastructure::repositories::dish_repo_impl::RecipeDishRepositoryImpl;
use dishstore::infrastructure::repositories::recipe_url_repo_impl::RecipeUrlRepositoryImpl;
use uuid::Uuid;

/// 造一条父页面并返回其dish_id
async fn seed_parent(app: &super::super::helpers::TestDb, url: &str) -> Uuid {
    let pages = RecipeUrlRepositoryImpl::new(app.db.clone());
    pages
        .insert_discovered(&[DiscoveredUrl {
            url: url.to_string(),
            original_url: url.to_string(),
            site_id: None,
            sitemap_url: None,
        }])
        .await
        .unwrap();
    pages.find_by_url(url).await.unwrap().unwrap().id
}

fn sample_record(dish_id: Uuid) -> DishRecord {
    let mut dish = Dish::new(dish_id, "Braised Pork".to_string(), DishSource::Recipe);
    dish.cuisine = Some("chinese".to_string());
    dish.meal_time = Some("dinner".to_string());

    let mut pork = DishIngredient::new(dish_id);
    pork.ingredient = Some("1 lb pork belly".to_string());
    pork.flavor_ingredient = Some("pork belly".to_string());
    pork.quantity = Some(1.0);
    pork.units = Some("lb".to_string());
    pork.prep_method = Some("cubed".to_string());

    let mut soy = DishIngredient::new(dish_id);
    soy.ingredient = Some("2 tbsp soy sauce".to_string());
    soy.flavor_ingredient = Some("soy sauce".to_string());
    soy.alternative_ingredients = Some(vec!["tamari".to_string()]);

    let attributes = DishAttributes {
        dish_id,
        flavor_attributes: Some(vec!["savory".to_string(), "sweet".to_string()]),
        cooking_techniques: Some(vec!["braising".to_string()]),
        ..Default::default()
    };

    DishRecord {
        dish,
        ingredients: vec![pork, soy],
        attributes: Some(attributes),
    }
}

/// 测试聚合保存与读取往返，配料从1开始重新编号
#[tokio::test]
async fn test_save_and_find_round_trip() {
    let app = create_test_db().await;
    let repo = RecipeDishRepositoryImpl::new(app.db.clone());

    let dish_id = seed_parent(&app, "https://example.com/recipes/pork").await;
    repo.save(&sample_record(dish_id)).await.unwrap();

    let found = repo.find(dish_id).await.unwrap().unwrap();
    assert_eq!(found.dish.dish_name, "Braised Pork");
    assert_eq!(found.dish.source, DishSource::Recipe);
    assert_eq!(found.ingredients.len(), 2);
    assert_eq!(found.ingredients[0].ingredient_id, 1);
    assert_eq!(found.ingredients[1].ingredient_id, 2);
    assert_eq!(
        found.ingredients[1].alternative_ingredients,
        Some(vec!["tamari".to_string()])
    );

    let attrs = found.attributes.unwrap();
    assert_eq!(
        attrs.flavor_attributes,
        Some(vec!["savory".to_string(), "sweet".to_string()])
    );
    assert_eq!(repo.count().await.unwrap(), 1);
}

/// 测试重复保存：主体更新、配料整体替换、属性覆盖
#[tokio::test]
async fn test_save_is_an_upsert() {
    let app = create_test_db().await;
    let repo = RecipeDishRepositoryImpl::new(app.db.clone());

    let dish_id = seed_parent(&app, "https://example.com/recipes/rework").await;
    repo.save(&sample_record(dish_id)).await.unwrap();

    let mut updated = sample_record(dish_id);
    updated.dish.dish_name = "Braised Pork Belly".to_string();
    updated.ingredients.truncate(1);
    updated.attributes = Some(DishAttributes {
        dish_id,
        flavor_attributes: Some(vec!["umami".to_string()]),
        ..Default::default()
    });
    repo.save(&updated).await.unwrap();

    let found = repo.find(dish_id).await.unwrap().unwrap();
    assert_eq!(found.dish.dish_name, "Braised Pork Belly");
    assert_eq!(found.ingredients.len(), 1);
    assert_eq!(
        found.attributes.unwrap().flavor_attributes,
        Some(vec!["umami".to_string()])
    );
    // Still a single dish row
    assert_eq!(repo.count().await.unwrap(), 1);
}

/// 测试评分与评论的增量聚合
#[tokio::test]
async fn test_rating_and_review_counters() {
    let app = create_test_db().await;
    let repo = RecipeDishRepositoryImpl::new(app.db.clone());

    let dish_id = seed_parent(&app, "https://example.com/recipes/rated").await;
    repo.save(&sample_record(dish_id)).await.unwrap();

    let after_first = repo.record_rating(dish_id, 4.0).await.unwrap();
    assert_eq!(after_first.num_ratings, 1);
    assert_eq!(after_first.star_rating, Some(4.0));

    let after_second = repo.record_rating(dish_id, 5.0).await.unwrap();
    assert_eq!(after_second.num_ratings, 2);
    assert_eq!(after_second.star_rating, Some(4.5));

    repo.record_review(dish_id).await.unwrap();
    let found = repo.find(dish_id).await.unwrap().unwrap();
    assert_eq!(found.dish.num_reviews, 1);

    let missing = repo.record_rating(Uuid::new_v4(), 3.0).await;
    assert!(matches!(missing, Err(RepositoryError::NotFound)));
}

/// 测试仓库删除：主体删除后子行随级联消失
#[tokio::test]
async fn test_delete_removes_aggregate() {
    let app = create_test_db().await;
    let repo = RecipeDishRepositoryImpl::new(app.db.clone());

    let dish_id = seed_parent(&app, "https://example.com/recipes/doomed").await;
    repo.save(&sample_record(dish_id)).await.unwrap();

    assert!(repo.delete(dish_id).await.unwrap());
    assert!(repo.find(dish_id).await.unwrap().is_none());
    assert_eq!(repo.fetch_ingredients(10, 0).await.unwrap().len(), 0);
    assert_eq!(repo.fetch_attributes(10, 0).await.unwrap().len(), 0);

    // Second delete is a no-op
    assert!(!repo.delete(dish_id).await.unwrap());
}
