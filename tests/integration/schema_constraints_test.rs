// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_db;
use chrono::Utc;
use dishstore::infrastructure::database::entities::menu;
use dishstore::infrastructure::database::entities::recipe;
use dishstore::infrastructure::database::entities::staging;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

/// 插入一条最小的recipe_urls行并返回其ID
async fn seed_page(db: &sea_orm::DatabaseConnection, url: &str) -> Uuid {
    let id = Uuid::new_v4();
    let page = recipe::recipe_url::ActiveModel {
        id: Set(id),
        url: Set(url.to_string()),
        ..Default::default()
    };
    page.insert(db).await.unwrap();
    id
}

/// 测试没有父行的菜品插入失败
///
/// 对应文档：dishes.dish_id外键约束
#[tokio::test]
async fn test_dish_without_parent_is_rejected() {
    let app = create_test_db().await;

    let orphan = recipe::dish::ActiveModel {
        dish_id: Set(Uuid::new_v4()),
        dish_name: Set("Ghost Dish".to_string()),
        source: Set("recipe".to_string()),
        ..Default::default()
    };
    let result = orphan.insert(app.db.as_ref()).await;
    assert!(result.is_err());

    // With a live parent the same insert succeeds
    let page_id = seed_page(app.db.as_ref(), "https://example.com/recipes/ok").await;
    let dish = recipe::dish::ActiveModel {
        dish_id: Set(page_id),
        dish_name: Set("Real Dish".to_string()),
        source: Set("recipe".to_string()),
        ..Default::default()
    };
    assert!(dish.insert(app.db.as_ref()).await.is_ok());
}

/// 测试父行删除沿 dishes → dish_ingredients/dish_attributes 级联
#[tokio::test]
async fn test_parent_delete_cascades_through_dish_tables() {
    let app = create_test_db().await;
    let db = app.db.as_ref();

    let page_id = seed_page(db, "https://example.com/recipes/cascade").await;

    recipe::dish::ActiveModel {
        dish_id: Set(page_id),
        dish_name: Set("Cascade Dish".to_string()),
        source: Set("recipe".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    recipe::dish_ingredient::ActiveModel {
        dish_id: Set(page_id),
        ingredient_id: Set(1),
        ingredient: Set(Some("2 cups flour".to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    recipe::dish_attributes::ActiveModel {
        dish_id: Set(page_id),
        flavor_attributes: Set(Some(vec!["savory".to_string()])),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    // Deleting the recipe_urls row must take the whole dish subtree with it
    recipe::recipe_url::Entity::delete_by_id(page_id)
        .exec(db)
        .await
        .unwrap();

    assert!(recipe::dish::Entity::find_by_id(page_id)
        .one(db)
        .await
        .unwrap()
        .is_none());
    assert!(recipe::dish_ingredient::Entity::find()
        .filter(recipe::dish_ingredient::Column::DishId.eq(page_id))
        .one(db)
        .await
        .unwrap()
        .is_none());
    assert!(recipe::dish_attributes::Entity::find_by_id(page_id)
        .one(db)
        .await
        .unwrap()
        .is_none());
}

/// 测试menu模式下条目删除级联到菜品
#[tokio::test]
async fn test_menu_item_delete_cascades() {
    let app = create_test_db().await;
    let db = app.db.as_ref();

    let item_id = Uuid::new_v4();
    menu::menu_item::ActiveModel {
        item_id: Set(item_id),
        name: Set("Pad Thai".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    menu::dish::ActiveModel {
        dish_id: Set(item_id),
        dish_name: Set("Pad Thai".to_string()),
        source: Set("menu".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    menu::menu_item::Entity::delete_by_id(item_id)
        .exec(db)
        .await
        .unwrap();

    assert!(menu::dish::Entity::find_by_id(item_id)
        .one(db)
        .await
        .unwrap()
        .is_none());
}

/// 测试URL唯一性约束
#[tokio::test]
async fn test_duplicate_urls_are_rejected() {
    let app = create_test_db().await;
    let db = app.db.as_ref();

    seed_page(db, "https://example.com/recipes/unique").await;

    let duplicate = recipe::recipe_url::ActiveModel {
        id: Set(Uuid::new_v4()),
        url: Set("https://example.com/recipes/unique".to_string()),
        ..Default::default()
    };
    assert!(duplicate.insert(db).await.is_err());

    // Same for recipe_sites.recipe_site_url
    recipe::site::ActiveModel {
        recipe_site_url: Set("https://example.com".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let duplicate_site = recipe::site::ActiveModel {
        recipe_site_url: Set("https://example.com".to_string()),
        ..Default::default()
    };
    assert!(duplicate_site.insert(db).await.is_err());
}

/// 测试配料复合主键：同菜品多行可行，重复(dish_id, ingredient_id)被拒绝
#[tokio::test]
async fn test_ingredient_composite_key() {
    let app = create_test_db().await;
    let db = app.db.as_ref();

    let page_id = seed_page(db, "https://example.com/recipes/soup").await;
    recipe::dish::ActiveModel {
        dish_id: Set(page_id),
        dish_name: Set("Soup".to_string()),
        source: Set("recipe".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    for ingredient_id in 1..=3 {
        recipe::dish_ingredient::ActiveModel {
            dish_id: Set(page_id),
            ingredient_id: Set(ingredient_id),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
    }

    let duplicate = recipe::dish_ingredient::ActiveModel {
        dish_id: Set(page_id),
        ingredient_id: Set(2),
        ..Default::default()
    };
    assert!(duplicate.insert(db).await.is_err());
}

/// 测试默认值：状态文本、计数器与时间戳
#[tokio::test]
async fn test_column_defaults() {
    let app = create_test_db().await;
    let db = app.db.as_ref();

    let site = recipe::site::ActiveModel {
        recipe_site_url: Set("https://defaults.example.com".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
    assert_eq!(site.status, "url_extraction_pending");

    let page = recipe::recipe_url::ActiveModel {
        id: Set(Uuid::new_v4()),
        url: Set("https://defaults.example.com/recipes/1".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
    assert_eq!(page.status, "crawl_pending");
    assert_eq!(page.llm_status, "pending");

    let dish = recipe::dish::ActiveModel {
        dish_id: Set(page.id),
        dish_name: Set("Default Dish".to_string()),
        source: Set("recipe".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
    assert_eq!(dish.num_ratings, 0);
    assert_eq!(dish.num_reviews, 0);
    assert!(dish.star_rating.is_none());
    assert!(Utc::now().signed_duration_since(dish.date_created) < chrono::Duration::minutes(5));
    assert!(Utc::now().signed_duration_since(dish.date_modified) < chrono::Duration::minutes(5));

    let item = menu::menu_item::ActiveModel {
        item_id: Set(Uuid::new_v4()),
        name: Set("Default Item".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
    assert_eq!(item.llm_status, "pending");
}

/// 测试数组列往返：空列表、单元素与多元素保持顺序
#[tokio::test]
async fn test_array_columns_round_trip() {
    let app = create_test_db().await;
    let db = app.db.as_ref();

    let page_id = seed_page(db, "https://example.com/recipes/arrays").await;
    recipe::dish::ActiveModel {
        dish_id: Set(page_id),
        dish_name: Set("Array Dish".to_string()),
        source: Set("recipe".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let tags = vec![
        "smoky".to_string(),
        "sweet".to_string(),
        "umami".to_string(),
    ];
    recipe::dish_attributes::ActiveModel {
        dish_id: Set(page_id),
        flavor_attributes: Set(Some(tags.clone())),
        texture_attributes: Set(Some(vec![])),
        cooking_techniques: Set(Some(vec!["braising".to_string()])),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let attrs = recipe::dish_attributes::Entity::find_by_id(page_id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(attrs.flavor_attributes, Some(tags));
    assert_eq!(attrs.texture_attributes, Some(vec![]));
    assert_eq!(attrs.cooking_techniques, Some(vec!["braising".to_string()]));
    assert_eq!(attrs.aroma_attributes, None);

    recipe::dish_ingredient::ActiveModel {
        dish_id: Set(page_id),
        ingredient_id: Set(1),
        alternative_ingredients: Set(Some(vec![
            "shallot".to_string(),
            "leek".to_string(),
        ])),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let ingredient = recipe::dish_ingredient::Entity::find()
        .filter(recipe::dish_ingredient::Column::DishId.eq(page_id))
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        ingredient.alternative_ingredients,
        Some(vec!["shallot".to_string(), "leek".to_string()])
    );
}

/// 测试暂存表接受引用无效的行
#[tokio::test]
async fn test_staging_accepts_orphan_rows() {
    let app = create_test_db().await;
    let db = app.db.as_ref();

    // No parent anywhere, and the same dish_id twice
    let orphan_id = Uuid::new_v4();
    for _ in 0..2 {
        staging::dish::ActiveModel {
            dish_id: Set(orphan_id),
            dish_name: Set(Some("Orphan".to_string())),
            source: Set(Some("recipe".to_string())),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
    }

    staging::dish_ingredient::ActiveModel {
        dish_id: Set(orphan_id),
        ingredient_id: Set(1),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let staged = staging::dish::Entity::find()
        .filter(staging::dish::Column::DishId.eq(orphan_id))
        .all(db)
        .await
        .unwrap();
    assert_eq!(staged.len(), 2);
}
