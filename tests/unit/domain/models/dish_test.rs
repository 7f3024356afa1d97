// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dishstore::domain::models::dish::{Dish, DishSource};
use uuid::Uuid;

#[test]
fn test_new_dish_starts_with_zero_counters() {
    // Given: 新创建的菜品
    let dish = Dish::new(Uuid::new_v4(), "Congee".to_string(), DishSource::Recipe);

    assert_eq!(dish.num_ratings, 0);
    assert_eq!(dish.num_reviews, 0);
    assert!(dish.star_rating.is_none());
}

#[test]
fn test_incremental_rating_average() {
    // Given: 没有评分的菜品
    let mut dish = Dish::new(Uuid::new_v4(), "Congee".to_string(), DishSource::Recipe);

    // When: 依次记录三次评分
    dish.apply_rating(4.0);
    assert_eq!(dish.star_rating, Some(4.0));
    assert_eq!(dish.num_ratings, 1);

    dish.apply_rating(5.0);
    assert_eq!(dish.star_rating, Some(4.5));
    assert_eq!(dish.num_ratings, 2);

    dish.apply_rating(3.0);
    // Then: 平均值为(4+5+3)/3
    assert_eq!(dish.star_rating, Some(4.0));
    assert_eq!(dish.num_ratings, 3);
}

#[test]
fn test_review_counter() {
    let mut dish = Dish::new(Uuid::new_v4(), "Congee".to_string(), DishSource::Menu);

    dish.apply_review();
    dish.apply_review();
    assert_eq!(dish.num_reviews, 2);
}

#[test]
fn test_dish_source_round_trip() {
    assert_eq!(DishSource::Recipe.to_string(), "recipe");
    assert_eq!(DishSource::Menu.to_string(), "menu");
    assert_eq!("recipe".parse::<DishSource>(), Ok(DishSource::Recipe));
    assert_eq!("menu".parse::<DishSource>(), Ok(DishSource::Menu));
    assert!("buffet".parse::<DishSource>().is_err());
}
