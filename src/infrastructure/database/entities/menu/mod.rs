// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// menu模式实体
///
/// 对应menu模式下的菜单条目、菜单图片与菜品三表。
/// 菜品三表与recipe模式同构，分开声明以保留各自的schema限定。
pub mod dish;
pub mod dish_attributes;
pub mod dish_ingredient;
pub mod menu_image;
pub mod menu_item;
