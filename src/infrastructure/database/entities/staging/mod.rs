// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// staging模式实体
///
/// 无约束的批量装载表。表本身没有主键，实体上标注的主键
/// 只为满足SeaORM的接口要求，不在数据库层强制。
pub mod dish;
pub mod dish_attributes;
pub mod dish_ingredient;
