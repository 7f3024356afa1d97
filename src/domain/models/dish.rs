// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 菜品实体
///
/// 表示从食谱页面或菜单条目提炼出的一道菜。菜品的标识符
/// 继承自其父行（recipe_urls.id或menu_items.item_id），
/// 因此菜品不能脱离父行存在，父行删除时菜品级联删除。
/// 评分字段是聚合值，随评分与评论到达而增量更新。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    /// 菜品唯一标识符，与父行标识符一致
    pub dish_id: Uuid,
    /// 菜品名称
    pub dish_name: String,
    /// 菜品描述
    pub description: Option<String>,
    /// 用餐时段（breakfast、lunch、dinner等）
    pub meal_time: Option<String>,
    /// 大类
    pub general_category: Option<String>,
    /// 细分类
    pub specific_category: Option<String>,
    /// 菜系
    pub cuisine: Option<String>,
    /// 制作难度
    pub complexity: Option<String>,
    /// 上菜温度
    pub serving_temperature: Option<String>,
    /// 时令
    pub season: Option<String>,
    /// 菜品来源，recipe或menu
    pub source: DishSource,
    /// 平均星级评分
    pub star_rating: Option<f64>,
    /// 评分数量
    pub num_ratings: i32,
    /// 评论数量
    pub num_reviews: i32,
    /// 原始内容发布日期
    pub date_published: Option<NaiveDate>,
    /// 原始内容更新日期
    pub date_updated: Option<NaiveDate>,
    /// 行创建时间
    pub date_created: DateTime<FixedOffset>,
    /// 行最后修改时间
    pub date_modified: DateTime<FixedOffset>,
}

/// 菜品来源枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DishSource {
    /// 来自食谱页面
    #[default]
    Recipe,
    /// 来自菜单条目
    Menu,
}

impl fmt::Display for DishSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DishSource::Recipe => write!(f, "recipe"),
            DishSource::Menu => write!(f, "menu"),
        }
    }
}

impl FromStr for DishSource {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recipe" => Ok(DishSource::Recipe),
            "menu" => Ok(DishSource::Menu),
            _ => Err(()),
        }
    }
}

/// 菜品配料
///
/// 一道菜的单行配料。ingredient保存完整的自由文本名称，
/// flavor_ingredient保存贡献风味的核心配料。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishIngredient {
    /// 所属菜品ID
    pub dish_id: Uuid,
    /// 配料在菜品内的序号
    pub ingredient_id: i32,
    /// 完整配料名称
    pub ingredient: Option<String>,
    /// 风味配料名称
    pub flavor_ingredient: Option<String>,
    /// 用量
    pub quantity: Option<f64>,
    /// 用量单位
    pub units: Option<String>,
    /// 形态（fresh、dried、ground等）
    pub format: Option<String>,
    /// 配料类别
    pub kind: Option<String>,
    /// 配料角色（base、seasoning等）
    pub ingredient_role: Option<String>,
    /// 风味角色
    pub flavor_role: Option<String>,
    /// 预处理方式
    pub prep_method: Option<String>,
    /// 可替代配料列表
    pub alternative_ingredients: Option<Vec<String>>,
    /// 行添加时间
    pub date_added: DateTime<FixedOffset>,
}

impl DishIngredient {
    /// 创建一个新的配料行，序号由聚合在保存时分配
    pub fn new(dish_id: Uuid) -> Self {
        Self {
            dish_id,
            ingredient_id: 0,
            ingredient: None,
            flavor_ingredient: None,
            quantity: None,
            units: None,
            format: None,
            kind: None,
            ingredient_role: None,
            flavor_role: None,
            prep_method: None,
            alternative_ingredients: None,
            date_added: Utc::now().into(),
        }
    }
}

/// 菜品属性
///
/// dishes的一对一扩展，以并列的标签数组列承载多值标签。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishAttributes {
    /// 所属菜品ID
    pub dish_id: Uuid,
    /// 风味标签
    pub flavor_attributes: Option<Vec<String>>,
    /// 口感标签
    pub texture_attributes: Option<Vec<String>>,
    /// 香气标签
    pub aroma_attributes: Option<Vec<String>>,
    /// 烹饪技法标签
    pub cooking_techniques: Option<Vec<String>>,
    /// 饮食偏好标签
    pub diet_preferences: Option<Vec<String>>,
    /// 功能健康标签
    pub functional_health: Option<Vec<String>>,
    /// 场合标签
    pub occasions: Option<Vec<String>>,
    /// 便利性标签
    pub convenience_attributes: Option<Vec<String>>,
    /// 社交场景标签
    pub social_setting: Option<Vec<String>>,
    /// 情绪标签
    pub emotional_attributes: Option<Vec<String>>,
}

/// 菜品聚合
///
/// 一道菜连同其全部配料与属性，作为一个整体保存。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishRecord {
    pub dish: Dish,
    pub ingredients: Vec<DishIngredient>,
    pub attributes: Option<DishAttributes>,
}

impl DishRecord {
    /// 创建一个仅含菜品主体的聚合
    pub fn new(dish: Dish) -> Self {
        Self {
            dish,
            ingredients: Vec::new(),
            attributes: None,
        }
    }
}

impl Dish {
    /// 创建一个新的菜品
    ///
    /// # 参数
    ///
    /// * `dish_id` - 父行标识符
    /// * `dish_name` - 菜品名称
    /// * `source` - 菜品来源
    ///
    /// # 返回值
    ///
    /// 返回新创建的菜品实例，评分计数从零开始
    pub fn new(dish_id: Uuid, dish_name: String, source: DishSource) -> Self {
        Self {
            dish_id,
            dish_name,
            description: None,
            meal_time: None,
            general_category: None,
            specific_category: None,
            cuisine: None,
            complexity: None,
            serving_temperature: None,
            season: None,
            source,
            star_rating: None,
            num_ratings: 0,
            num_reviews: 0,
            date_published: None,
            date_updated: None,
            date_created: Utc::now().into(),
            date_modified: Utc::now().into(),
        }
    }

    /// 记录一次评分
    ///
    /// 以增量方式更新平均星级：新的平均值等于既有总分加上
    /// 本次评分后除以新的评分数量。
    ///
    /// # 参数
    ///
    /// * `stars` - 本次评分的星级
    pub fn apply_rating(&mut self, stars: f64) {
        let total = self.star_rating.unwrap_or(0.0) * self.num_ratings as f64 + stars;
        self.num_ratings += 1;
        self.star_rating = Some(total / self.num_ratings as f64);
        self.date_modified = Utc::now().into();
    }

    /// 记录一条评论
    pub fn apply_review(&mut self) {
        self.num_reviews += 1;
        self.date_modified = Utc::now().into();
    }
}
